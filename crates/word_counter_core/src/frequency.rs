use std::collections::btree_map::{self, BTreeMap};

use counter_logging::{counter_debug, counter_trace};

use crate::separators::SeparatorSet;
use crate::source::LineSource;
use crate::tokenizer::words;

/// Occurrence count of every distinct word, case preserved.
///
/// Keys iterate in code-point order so repeated runs observe the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every word of an in-memory document.
    pub fn from_text(text: &str, separators: &SeparatorSet) -> Self {
        let mut map = Self::new();
        for line in text.lines() {
            map.record_line(line, separators);
        }
        map
    }

    /// Increments `word`, inserting it with a count of one when absent.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Records every word span of `line` and returns how many were recorded.
    pub fn record_line(&mut self, line: &str, separators: &SeparatorSet) -> usize {
        let mut recorded = 0;
        for word in words(line, separators) {
            self.record(word);
            recorded += 1;
        }
        recorded
    }

    pub fn count(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of word occurrences seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Reads `source` to end of stream and counts every word on every line.
///
/// Blank lines contribute nothing. Errors from the source are returned as is.
pub fn count_words<S: LineSource>(
    source: &mut S,
    separators: &SeparatorSet,
) -> Result<FrequencyMap, S::Error> {
    let mut map = FrequencyMap::new();
    let mut lines = 0usize;
    let mut occurrences = 0usize;
    while let Some(line) = source.next_line()? {
        lines += 1;
        if line.is_empty() {
            continue;
        }
        let recorded = map.record_line(&line, separators);
        counter_trace!("Line {}: {} words", lines, recorded);
        occurrences += recorded;
    }
    counter_debug!(
        "Counted {} words ({} distinct) over {} lines",
        occurrences,
        map.len(),
        lines
    );
    Ok(map)
}
