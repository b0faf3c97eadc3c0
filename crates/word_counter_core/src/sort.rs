use std::cmp::Ordering;

use crate::frequency::FrequencyMap;

/// Case-insensitive ordering of two words.
///
/// Characters are compared after folding to upper and then lower case, which
/// makes `"Straße"` and `"STRASSE"` differ but `"The"` and `"the"` equal. When
/// one word is a prefix of the other the shorter sorts first.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

fn fold(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

// Multi-character case mappings are left unfolded.
fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Every key of `map` exactly once, in case-insensitive alphabetical order.
///
/// Keys that differ only in case keep their code-point order.
pub fn sort_keys(map: &FrequencyMap) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().collect();
    keys.sort_by(|a, b| compare_ignore_case(a, b));
    keys
}
