use crate::error::TokenizeError;
use crate::separators::SeparatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Word,
    Separator,
}

/// A maximal run of characters of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
    /// Byte offset of the span within the scanned text.
    pub start: usize,
}

impl<'a> Span<'a> {
    /// Byte offset just past the span.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_word(&self) -> bool {
        self.kind == SpanKind::Word
    }
}

/// Returns the word or separator run starting at byte offset `position`.
///
/// The kind of the run is decided by the character at `position`; the run
/// extends until the first character of the other kind or the end of `text`.
pub fn next_span<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<Span<'a>, TokenizeError> {
    if text.is_empty() {
        return Err(TokenizeError::EmptyText);
    }
    if position >= text.len() {
        return Err(TokenizeError::PositionOutOfRange {
            position,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(TokenizeError::NotCharBoundary { position });
    }
    Ok(scan(text, position, separators))
}

// Callers guarantee a non-empty remainder starting on a char boundary.
fn scan<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Span<'a> {
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let leading_is_separator = chars
        .next()
        .map(|(_, c)| separators.contains(c))
        .unwrap_or(false);
    let len = chars
        .find(|&(_, c)| separators.contains(c) != leading_is_separator)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    let kind = if leading_is_separator {
        SpanKind::Separator
    } else {
        SpanKind::Word
    };
    Span {
        kind,
        text: &rest[..len],
        start: position,
    }
}

/// Iterator over every span of a line, in order.
#[derive(Debug, Clone)]
pub struct Spans<'a, 's> {
    text: &'a str,
    cursor: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Spans<'a, '_> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let span = scan(self.text, self.cursor, self.separators);
        self.cursor = span.end();
        Some(span)
    }
}

pub fn spans<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Spans<'a, 's> {
    Spans {
        text,
        cursor: 0,
        separators,
    }
}

/// Word spans only; separator runs are dropped.
pub fn words<'a, 's>(
    text: &'a str,
    separators: &'s SeparatorSet,
) -> impl Iterator<Item = &'a str> + 's
where
    'a: 's,
{
    spans(text, separators)
        .filter(Span::is_word)
        .map(|span| span.text)
}
