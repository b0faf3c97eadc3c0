//! Word counter core: tokenizer, frequency aggregation and report ordering.
mod error;
mod frequency;
mod separators;
mod sort;
mod source;
mod tokenizer;

pub use error::TokenizeError;
pub use frequency::{count_words, FrequencyMap};
pub use separators::{SeparatorSet, DEFAULT_SEPARATORS};
pub use sort::{compare_ignore_case, sort_keys};
pub use source::{LineSource, ReaderLines, TextLines};
pub use tokenizer::{next_span, spans, words, Span, SpanKind, Spans};
