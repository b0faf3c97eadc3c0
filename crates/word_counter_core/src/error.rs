use thiserror::Error;

/// Contract violations raised by the tokenizer and separator set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("cannot tokenize empty text")]
    EmptyText,
    #[error("position {position} is out of range for text of length {len}")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("position {position} is not on a character boundary")]
    NotCharBoundary { position: usize },
    #[error("separator set must contain at least one character")]
    EmptySeparators,
}
