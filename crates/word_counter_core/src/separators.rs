use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::TokenizeError;

/// Characters that split words by default: space, tab and common punctuation.
pub const DEFAULT_SEPARATORS: &[char] = &['.', '-', ',', ' ', '/', '\'', ';', ':', '!', '?', '\t'];

/// Immutable, non-empty set of delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    pub fn new<I>(chars: I) -> Result<Self, TokenizeError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: BTreeSet<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(TokenizeError::EmptySeparators);
        }
        Ok(Self { chars })
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Separator characters in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SEPARATORS.iter().copied().collect(),
        }
    }
}

impl FromStr for SeparatorSet {
    type Err = TokenizeError;

    /// Every character of the string becomes a separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
