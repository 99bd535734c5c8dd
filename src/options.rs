//! Buffer configuration.

use crate::error::{Error, Result};

/// Characters that separate words by default.
pub const DEFAULT_DELIMITERS: [char; 2] = [' ', '\n'];

/// Buffer configuration options.
///
/// These options control how a [`Buffer`](crate::Buffer) splits its text into
/// words for the word-granularity operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferOptions {
    /// Characters treated as word separators. Any other character is part of
    /// a word.
    pub delimiters: Vec<char>,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

impl BufferOptions {
    /// Options with a custom delimiter set.
    #[must_use]
    pub fn with_delimiters(delimiters: impl IntoIterator<Item = char>) -> Self {
        Self {
            delimiters: delimiters.into_iter().collect(),
        }
    }

    /// Check that the options describe a usable word model.
    pub fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(Error::InvalidOptions(
                "at least one word delimiter is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `ch` separates words under these options.
    #[must_use]
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }
}
