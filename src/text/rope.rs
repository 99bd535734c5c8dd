//! Rope wrapper using the ropey crate.

use ropey::iter::Chars;
use ropey::{Rope, RopeSlice};
use std::ops::RangeBounds;

/// Wrapper around `ropey::Rope` with char-indexed, non-panicking accessors.
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create an empty rope.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Character at `char_idx`, or `None` past the end.
    #[must_use]
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        self.rope.get_char(char_idx)
    }

    /// Bidirectional character iterator positioned before `char_idx`.
    ///
    /// `next()` yields the character at `char_idx`, `prev()` the one before.
    /// The index is clamped to the end of the rope.
    #[must_use]
    pub fn chars_at(&self, char_idx: usize) -> Chars<'_> {
        self.rope.chars_at(char_idx.min(self.len_chars()))
    }

    /// Get a slice of the rope, or an empty slice for an invalid range.
    #[must_use]
    pub fn slice<R>(&self, range: R) -> RopeSlice<'_>
    where
        R: RangeBounds<usize>,
    {
        self.rope
            .get_slice(range)
            .unwrap_or_else(|| self.rope.slice(..0))
    }

    /// Insert text at a character position. Out-of-range positions are ignored.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if char_idx <= self.len_chars() {
            self.rope.insert(char_idx, text);
        }
    }

    /// Insert one character at a character position.
    pub fn insert_char(&mut self, char_idx: usize, ch: char) {
        if char_idx <= self.len_chars() {
            self.rope.insert_char(char_idx, ch);
        }
    }

    /// Remove the characters in `start..end`, clamped to the rope.
    pub fn remove(&mut self, start: usize, end: usize) {
        let end = end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Get access to the underlying rope.
    #[must_use]
    pub fn inner(&self) -> &Rope {
        &self.rope
    }
}

impl From<&str> for RopeWrapper {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}
