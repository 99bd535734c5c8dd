//! Single-slot clipboard.

/// Holds the most recently copied text.
///
/// Each [`set`](Self::set) overwrites the previous contents; reading never
/// consumes them, so the same text can be pasted any number of times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    contents: String,
}

impl Clipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard contents.
    pub fn set(&mut self, text: String) {
        self.contents = text;
    }

    /// Current contents.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.contents
    }

    /// Number of characters held.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.contents.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Empty the clipboard.
    pub fn clear(&mut self) {
        self.contents.clear();
    }
}
