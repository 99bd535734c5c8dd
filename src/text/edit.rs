//! Editable text buffer with a cursor and a single-slot clipboard.
//!
//! This module provides [`Buffer`], a rope-backed character sequence with an
//! embedded cursor. The cursor sits *between* characters: offset `0` is before
//! the first character and offset `len` is after the last.
//!
//! Every operation is total. Moving past either end, deleting at the end,
//! copying more than remains, and pasting an empty clipboard all degrade to
//! no-ops or clamped behavior instead of failing.
//!
//! # Examples
//!
//! ```
//! use cursorbuf::Buffer;
//!
//! let mut buf = Buffer::with_text("hello world");
//!
//! // Copy the first word and paste it at the end
//! buf.copy_words(1);
//! buf.move_cursor_to_end();
//! buf.paste();
//! assert_eq!(buf.text(), "hello worldhello");
//! assert_eq!(buf.cursor(), 16);
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::options::BufferOptions;
use crate::text::clipboard::Clipboard;
use crate::text::rope::RopeWrapper;
use crate::text::word;

/// Text buffer with a cursor, word motions, and copy/paste.
///
/// `Buffer` owns its character storage and clipboard outright. Nothing inside
/// it is reachable except through its methods, and the cursor is a plain
/// character offset that is kept within `[0, len]` after every operation.
///
/// - **Cursor movement**: characters, words, buffer bounds
/// - **Editing**: insert at the cursor, delete to the right of the cursor
/// - **Clipboard**: copy characters or words, paste repeatedly
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    rope: RopeWrapper,
    cursor: usize,
    clipboard: Clipboard,
    options: BufferOptions,
}

impl Buffer {
    /// Create a new empty buffer with the cursor at 0 and an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`, with the cursor at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: RopeWrapper::from_str(text),
            ..Self::default()
        }
    }

    /// Create an empty buffer with custom word delimiters.
    pub fn with_options(options: BufferOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    /// Get the buffer options.
    #[must_use]
    pub fn options(&self) -> &BufferOptions {
        &self.options
    }

    /// Get the full text content, independent of the cursor.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of characters left of the cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Current clipboard contents.
    #[must_use]
    pub fn clipboard(&self) -> &str {
        self.clipboard.get()
    }

    /// Empty the clipboard so that [`paste`](Self::paste) inserts nothing.
    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }

    /// Character immediately left of the cursor.
    #[must_use]
    pub fn char_before_cursor(&self) -> Option<char> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.rope.char_at(idx))
    }

    /// Character immediately right of the cursor.
    #[must_use]
    pub fn char_after_cursor(&self) -> Option<char> {
        self.rope.char_at(self.cursor)
    }

    /// Set the cursor by character offset, clamped to the end of the buffer.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len());
    }

    /// Set the cursor by character offset, rejecting offsets past the end.
    pub fn try_set_cursor(&mut self, offset: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            emit_log_with(LogLevel::Warn, || {
                format!("rejected cursor offset {offset} (len {len})")
            });
            return Err(Error::CursorOutOfBounds { offset, len });
        }
        self.cursor = offset;
        Ok(())
    }

    /// Move the cursor one character right. No-op at the end.
    pub fn move_cursor_forward(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor one character left. No-op at the start.
    pub fn move_cursor_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor before the first character.
    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor after the last character.
    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.len();
    }

    /// Move the cursor just past the next word.
    ///
    /// Skips any delimiters right of the cursor, then the word after them.
    /// Ends at the end of the buffer if no word remains.
    pub fn move_cursor_forward_word(&mut self) {
        self.cursor = self.next_word_end(self.cursor);
    }

    /// Move the cursor to the start of the preceding word.
    ///
    /// Skips any delimiters left of the cursor, then the word before them.
    /// From inside a word this lands on that word's start.
    pub fn move_cursor_backward_word(&mut self) {
        self.cursor = word::prev_word_start(&self.rope, self.cursor, |ch| {
            self.options.is_delimiter(ch)
        });
    }

    /// Insert a character at the cursor and step over it.
    pub fn insert_character(&mut self, ch: char) {
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor and step over it.
    ///
    /// Equivalent to calling [`insert_character`](Self::insert_character) for
    /// each character of `text` in order.
    pub fn insert_string(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }

    /// Delete the character right of the cursor. No-op at the end.
    pub fn delete_character(&mut self) {
        if self.cursor < self.len() {
            self.rope.remove(self.cursor, self.cursor + 1);
        }
    }

    /// Delete the delimiter run right of the cursor, then the word after it.
    ///
    /// Removes exactly the text [`move_cursor_forward_word`](Self::move_cursor_forward_word)
    /// would have skipped. The cursor does not move.
    pub fn delete_word(&mut self) {
        let end = self.next_word_end(self.cursor);
        self.rope.remove(self.cursor, end);
    }

    /// Copy up to `n_chars` characters right of the cursor into the clipboard.
    ///
    /// Requests past the end are clamped. The cursor does not move.
    pub fn copy(&mut self, n_chars: usize) {
        let end = self.cursor.saturating_add(n_chars).min(self.len());
        let available = end - self.cursor;
        if available < n_chars {
            emit_log_with(LogLevel::Debug, || {
                format!("copy of {n_chars} chars clamped to {available}")
            });
        }
        self.set_clipboard(self.cursor, end);
    }

    /// Copy from the cursor through the end of the `n_words`-th following word.
    ///
    /// Uses the same scan as [`move_cursor_forward_word`](Self::move_cursor_forward_word),
    /// applied `n_words` times and stopping early at the end of the buffer.
    /// Delimiters between the cursor and the first word are included in the
    /// copied text. The cursor does not move.
    pub fn copy_words(&mut self, n_words: usize) {
        let end = word::nth_word_end(&self.rope, self.cursor, n_words, |ch| {
            self.options.is_delimiter(ch)
        });
        self.set_clipboard(self.cursor, end);
    }

    /// Insert the clipboard contents at the cursor and step over them.
    ///
    /// The clipboard keeps its contents, so repeated pastes insert the same
    /// text again. Pasting an empty clipboard does nothing.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            emit_log_with(LogLevel::Debug, || "paste with empty clipboard".to_string());
            return;
        }
        self.rope.insert(self.cursor, self.clipboard.get());
        self.cursor += self.clipboard.len_chars();
    }

    fn next_word_end(&self, from: usize) -> usize {
        word::next_word_end(&self.rope, from, |ch| self.options.is_delimiter(ch))
    }

    fn set_clipboard(&mut self, start: usize, end: usize) {
        let copied = self.rope.slice(start..end).to_string();
        emit_log_with(LogLevel::Debug, || {
            format!("clipboard set to {} chars", end - start)
        });
        self.clipboard.set(copied);
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.inner().chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
