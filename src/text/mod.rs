//! Text storage and editing.
//!
//! This module provides a rope-backed editable buffer with a cursor and a
//! single-slot clipboard.
//!
//! Key types:
//!
//! - [`Buffer`]: Editable text with cursor movement, word operations, and
//!   copy/paste
//! - [`Clipboard`]: The single overwritable slot behind copy and paste
//! - [`RopeWrapper`]: Char-indexed storage over `ropey::Rope`
//!
//! # Words
//!
//! A word is a maximal run of characters that are not delimiters. By default
//! the delimiters are space and newline; see
//! [`BufferOptions`](crate::BufferOptions) to change them. Word scanning lives
//! in [`word`].
//!
//! # Examples
//!
//! ```
//! use cursorbuf::Buffer;
//!
//! let mut buf = Buffer::with_text("foo bar");
//! buf.delete_word();
//! assert_eq!(buf.text(), " bar");
//! assert_eq!(buf.cursor(), 0);
//!
//! buf.move_cursor_forward_word();
//! assert_eq!(buf.cursor(), 4);
//! ```

mod clipboard;
mod edit;
mod rope;
pub mod word;

pub use clipboard::Clipboard;
pub use edit::Buffer;
pub use rope::RopeWrapper;
