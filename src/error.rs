//! Error types for cursorbuf.
//!
//! The core editing operations never fail; these errors only come from the
//! checked entry points such as [`Buffer::try_set_cursor`](crate::Buffer::try_set_cursor)
//! and [`BufferOptions::validate`](crate::BufferOptions::validate).

use std::fmt;

/// Result type alias for cursorbuf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cursorbuf operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Cursor offset lies past the end of the buffer.
    CursorOutOfBounds { offset: usize, len: usize },
    /// Buffer options failed validation.
    InvalidOptions(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CursorOutOfBounds { offset, len } => {
                write!(
                    f,
                    "cursor offset {offset} out of bounds for buffer of length {len}"
                )
            }
            Self::InvalidOptions(reason) => write!(f, "invalid buffer options: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
