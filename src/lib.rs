//! `cursorbuf` - Editable text buffer with a cursor
//!
//! An in-memory character buffer with an embedded cursor, character and word
//! motions, deletion to the right of the cursor, and a single-slot clipboard
//! for copy and paste. Storage is a rope, so edits stay cheap on large text.
//!
//! ```
//! use cursorbuf::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.insert_string("hello world");
//! assert_eq!(buf.cursor(), 11);
//!
//! buf.move_cursor_to_start();
//! buf.move_cursor_forward_word();
//! assert_eq!(buf.cursor(), 5);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow text::RopeWrapper etc
#![allow(clippy::missing_errors_doc)] // Errors are self-describing enums
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod error;
pub mod event;
pub mod options;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use options::{BufferOptions, DEFAULT_DELIMITERS};
pub use text::{Buffer, Clipboard};
