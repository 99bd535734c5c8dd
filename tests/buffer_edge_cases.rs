//! Edge case tests for buffer operations.
//!
//! Tests boundary conditions at both ends of the buffer, empty-buffer
//! behavior, delimiter-only text, and the checked entry points.

mod common;

use common::{buffer_at, init_logging};
use cursorbuf::{Buffer, BufferOptions, Error};

// ============================================================================
// Empty Buffer
// ============================================================================

mod empty_buffer {
    use super::*;

    #[test]
    fn every_operation_is_a_no_op() {
        init_logging();
        let mut buf = Buffer::new();

        buf.move_cursor_backward();
        buf.move_cursor_forward();
        buf.delete_character();
        buf.paste();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);

        buf.move_cursor_forward_word();
        buf.move_cursor_backward_word();
        buf.move_cursor_to_end();
        buf.move_cursor_to_start();
        buf.delete_word();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn copy_from_empty_buffer() {
        init_logging();
        let mut buf = Buffer::new();
        buf.copy(5);
        assert_eq!(buf.clipboard(), "");
        buf.copy_words(2);
        assert_eq!(buf.clipboard(), "");
        buf.paste();
        assert!(buf.is_empty());
    }

    #[test]
    fn no_char_around_cursor() {
        let buf = Buffer::new();
        assert_eq!(buf.char_before_cursor(), None);
        assert_eq!(buf.char_after_cursor(), None);
    }
}

// ============================================================================
// Boundary Conditions
// ============================================================================

mod boundary_conditions {
    use super::*;

    #[test]
    fn forward_at_end_is_no_op() {
        let mut buf = buffer_at("abc", 3);
        buf.move_cursor_forward();
        buf.move_cursor_forward_word();
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn backward_at_start_is_no_op() {
        let mut buf = buffer_at("abc", 0);
        buf.move_cursor_backward();
        buf.move_cursor_backward_word();
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn delete_at_end_is_no_op() {
        let mut buf = buffer_at("abc", 3);
        buf.delete_character();
        buf.delete_word();
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn copy_at_end_yields_empty_clipboard() {
        let mut buf = buffer_at("abc", 0);
        buf.copy(2);
        assert_eq!(buf.clipboard(), "ab");

        buf.move_cursor_to_end();
        buf.copy(2);
        assert_eq!(buf.clipboard(), "", "copy overwrites even when clamped to nothing");
    }

    #[test]
    fn copy_huge_count_does_not_overflow() {
        let mut buf = buffer_at("abc", 1);
        buf.copy(usize::MAX);
        assert_eq!(buf.clipboard(), "bc");
        buf.copy_words(usize::MAX);
        assert_eq!(buf.clipboard(), "bc");
    }

    #[test]
    fn insert_at_start_and_end() {
        let mut buf = buffer_at("mid", 0);
        buf.insert_character('<');
        buf.move_cursor_to_end();
        buf.insert_character('>');
        assert_eq!(buf.text(), "<mid>");
        assert_eq!(buf.cursor(), 5);
    }
}

// ============================================================================
// Delimiter-only Text
// ============================================================================

mod delimiters_only {
    use super::*;

    #[test]
    fn forward_word_runs_to_end() {
        let mut buf = buffer_at("  \n \n", 0);
        buf.move_cursor_forward_word();
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn backward_word_runs_to_start() {
        let mut buf = buffer_at("  \n \n", 5);
        buf.move_cursor_backward_word();
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn delete_word_clears_whitespace() {
        let mut buf = buffer_at("x   ", 1);
        buf.delete_word();
        assert_eq!(buf.text(), "x");
    }

    #[test]
    fn copy_words_takes_trailing_whitespace() {
        let mut buf = buffer_at("x \n ", 1);
        buf.copy_words(1);
        assert_eq!(buf.clipboard(), " \n ");
    }

    #[test]
    fn tab_is_part_of_a_word_by_default() {
        let mut buf = buffer_at("a\tb c", 0);
        buf.move_cursor_forward_word();
        assert_eq!(buf.cursor(), 3);
    }
}

// ============================================================================
// Checked Entry Points
// ============================================================================

mod checked {
    use super::*;

    #[test]
    fn try_set_cursor_accepts_end() {
        init_logging();
        let mut buf = Buffer::with_text("abc");
        assert_eq!(buf.try_set_cursor(3), Ok(()));
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.try_set_cursor(0), Ok(()));
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn try_set_cursor_rejects_past_end() {
        init_logging();
        let mut buf = buffer_at("abc", 2);
        let err = buf.try_set_cursor(10).unwrap_err();
        assert_eq!(err, Error::CursorOutOfBounds { offset: 10, len: 3 });
        assert_eq!(buf.cursor(), 2, "cursor unchanged on error");
    }

    #[test]
    fn set_cursor_clamps() {
        let mut buf = Buffer::with_text("abc");
        buf.set_cursor(usize::MAX);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn empty_delimiter_set_rejected() {
        let opts = BufferOptions {
            delimiters: Vec::new(),
        };
        let err = Buffer::with_options(opts).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
        assert!(err.to_string().contains("delimiter"));
    }

    #[test]
    fn tab_delimiter_option() {
        let opts = BufferOptions::with_delimiters([' ', '\n', '\t']);
        let mut buf = Buffer::with_options(opts).expect("valid options");
        buf.insert_string("a\tb c");
        buf.move_cursor_to_start();
        buf.move_cursor_forward_word();
        assert_eq!(buf.cursor(), 1);
        assert_eq!(buf.options().delimiters.len(), 3);
    }
}
