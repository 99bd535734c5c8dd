//! Fuzz target for buffer operation sequences.
//!
//! Drives a `Buffer` with arbitrary operations and checks that nothing panics,
//! the cursor never leaves `[0, len]`, and the length stays consistent.

#![no_main]

use arbitrary::Arbitrary;
use cursorbuf::Buffer;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Forward,
    Backward,
    ToStart,
    ToEnd,
    ForwardWord,
    BackwardWord,
    Insert(char),
    InsertStr(String),
    Delete,
    DeleteWord,
    Copy(u16),
    CopyWords(u8),
    Paste,
    SetCursor(u16),
}

#[derive(Arbitrary, Debug)]
struct Input {
    initial: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut buf = Buffer::with_text(&input.initial);
    let mut expected_len = input.initial.chars().count();

    for op in input.ops.iter().take(1000) {
        match op {
            Op::Forward => buf.move_cursor_forward(),
            Op::Backward => buf.move_cursor_backward(),
            Op::ToStart => buf.move_cursor_to_start(),
            Op::ToEnd => buf.move_cursor_to_end(),
            Op::ForwardWord => buf.move_cursor_forward_word(),
            Op::BackwardWord => buf.move_cursor_backward_word(),
            Op::Insert(ch) => {
                buf.insert_character(*ch);
                expected_len += 1;
            }
            Op::InsertStr(s) => {
                buf.insert_string(s);
                expected_len += s.chars().count();
            }
            Op::Delete => {
                if buf.cursor() < buf.len() {
                    expected_len -= 1;
                }
                buf.delete_character();
            }
            Op::DeleteWord => {
                let cursor = buf.cursor();
                buf.delete_word();
                assert_eq!(buf.cursor(), cursor, "delete_word moved the cursor");
                expected_len = buf.len();
            }
            Op::Copy(n) => buf.copy(usize::from(*n)),
            Op::CopyWords(n) => buf.copy_words(usize::from(*n)),
            Op::Paste => {
                expected_len += buf.clipboard().chars().count();
                buf.paste();
            }
            Op::SetCursor(offset) => {
                let _ = buf.try_set_cursor(usize::from(*offset));
            }
        }

        assert!(buf.cursor() <= buf.len(), "cursor escaped buffer after {op:?}");
        assert_eq!(buf.len(), expected_len, "length drift after {op:?}");
    }
    assert_eq!(buf.text().chars().count(), buf.len());
});
