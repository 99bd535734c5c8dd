//! Word boundary scanning.
//!
//! A word is a maximal run of non-delimiter characters. Both scans are
//! two-phase: first skip delimiters adjacent to the start position, then skip
//! the word that follows. The forward scan drives cursor motion, deletion, and
//! copying, so all three agree on where a word ends.

use crate::text::rope::RopeWrapper;

/// Offset just past the next word at or after `from`.
///
/// Skips any delimiter run immediately right of `from`, then the word
/// characters after it. Returns the rope length when no word remains.
#[must_use]
pub fn next_word_end<F>(rope: &RopeWrapper, from: usize, is_delimiter: F) -> usize
where
    F: Fn(char) -> bool,
{
    let mut pos = from.min(rope.len_chars());
    let mut chars = rope.chars_at(pos).peekable();

    while chars.next_if(|&ch| is_delimiter(ch)).is_some() {
        pos += 1;
    }
    while chars.next_if(|&ch| !is_delimiter(ch)).is_some() {
        pos += 1;
    }
    pos
}

/// Offset at the start of the word preceding `from`.
///
/// Skips any delimiter run immediately left of `from`, then the word
/// characters before it. Returns 0 when no word precedes `from`.
#[must_use]
pub fn prev_word_start<F>(rope: &RopeWrapper, from: usize, is_delimiter: F) -> usize
where
    F: Fn(char) -> bool,
{
    let mut pos = from.min(rope.len_chars());
    let mut chars = rope.chars_at(pos);

    while let Some(ch) = chars.prev() {
        if !is_delimiter(ch) {
            // Step back over the word character so phase two sees it again.
            chars.next();
            break;
        }
        pos -= 1;
    }
    while let Some(ch) = chars.prev() {
        if is_delimiter(ch) {
            break;
        }
        pos -= 1;
    }
    pos
}

/// Offset reached by applying [`next_word_end`] `n_words` times from `from`.
///
/// Stops early at the end of the rope. Zero words yields `from`.
#[must_use]
pub fn nth_word_end<F>(rope: &RopeWrapper, from: usize, n_words: usize, is_delimiter: F) -> usize
where
    F: Fn(char) -> bool,
{
    let len = rope.len_chars();
    let mut pos = from.min(len);
    for _ in 0..n_words {
        if pos == len {
            break;
        }
        pos = next_word_end(rope, pos, &is_delimiter);
    }
    pos
}
