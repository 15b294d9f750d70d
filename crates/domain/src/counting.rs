// crates/domain/src/counting.rs
//! Single-pass line/word/byte scan over an in-memory byte slice.

use crate::model::Counts;

/// Whitespace in the ASCII range: space, `\t`, `\n`, vertical tab, form feed,
/// `\r` and the information separators 0x1C to 0x1F. Bytes outside ASCII are
/// never whitespace.
#[inline]
#[must_use]
pub const fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | 0x1C..=0x1F)
}

/// Count lines, words and bytes in `input`.
///
/// * `bytes` is the raw length.
/// * `lines` is the number of `\n` bytes; an unterminated last line does not count.
/// * `words` is the number of maximal non-whitespace runs; a run still open at
///   the end of input counts.
#[must_use]
pub fn count_bytes(input: &[u8]) -> Counts {
    let mut lines = 0;
    let mut words = 0;
    let mut in_word = false;

    for &byte in input {
        if byte == b'\n' {
            lines += 1;
        }

        if is_word_separator(byte) {
            if in_word {
                words += 1;
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }

    if in_word {
        words += 1;
    }

    Counts::new(lines, words, input.len())
}
