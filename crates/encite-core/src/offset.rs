//! Char/byte offset conversion.
//!
//! Chunk and entity spans count chars (Unicode scalar values) so that they
//! match what a human or another runtime counts. Rust string slicing works on
//! bytes, so slicing by a char span goes through [`char_span_to_bytes`].
//!
//! ```text
//! Text:  "café Rio"
//! chars:  c a f é ␠ R i o       (é = 1 char)
//!         0 1 2 3 4 5 6 7
//! bytes:  0 1 2 3-4 5 6 7 8     (é = 2 bytes)
//!
//! char span (5, 8) "Rio" → byte range (6, 9)
//! ```

/// Convert a char span to a byte range within `text`.
///
/// Returns `None` if the span is inverted or extends past the end of `text`.
pub fn char_span_to_bytes(text: &str, char_start: usize, char_end: usize) -> Option<(usize, usize)> {
    if char_start > char_end {
        return None;
    }

    // Every char boundary, plus the end of the string.
    let mut boundaries = text
        .char_indices()
        .map(|(byte_idx, _)| byte_idx)
        .chain(std::iter::once(text.len()));

    let byte_start = boundaries.nth(char_start)?;
    let byte_end = if char_end == char_start {
        byte_start
    } else {
        boundaries.nth(char_end - char_start - 1)?
    };

    Some((byte_start, byte_end))
}

/// Slice `text` by a char span.
pub fn slice_chars(text: &str, char_start: usize, char_end: usize) -> Option<&str> {
    let (start, end) = char_span_to_bytes(text, char_start, char_end)?;
    text.get(start..end)
}
