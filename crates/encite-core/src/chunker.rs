//! Document chunker.
//!
//! Splits text into maximal runs of non-separator characters, keeping the
//! absolute char offsets of each run. The resulting chunk list is what the
//! model cites, so its order and offsets must be stable for a given input.

use crate::models::Chunk;

/// Characters that terminate a chunk.
pub const SEPARATORS: [char; 5] = [' ', '.', ',', '\n', '\t'];

/// Check whether `c` terminates a chunk.
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Split `text` into chunks, left to right.
///
/// Runs of separators collapse, so no chunk is ever empty. Empty input, or
/// input made only of separators, yields no chunks.
pub fn chunk_text(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut chunk_start = 0;
    let mut char_count = 0;

    for (i, c) in text.chars().enumerate() {
        char_count = i + 1;

        if is_separator(c) {
            if !current.is_empty() {
                chunks.push(Chunk::new(std::mem::take(&mut current), chunk_start, i));
            }
        } else {
            if current.is_empty() {
                chunk_start = i;
            }
            current.push(c);
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk::new(current, chunk_start, char_count));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(chunks: &[Chunk]) -> Vec<(&str, usize, usize)> {
        chunks
            .iter()
            .map(|c| (c.text.as_str(), c.start_char_index, c.end_char_index))
            .collect()
    }

    #[test]
    fn test_chunk_text() {
        let chunks = chunk_text("Hello, World.\nTest");
        assert_eq!(
            spans(&chunks),
            vec![("Hello", 0, 5), ("World", 7, 12), ("Test", 14, 18)]
        );
    }

    #[test]
    fn test_chunk_text_empty() {
        assert!(chunk_text("").is_empty());
    }

    #[test]
    fn test_chunk_text_single_word() {
        assert_eq!(spans(&chunk_text("Hello")), vec![("Hello", 0, 5)]);
    }

    #[test]
    fn test_chunk_text_multiple_separators() {
        let chunks = chunk_text("Hello,,,World...Test");
        assert_eq!(
            spans(&chunks),
            vec![("Hello", 0, 5), ("World", 8, 13), ("Test", 16, 20)]
        );
    }

    #[test]
    fn test_chunk_text_all_separators() {
        assert!(chunk_text("  ,.\n\t  ").is_empty());
    }

    #[test]
    fn test_chunk_text_mixed_separators() {
        let chunks = chunk_text("Hello\tWorld\n\nTest");
        assert_eq!(
            spans(&chunks),
            vec![("Hello", 0, 5), ("World", 6, 11), ("Test", 13, 17)]
        );
    }

    #[test]
    fn test_chunk_text_trailing_separators() {
        let chunks = chunk_text("Hello, World, ");
        assert_eq!(spans(&chunks), vec![("Hello", 0, 5), ("World", 7, 12)]);
    }

    #[test]
    fn test_chunk_text_other_punctuation_is_kept() {
        // Only the fixed separator set splits; hyphens and colons stay inside.
        let chunks = chunk_text("state-of-the-art: yes!");
        assert_eq!(
            spans(&chunks),
            vec![("state-of-the-art:", 0, 17), ("yes!", 18, 22)]
        );
    }

    #[test]
    fn test_chunk_text_counts_chars_not_bytes() {
        let chunks = chunk_text("Zoë visited Łódź.");
        assert_eq!(
            spans(&chunks),
            vec![("Zoë", 0, 3), ("visited", 4, 11), ("Łódź", 12, 16)]
        );
    }
}
