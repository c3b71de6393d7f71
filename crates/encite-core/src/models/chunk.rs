//! Document chunk models.

use serde::{Deserialize, Serialize};

/// A separator-delimited token of the source document.
///
/// The position of a chunk in the sequence produced by
/// [`chunk_text`](crate::chunker::chunk_text) is the index the model cites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Token text, never containing a separator
    pub text: String,
    /// Char index of the first character (inclusive)
    pub start_char_index: usize,
    /// Char index one past the last character (exclusive)
    pub end_char_index: usize,
}

/// A plain text node inside a citable document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub text: String,
}

impl Chunk {
    /// Create a new chunk.
    pub fn new(text: impl Into<String>, start_char_index: usize, end_char_index: usize) -> Self {
        Self {
            text: text.into(),
            start_char_index,
            end_char_index,
        }
    }

    /// Length of the chunk in chars.
    pub fn len(&self) -> usize {
        self.end_char_index.saturating_sub(self.start_char_index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as the text node the model sees for this chunk.
    pub fn to_content_node(&self) -> ContentNode {
        ContentNode {
            node_type: "text".into(),
            text: self.text.clone(),
        }
    }
}
