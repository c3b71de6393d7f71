//! Recognized entity models.

use serde::{Deserialize, Serialize};

use crate::offset::slice_chars;

/// A named entity located in the source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Entity label as emitted by the model (e.g., "company")
    pub entity_type: String,
    /// Entity name as emitted by the model
    pub name: String,
    /// Absolute char position in the original text (inclusive)
    pub start_char_index: usize,
    /// Absolute char position in the original text (exclusive)
    pub end_char_index: usize,
}

impl Entity {
    pub fn new(
        entity_type: impl Into<String>,
        name: impl Into<String>,
        start_char_index: usize,
        end_char_index: usize,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            name: name.into(),
            start_char_index,
            end_char_index,
        }
    }

    /// Char span as a `(start, end)` pair.
    pub fn span(&self) -> (usize, usize) {
        (self.start_char_index, self.end_char_index)
    }

    /// Number of chars covered by the span.
    pub fn len(&self) -> usize {
        self.end_char_index.saturating_sub(self.start_char_index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice the cited text out of the document the entity was found in.
    ///
    /// Returns `None` when the span does not fit inside `text`.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        slice_chars(text, self.start_char_index, self.end_char_index)
    }
}
