//! Model response content blocks and citations.
//!
//! Field names follow the provider's wire format. Note that a citation's
//! `start_block_index`/`end_block_index` index into the *chunk* sequence
//! sent with the request, not into the response's own block list.

use std::ops::Range;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Block type carrying plain model text.
pub const TEXT_BLOCK_TYPE: &str = "text";

/// One content block of a model response.
///
/// Parsing is lenient: a block with a missing type, or with citations of an
/// unexpected shape, still deserializes and is skipped by reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    /// Block kind (`"text"`, `"tool_use"`, ...); empty when absent
    #[serde(rename = "type", default)]
    pub block_type: String,
    /// Block text; empty for non-text blocks
    #[serde(default)]
    pub text: String,
    /// Citations attached to the text; `None` unless the field is a list
    #[serde(
        default,
        deserialize_with = "lenient_citations",
        skip_serializing_if = "Option::is_none"
    )]
    pub citations: Option<Vec<Citation>>,
}

/// A reference from a content block to a half-open range of chunks.
///
/// Only `content_block_location` citations carry the chunk indices; other
/// citation kinds deserialize with both indices unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    /// Citation kind (e.g. `"content_block_location"`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub citation_type: Option<String>,
    /// First cited chunk (inclusive)
    #[serde(
        default,
        deserialize_with = "lenient_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_block_index: Option<usize>,
    /// One past the last cited chunk (exclusive)
    #[serde(
        default,
        deserialize_with = "lenient_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_block_index: Option<usize>,
    /// Text the provider reports as cited
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cited_text: Option<String>,
    /// Index of the cited document within the request
    #[serde(
        default,
        deserialize_with = "lenient_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_index: Option<usize>,
}

impl ContentBlock {
    /// Create a text block with the given citations.
    pub fn text(text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            block_type: TEXT_BLOCK_TYPE.into(),
            text: text.into(),
            citations: Some(citations),
        }
    }

    /// Create a text block without a citations field.
    pub fn uncited(text: impl Into<String>) -> Self {
        Self {
            block_type: TEXT_BLOCK_TYPE.into(),
            text: text.into(),
            citations: None,
        }
    }

    pub fn is_text(&self) -> bool {
        self.block_type == TEXT_BLOCK_TYPE
    }

    /// The first citation, which is the only one reconciliation uses.
    pub fn first_citation(&self) -> Option<&Citation> {
        self.citations.as_deref().and_then(<[Citation]>::first)
    }
}

impl Citation {
    /// Citation of chunks `start..end`.
    pub fn new(start_block_index: usize, end_block_index: usize) -> Self {
        Self {
            citation_type: Some("content_block_location".into()),
            start_block_index: Some(start_block_index),
            end_block_index: Some(end_block_index),
            ..Self::default()
        }
    }

    /// Cited chunk indices, `None` unless both bounds are present.
    pub fn chunk_range(&self) -> Option<Range<usize>> {
        Some(self.start_block_index?..self.end_block_index?)
    }
}

/// Keep a citation list only when the field is a JSON array. Elements that
/// are not citation objects become citations without a chunk range.
fn lenient_citations<'de, D>(deserializer: D) -> Result<Option<Vec<Citation>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| usize::try_from(n).ok()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
