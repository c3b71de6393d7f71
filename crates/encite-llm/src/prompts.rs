//! NER prompts and request assembly for citation-grounded extraction.
//!
//! The document is not sent as one string. Each chunk becomes its own text
//! node inside a citable `document` part, so the model's citations come back
//! as chunk index ranges. Node order must match chunk order exactly.

use encite_core::models::{Chunk, ContentNode};
use serde::{Deserialize, Serialize};

/// System prompt for citation-based NER.
pub const NER_SYSTEM_PROMPT: &str = r#"You are a named entity recognition (NER) expert.
Extract all named entities from the provided document.

INSTRUCTIONS:

- make sure to include citations
- each citation must be a single entity
- each citation must include the entity type and name in the text, e.g. "<entity_type>company</entity_type><name>Microsoft</name>"
"#;

/// Title given to the citable document.
pub const DOCUMENT_TITLE: &str = "Document";

/// Chat message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single request message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

/// Message content: plain text or a list of typed parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A typed part of a user message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    Document(DocumentPart),
}

/// A citable document made of pre-chunked content nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentPart {
    pub source: DocumentSource,
    pub title: String,
    pub citations: CitationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentSource {
    /// One content node per chunk.
    Content { content: Vec<ContentNode> },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitationsConfig {
    pub enabled: bool,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }

    /// Text of a plain-text message, `None` for multi-part content.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(text),
            MessageContent::Parts(_) => None,
        }
    }
}

impl DocumentPart {
    /// Build a citable document from chunks, preserving their order.
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        Self {
            source: DocumentSource::Content {
                content: chunks.iter().map(Chunk::to_content_node).collect(),
            },
            title: DOCUMENT_TITLE.to_string(),
            citations: CitationsConfig { enabled: true },
        }
    }
}

/// Render entity type labels as a bracketed, quoted list: `['company', 'person']`.
pub fn format_entity_types<S: AsRef<str>>(entity_types: &[S]) -> String {
    let quoted: Vec<String> = entity_types
        .iter()
        .map(|t| format!("'{}'", t.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// System prompt with the required entity types appended.
pub fn make_system_prompt<S: AsRef<str>>(system_prompt: &str, entity_types: &[S]) -> String {
    format!(
        "{}\nYou must extract the following entity types: {}",
        system_prompt,
        format_entity_types(entity_types)
    )
}

/// Build the two-message request: system instructions, then the chunked document.
pub fn build_messages<S: AsRef<str>>(
    chunks: &[Chunk],
    system_prompt: &str,
    entity_types: &[S],
) -> Vec<Message> {
    vec![
        Message::system(make_system_prompt(system_prompt, entity_types)),
        Message::user(vec![ContentPart::Document(DocumentPart::from_chunks(chunks))]),
    ]
}
