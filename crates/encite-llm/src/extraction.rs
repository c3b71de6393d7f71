//! Entity extraction through a citation-capable model.

use encite_core::models::{ContentBlock, Entity};
use encite_core::{chunk_text, reconcile, ReconcileError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::{build_messages, Message, NER_SYSTEM_PROMPT};

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Citation error: {0}")]
    Reconcile(#[from] ReconcileError),

    /// Failure inside the model collaborator, passed through unchanged.
    #[error(transparent)]
    Model(#[from] anyhow::Error),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Model response as far as extraction cares: its content blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelResponse {
    pub content: Vec<ContentBlock>,
}

/// A model that answers a request with cited content blocks.
///
/// Transport, auth, retries and timeouts are the implementor's business.
pub trait CitationModel {
    fn invoke(&self, messages: &[Message]) -> anyhow::Result<ModelResponse>;
}

impl<M: CitationModel + ?Sized> CitationModel for &M {
    fn invoke(&self, messages: &[Message]) -> anyhow::Result<ModelResponse> {
        (**self).invoke(messages)
    }
}

impl<M: CitationModel + ?Sized> CitationModel for Box<M> {
    fn invoke(&self, messages: &[Message]) -> anyhow::Result<ModelResponse> {
        (**self).invoke(messages)
    }
}

/// Parse a raw model response JSON object.
pub fn parse_model_response(json: &str) -> ExtractionResult<ModelResponse> {
    // Tolerate logging prefixes or trailing text around the object
    let json_start = json.find('{').ok_or_else(|| {
        ExtractionError::InvalidFormat("No JSON object found in response".into())
    })?;
    let json_end = json.rfind('}').ok_or_else(|| {
        ExtractionError::InvalidFormat("No closing brace found in response".into())
    })?;
    if json_end < json_start {
        return Err(ExtractionError::InvalidFormat(
            "Closing brace precedes opening brace".into(),
        ));
    }

    let response: ModelResponse = serde_json::from_str(&json[json_start..=json_end])?;
    Ok(response)
}

/// Find entities using the default NER system prompt.
pub fn find_entities<M, S>(model: &M, text: &str, entity_types: &[S]) -> ExtractionResult<Vec<Entity>>
where
    M: CitationModel + ?Sized,
    S: AsRef<str>,
{
    find_entities_with_prompt(model, text, entity_types, NER_SYSTEM_PROMPT)
}

/// Find entities in `text` with a custom system prompt.
///
/// Performs exactly one model invocation. Entities come back in the order
/// the model emitted them, with offsets into `text`.
pub fn find_entities_with_prompt<M, S>(
    model: &M,
    text: &str,
    entity_types: &[S],
    system_prompt: &str,
) -> ExtractionResult<Vec<Entity>>
where
    M: CitationModel + ?Sized,
    S: AsRef<str>,
{
    let chunks = chunk_text(text);
    tracing::debug!(chunk_count = chunks.len(), "Chunked document");

    let messages = build_messages(&chunks, system_prompt, entity_types);
    let response = model.invoke(&messages)?;

    let entities = reconcile(&response.content, &chunks)?;
    tracing::debug!(
        block_count = response.content.len(),
        entity_count = entities.len(),
        "Reconciled model response"
    );

    Ok(entities)
}
