//! Encite Core Library
//!
//! Citation-grounded named entity extraction: the document is split into
//! chunks, the model cites chunk ranges, and the citations are mapped back to
//! absolute char offsets.
//!
//! # Architecture
//!
//! ```text
//! Raw text ──► Chunker ──► [Chunk; n] ─────────────────────────┐
//!                              │                               │
//!                              ▼                               │
//!                     Prompt assembly (encite-llm)             │
//!                              │                               │
//!                              ▼                               │
//!                     Model call (collaborator)                │
//!                              │                               │
//!                              ▼                               ▼
//!                     [ContentBlock; m] ──────────────► Reconciler ──► [Entity]
//!                     citation = chunk range [s, e)   chunks[s].start .. chunks[e-1].end
//! ```
//!
//! # Modules
//!
//! - [`chunker`]: separator-based chunking with char offsets
//! - [`models`]: Domain types (Chunk, Entity, ContentBlock, Citation)
//! - [`reconciler`]: Tag extraction and citation-to-offset mapping
//! - [`offset`]: Char/byte span conversion

pub mod chunker;
pub mod models;
pub mod offset;
pub mod reconciler;

// Re-export commonly used types
pub use chunker::chunk_text;
pub use models::{Chunk, Citation, ContentBlock, ContentNode, Entity};
pub use reconciler::{reconcile, ReconcileError, ReconcileResult};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum EnciteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Citation error: {0}")]
    CitationError(String),
}

impl From<serde_json::Error> for EnciteError {
    fn from(e: serde_json::Error) -> Self {
        EnciteError::SerializationError(e.to_string())
    }
}

impl From<ReconcileError> for EnciteError {
    fn from(e: ReconcileError) -> Self {
        EnciteError::CitationError(e.to_string())
    }
}

// =========================================================================
// Functions (exported to FFI)
// =========================================================================

/// Split a document into citable chunks.
#[uniffi::export]
pub fn chunk_document(text: String) -> Vec<FfiChunk> {
    chunk_text(&text).into_iter().map(|c| c.into()).collect()
}

/// Reconcile a JSON array of response content blocks against the chunks
/// the document was sent as.
#[uniffi::export]
pub fn reconcile_response(
    blocks_json: String,
    chunks: Vec<FfiChunk>,
) -> Result<Vec<FfiEntity>, EnciteError> {
    let blocks: Vec<ContentBlock> = serde_json::from_str(&blocks_json)?;
    let chunks: Vec<Chunk> = chunks
        .into_iter()
        .map(Chunk::try_from)
        .collect::<Result<_, _>>()?;

    let entities = reconcile(&blocks, &chunks)?;
    Ok(entities.into_iter().map(|e| e.into()).collect())
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe chunk.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiChunk {
    pub text: String,
    pub start_char_index: u64,
    pub end_char_index: u64,
}

impl From<Chunk> for FfiChunk {
    fn from(chunk: Chunk) -> Self {
        Self {
            text: chunk.text,
            start_char_index: chunk.start_char_index as u64,
            end_char_index: chunk.end_char_index as u64,
        }
    }
}

impl TryFrom<FfiChunk> for Chunk {
    type Error = EnciteError;

    fn try_from(chunk: FfiChunk) -> Result<Self, Self::Error> {
        let to_index = |value: u64| {
            usize::try_from(value)
                .map_err(|_| EnciteError::InvalidInput(format!("Offset {} out of range", value)))
        };

        Ok(Chunk {
            start_char_index: to_index(chunk.start_char_index)?,
            end_char_index: to_index(chunk.end_char_index)?,
            text: chunk.text,
        })
    }
}

/// FFI-safe entity.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiEntity {
    pub entity_type: String,
    pub name: String,
    pub start_char_index: u64,
    pub end_char_index: u64,
}

impl From<Entity> for FfiEntity {
    fn from(entity: Entity) -> Self {
        Self {
            entity_type: entity.entity_type,
            name: entity.name,
            start_char_index: entity.start_char_index as u64,
            end_char_index: entity.end_char_index as u64,
        }
    }
}
