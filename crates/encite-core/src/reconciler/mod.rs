//! Response reconciler.
//!
//! Turns model content blocks back into entities with absolute offsets.
//!
//! Two index spaces meet here and must not be mixed up:
//! - *block index*: position of a content block in the model response
//! - *chunk index*: position in the chunk list sent with the request; this is
//!   what a citation's `start_block_index`/`end_block_index` refer to
//!
//! Blocks that are not text, carry no citation, or lack either tag are
//! skipped. Citation indices are only checked once a block has both tags; a
//! tagged block whose citation has no chunk range, or one pointing outside
//! the chunk list, aborts reconciliation.

mod tags;

pub use tags::*;

use thiserror::Error;

use crate::models::{Chunk, Citation, ContentBlock, Entity};

/// Reconciliation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error(
        "Citation in block {block_index} references chunk {chunk_index}, but the document has {chunk_count} chunks"
    )]
    CitationOutOfRange {
        block_index: usize,
        chunk_index: usize,
        chunk_count: usize,
    },

    #[error("Citation in block {block_index} has empty chunk range [{start}, {end})")]
    EmptyCitation {
        block_index: usize,
        start: usize,
        end: usize,
    },

    #[error("Citation in block {block_index} carries no chunk range")]
    UnresolvableCitation { block_index: usize },
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Why a block produced no entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotText,
    NoCitations,
    MissingEntityType,
    MissingName,
}

/// Reconcile all response blocks against the request's chunks.
///
/// Output order follows block order. Skipped blocks contribute nothing.
pub fn reconcile(blocks: &[ContentBlock], chunks: &[Chunk]) -> ReconcileResult<Vec<Entity>> {
    let mut entities = Vec::new();

    for (block_index, block) in blocks.iter().enumerate() {
        if let Some(entity) = reconcile_block(block_index, block, chunks)? {
            entities.push(entity);
        }
    }

    Ok(entities)
}

/// Reconcile a single block. `Ok(None)` means the block was skipped.
pub fn reconcile_block(
    block_index: usize,
    block: &ContentBlock,
    chunks: &[Chunk],
) -> ReconcileResult<Option<Entity>> {
    let (citation, mention) = match classify_block(block) {
        Ok(found) => found,
        Err(reason) => {
            tracing::debug!(block_index, ?reason, "Skipping content block");
            return Ok(None);
        }
    };

    let (start_char_index, end_char_index) =
        citation_char_span(block_index, citation, chunks).inspect_err(|e| {
            tracing::warn!("Aborting reconciliation: {}", e);
        })?;

    Ok(Some(Entity {
        entity_type: mention.entity_type,
        name: mention.name,
        start_char_index,
        end_char_index,
    }))
}

/// Pick the citation and tags a block contributes, or say why it has none.
fn classify_block(block: &ContentBlock) -> Result<(&Citation, TaggedMention), SkipReason> {
    if !block.is_text() {
        return Err(SkipReason::NotText);
    }
    // Any citations beyond the first are ignored.
    let citation = block.first_citation().ok_or(SkipReason::NoCitations)?;
    let entity_type = entity_type_tag(&block.text).ok_or(SkipReason::MissingEntityType)?;
    let name = name_tag(&block.text).ok_or(SkipReason::MissingName)?;

    Ok((
        citation,
        TaggedMention {
            entity_type: entity_type.to_string(),
            name: name.to_string(),
        },
    ))
}

/// Map a half-open chunk range to absolute char offsets.
///
/// The start comes from the first cited chunk, the end from the last cited
/// chunk, i.e. `chunks[end - 1]`.
pub fn citation_char_span(
    block_index: usize,
    citation: &Citation,
    chunks: &[Chunk],
) -> ReconcileResult<(usize, usize)> {
    let range = citation
        .chunk_range()
        .ok_or(ReconcileError::UnresolvableCitation { block_index })?;
    if range.end <= range.start {
        return Err(ReconcileError::EmptyCitation {
            block_index,
            start: range.start,
            end: range.end,
        });
    }

    let out_of_range = |chunk_index| ReconcileError::CitationOutOfRange {
        block_index,
        chunk_index,
        chunk_count: chunks.len(),
    };

    let first = chunks.get(range.start).ok_or_else(|| out_of_range(range.start))?;
    let last = chunks.get(range.end - 1).ok_or_else(|| out_of_range(range.end - 1))?;

    Ok((first.start_char_index, last.end_char_index))
}
