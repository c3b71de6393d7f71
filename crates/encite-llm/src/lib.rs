//! LLM wrapper for citation-grounded NER.
//!
//! This crate assembles the chunked-document request, invokes a
//! [`CitationModel`], and reconciles the cited response blocks back into
//! entities. The Anthropic Messages API client is available behind the
//! `anthropic` feature.

pub mod config;
pub mod extraction;
pub mod mock;
pub mod prompts;

#[cfg(feature = "anthropic")]
pub mod client;

pub use config::*;
pub use extraction::*;
pub use mock::MockModel;
pub use prompts::*;

#[cfg(feature = "anthropic")]
pub use client::{AnthropicClient, ClientError, ClientResult};

pub use encite_core::models::{Chunk, Citation, ContentBlock, Entity};
