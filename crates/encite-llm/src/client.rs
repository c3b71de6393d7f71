//! Anthropic Messages API client.
//!
//! Blocking client that sends the assembled request to `/v1/messages` with
//! citations enabled on the document, and hands back the content blocks.

use std::time::Duration;

use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{AnthropicConfig, ConfigError};
use crate::extraction::{CitationModel, ModelResponse};
use crate::prompts::{Message, Role};

/// Client errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Anthropic API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode Anthropic response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("System message content must be plain text")]
    UnsupportedSystemContent,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Anthropic Claude API client
#[derive(Clone)]
pub struct AnthropicClient {
    config: AnthropicConfig,
    http: reqwest::blocking::Client,
}

impl AnthropicClient {
    /// Create a client from an explicit config.
    pub fn new(config: AnthropicConfig) -> ClientResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    /// Create from environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::new(AnthropicConfig::from_env()?)
    }

    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    /// Send the request and parse the response content.
    pub fn send(&self, messages: &[Message]) -> ClientResult<ModelResponse> {
        let body = request_body(&self.config, messages)?;
        tracing::debug!(model = %self.config.model, "Sending Anthropic messages request");

        let response = self
            .http
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(&body)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        parse_response(status, &body)
    }
}

/// Map an HTTP status and body to the response content or an API error.
fn parse_response(status: u16, body: &str) -> ClientResult<ModelResponse> {
    if !(200..300).contains(&status) {
        tracing::warn!(status, "Anthropic API request failed");
        return Err(ClientError::Api {
            status,
            body: body.to_string(),
        });
    }

    Ok(serde_json::from_str(body)?)
}

impl CitationModel for AnthropicClient {
    fn invoke(&self, messages: &[Message]) -> anyhow::Result<ModelResponse> {
        Ok(self.send(messages)?)
    }
}

/// Build the Messages API body.
///
/// The API takes system instructions as a top-level field rather than a
/// message, so system messages are joined into `system`. Only plain-text
/// system content can be hoisted.
fn request_body(config: &AnthropicConfig, messages: &[Message]) -> ClientResult<Value> {
    let system = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| m.text().ok_or(ClientError::UnsupportedSystemContent))
        .collect::<ClientResult<Vec<&str>>>()?;
    let conversation: Vec<&Message> = messages.iter().filter(|m| m.role != Role::System).collect();

    let mut body = json!({
        "model": config.model,
        "max_tokens": config.max_tokens,
        "messages": conversation,
    });
    if !system.is_empty() {
        body["system"] = Value::String(system.join("\n"));
    }

    Ok(body)
}
