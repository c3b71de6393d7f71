//! Scripted model for testing without network access.

use std::cell::RefCell;

use anyhow::anyhow;
use encite_core::models::ContentBlock;

use crate::extraction::{CitationModel, ModelResponse};
use crate::prompts::Message;

/// Mock model that replays a fixed response and records every request.
pub struct MockModel {
    outcome: Result<ModelResponse, String>,
    requests: RefCell<Vec<Vec<Message>>>,
}

impl MockModel {
    /// Respond with the given content blocks.
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self {
            outcome: Ok(ModelResponse { content }),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fail every invocation with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Number of times the model was invoked.
    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Messages of the most recent invocation.
    pub fn last_request(&self) -> Option<Vec<Message>> {
        self.requests.borrow().last().cloned()
    }
}

impl CitationModel for MockModel {
    fn invoke(&self, messages: &[Message]) -> anyhow::Result<ModelResponse> {
        self.requests.borrow_mut().push(messages.to_vec());
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(anyhow!("{}", message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_requests() {
        let model = MockModel::new(vec![ContentBlock::uncited("hi")]);
        assert_eq!(model.call_count(), 0);
        assert!(model.last_request().is_none());

        let response = model.invoke(&[Message::system("a")]).unwrap();
        assert_eq!(response.content.len(), 1);
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.last_request().unwrap(), vec![Message::system("a")]);
    }

    #[test]
    fn test_mock_failing() {
        let model = MockModel::failing("boom");
        let err = model.invoke(&[]).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(model.call_count(), 1);
    }
}
