use crate::completion::{CompletionRequest, CompletionService, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays scripted answers in order and records every prompt it was sent.
/// Once the script is exhausted it answers with empty text.
#[derive(Debug, Default)]
pub struct MockCompletion {
    responses: Mutex<VecDeque<Result<String, TransportError>>>,
    prompts: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn with_failure(self, err: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, TransportError> {
        self.prompts.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: "test-model".to_string(),
            prompt: prompt.to_string(),
            schema: json!({}),
        }
    }

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mock = MockCompletion::new()
            .with_response("first")
            .with_failure(TransportError::Network("offline".to_string()));

        assert_eq!(mock.complete(&request("a")).await.unwrap(), "first");
        assert!(mock.complete(&request("b")).await.is_err());
        assert_eq!(mock.complete(&request("c")).await.unwrap(), "");

        let prompts: Vec<String> = mock.requests().into_iter().map(|r| r.prompt).collect();
        assert_eq!(prompts, vec!["a", "b", "c"]);
    }
}
