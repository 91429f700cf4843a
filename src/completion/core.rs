use serde_json::Value;

/// A single text-completion call: which model, what to ask, and the shape
/// the answer should take.
#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub schema: Value,
}

/// Failure of the remote call itself. The display text is what the
/// explorer classifies into user-facing messages, so it carries the HTTP
/// status and the provider's error body verbatim.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("[{status}] {body}")]
    Status { status: u16, body: String },
    #[error("fetch failed: {0}")]
    Network(String),
    #[error("could not decode completion response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    // The URL is dropped: its host or port could match a classification rule.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    /// Returns the raw generated text, which may be empty.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, TransportError>;
}
