use crate::completion::{CompletionRequest, CompletionService, TransportError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContent,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl From<GeminiResponse> for String {
    // A blocked or empty answer has no candidates; that is empty text, not a
    // transport failure.
    fn from(value: GeminiResponse) -> Self {
        value
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct Gemini {
    client: Client,
    api_key: String,
    api_base: String,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.api_base)
    }
}

#[async_trait::async_trait]
impl CompletionService for Gemini {
    #[tracing::instrument(skip_all, fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, TransportError> {
        let res = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [
                    {"role": "user", "parts": [{"text": request.prompt}]}
                ],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": request.schema
                }
            }))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "completion request rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        res.json::<GeminiResponse>()
            .await
            .map(Into::into)
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
