//! OpenAI-compatible completions provider.

use super::{CompletionError, CompletionProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every generation request.
const TEMPERATURE: f32 = 0.5;

/// Upper bound on generated tokens; keeps recipes to a readable length.
const MAX_TOKENS: u32 = 600;

/// Provider backed by the legacy `/completions` endpoint.
#[derive(Debug)]
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a new provider with the given credential, model, and base URL.
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

/// Completions API request format.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

/// Completions API response format.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            // Try to parse error response
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(CompletionError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(CompletionError::ApiError {
                status,
                message: body,
            });
        }

        let response: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::ParseError(e.to_string()))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or_else(|| CompletionError::ParseError("No choices in response".to_string()))?;

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
