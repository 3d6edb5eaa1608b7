//! Fake completion provider for testing.
//!
//! Returns deterministic responses matched by prompt substring, so tests
//! and credential-less runs never touch the network.

use super::{CompletionError, CompletionProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake completion provider.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, the default response is returned, or an
/// error when none is set.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some(
                "Ingredients:\n- A pinch of salt\n\nInstructions:\n1. Combine everything.\n"
                    .to_string(),
            ),
        }
    }
}

#[allow(dead_code)]
impl FakeProvider {
    /// Create a FakeProvider with no registered responses. Every call fails
    /// until a response or default is added.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that answers prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Register a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the response used when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let responses = self.responses.read().unwrap();

        // First matching pattern wins (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        let matched = responses.iter().find_map(|(pattern, response)| {
            prompt_lower
                .contains(&pattern.to_lowercase())
                .then(|| response.clone())
        });

        match matched.or_else(|| self.default_response.clone()) {
            Some(response) => Ok(response),
            None => {
                let preview: String = prompt.chars().take(100).collect();
                Err(CompletionError::RequestFailed(format!(
                    "FakeProvider: no response configured for prompt: {preview}"
                )))
            }
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
