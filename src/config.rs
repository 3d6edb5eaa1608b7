//! Application configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unknown LLM provider: {0}")]
    UnknownProvider(String),
}

/// Which completion provider to run, with its credentials.
#[derive(Debug, Clone)]
pub enum LlmConfig {
    OpenAi {
        api_key: String,
        model: String,
        base_url: String,
    },
    /// Deterministic canned responses, no network. Useful without a credential.
    Fake,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database path (or `:memory:`).
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`: SQLite database path
    /// - `OPENAI_API_KEY`: API key, when the provider is "openai"
    ///
    /// Optional:
    /// - `SAUCIER_LLM_PROVIDER`: "openai" | "fake" (default: "openai")
    /// - `SAUCIER_LLM_MODEL`: Model name (default: "gpt-3.5-turbo-instruct")
    /// - `SAUCIER_LLM_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    /// - `SAUCIER_BIND_ADDR`: Listen address (default: "0.0.0.0:3000")
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            env::var("SAUCIER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let provider =
            env::var("SAUCIER_LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string());

        let llm = match provider.as_str() {
            "openai" => {
                let api_key = env::var("OPENAI_API_KEY")
                    .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
                let model =
                    env::var("SAUCIER_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
                let base_url = env::var("SAUCIER_LLM_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
                LlmConfig::OpenAi {
                    api_key,
                    model,
                    base_url,
                }
            }
            "fake" => LlmConfig::Fake,
            other => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        Ok(Self {
            database_url,
            bind_addr,
            llm,
        })
    }
}
