//! Generative fallback integration
//!
//! The last-resort responder behind the `GenerativeModel` trait:
//! - Prompt building (store persona + conversation window + user message)
//! - Gemini-style HTTP backend with a fixed request timeout
//!
//! No retries here: a second attempt would change conversational latency
//! unpredictably. Resilience, if wanted, belongs to the backend operator.

pub mod backend;
pub mod prompt;

pub use backend::GeminiBackend;
pub use prompt::FallbackPrompt;

use thiserror::Error;

/// Generative backend errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("api error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Network("request timed out".to_string())
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for shop_agent_core::Error {
    fn from(err: LlmError) -> Self {
        shop_agent_core::Error::Generative(err.to_string())
    }
}
