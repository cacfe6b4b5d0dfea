//! Gemini-style generative backend
//!
//! Single awaited HTTP call per completion with a client-level timeout.
//! Errors surface as `LlmError`; the engine converts them into a canned
//! apology at its failure boundary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use shop_agent_config::GenerativeConfig;
use shop_agent_core::{GenerativeModel, Result};

use crate::LlmError;

/// Backend for the Google Generative Language API surface
pub struct GeminiBackend {
    client: Client,
    config: GenerativeConfig,
}

impl GeminiBackend {
    /// Create a new backend; fails only on HTTP client construction
    pub fn new(config: GenerativeConfig) -> std::result::Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let mut builder = self.client.post(self.api_url()).json(&request);
        if let Some(ref key) = self.config.api_key {
            builder = builder.query(&[("key", key.as_str())]);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{status}: {body}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        parsed
            .first_text()
            .ok_or_else(|| LlmError::InvalidResponse("no candidates in response".to_string()))
    }
}

#[async_trait]
impl GenerativeModel for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let text = self.generate(prompt).await.map_err(|e| {
            tracing::warn!(model = %self.config.model, error = %e, "generative call failed");
            shop_agent_core::Error::from(e)
        })?;

        tracing::debug!(model = %self.config.model, chars = text.len(), "generative reply");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let backend = GeminiBackend::new(GenerativeConfig::default()).unwrap();
        assert_eq!(
            backend.api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_model_name() {
        let backend = GeminiBackend::new(GenerativeConfig::default()).unwrap();
        assert_eq!(backend.model_name(), "gemini-2.0-flash");
    }

    #[test]
    fn test_response_first_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello there"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_text(), Some("Hello there".to_string()));
    }

    #[test]
    fn test_response_without_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.first_text(), None);
    }
}
