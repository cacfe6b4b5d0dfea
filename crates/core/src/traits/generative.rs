//! Generative fallback trait

use async_trait::async_trait;

use crate::Result;

/// Last-resort free-text responder
///
/// Invoked only when no deterministic rule matched. The engine primes the
/// prompt with the rendered conversation window, truncates long replies, and
/// converts any error into a static apology — a failing implementation can
/// never surface an error to the user.
///
/// # Example
///
/// ```ignore
/// let model: Arc<dyn GenerativeModel> = Arc::new(GeminiBackend::new(config)?);
/// let reply = model.complete("User: tell me a joke").await?;
/// ```
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a completion for the prompt
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}
