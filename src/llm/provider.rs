//! Provider trait for completion service implementations

use async_trait::async_trait;

use super::error::LlmError;

/// Interface every completion provider implementation must satisfy
///
/// The single method sends a fully rendered prompt to the provider and
/// returns the raw text completion. Implementations perform no retries and
/// no fallback handling; degradation policy lives in the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a prompt and return the provider's text completion
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
