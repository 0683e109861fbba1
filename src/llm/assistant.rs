//! Assistant wrapper: prompt rendering plus a fixed degradation path

use super::prompt::PromptTemplate;
use super::provider::CompletionProvider;

/// Returned whenever the provider call fails, regardless of cause
pub const FALLBACK_RESPONSE: &str = "I apologize, but I'm having trouble processing your request right now. Please try again later.";

/// Wraps a completion provider and a prompt template
pub struct Assistant {
    provider: Box<dyn CompletionProvider>,
    prompt: PromptTemplate,
}

impl Assistant {
    /// Create an assistant with the default prompt template
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            prompt: PromptTemplate::default(),
        }
    }

    /// Replace the prompt template (builder pattern)
    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    /// Get a response for the user's question
    ///
    /// Renders the question into the prompt template, calls the provider and
    /// trims the result. Any provider error is printed and swallowed; the
    /// fixed apology string is returned instead. Callers never see a failure.
    pub async fn respond(&self, question: &str) -> String {
        let prompt = self.prompt.render(question);

        match self.provider.complete(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                eprintln!("Error getting LLM response: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}
