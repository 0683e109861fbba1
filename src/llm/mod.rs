//! LLM Abstraction Layer
//!
//! This module wraps a completion provider behind a small trait, renders a
//! fixed prompt template around the user's question, and degrades to a fixed
//! fallback string when the provider fails.

pub mod assistant;
pub mod error;
pub mod openai;
pub mod prompt;
pub mod provider;

// Re-export commonly used types
pub use assistant::{Assistant, FALLBACK_RESPONSE};
pub use error::LlmError;
pub use openai::OpenAiClient;
pub use prompt::PromptTemplate;
pub use provider::CompletionProvider;
