//! Prompt template with a substitution slot for the user's question

/// Placeholder substituted with the user's question
const QUESTION_SLOT: &str = "{question}";

/// Instructional skeleton wrapped around every question
const DEFAULT_TEMPLATE: &str = "\
You are a helpful AI assistant that helps users with their questions about products and suppliers.

User Question: {question}

Please provide a helpful response:
";

/// Fixed text skeleton with a `{question}` substitution slot
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template from custom text containing a `{question}` slot
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute the question into the template
    pub fn render(&self, question: &str) -> String {
        self.template.replace(QUESTION_SLOT, question)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
