//! An OpenAI-backed implementation of the grammar correction contract.
//!
//! This crate provides an `OpenAIGrammarCorrector` that sends a fixed
//! two-message prompt to the chat completions endpoint and extracts the
//! corrected text from the first returned choice.

mod completion;
mod models;
mod prompt;
pub use models::{CompletionChoice, CompletionRequest, CompletionResponse, Message, Usage};

use async_trait::async_trait;
use grammar_correction::{CorrectionError, GrammarCorrector, Language};

/// OpenAI default api url, overridable to point tests at a local stub.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_API_MODEL: &str = "gpt-4";
pub const OPENAI_API_ROLE: &str = "user";

pub struct OpenAIGrammarCorrector {
    api_url: String,
    client: reqwest::Client,
}

impl OpenAIGrammarCorrector {
    pub fn new() -> Self {
        Self::with_api_url(OPENAI_API_URL.to_string())
    }

    pub fn with_api_url(api_url: String) -> Self {
        OpenAIGrammarCorrector {
            api_url,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for OpenAIGrammarCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GrammarCorrector for OpenAIGrammarCorrector {
    async fn correct(
        &self,
        api_key: &str,
        language: Language,
        text: &str,
    ) -> Result<String, CorrectionError> {
        completion::run_completion(&self.client, &self.api_url, api_key, language, text).await
    }
}
