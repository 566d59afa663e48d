use async_trait::async_trait;

use crate::{CorrectionError, GrammarCorrector, Language};

/// Deterministic stand-in for the completion backend.
///
/// Ignores the api key and never touches the network; the marker prefix makes
/// it obvious in a response that no real correction happened.
pub struct MockGrammarCorrector;

#[async_trait]
impl GrammarCorrector for MockGrammarCorrector {
    async fn correct(
        &self,
        _api_key: &str,
        language: Language,
        text: &str,
    ) -> Result<String, CorrectionError> {
        match language {
            Language::De => Ok(format!("korrigiert: {}", text)),
            Language::En => Ok(format!("corrected: {}", text)),
        }
    }
}
