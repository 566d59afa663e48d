//! An interface for grammar correction backends
//!
//! This crate provides a `GrammarCorrector` trait that defines the contract
//! between the HTTP transport and whichever completion backend answers a
//! request, plus a deterministic mock implementation for offline use.

use async_trait::async_trait;
use thiserror::Error;

mod mock;
pub use mock::MockGrammarCorrector;

/// Languages the service can build a correction prompt for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

#[derive(Debug, Error)]
pub enum CorrectionError {
    /// The request named a language with no correction prompt.
    #[error("language not supported: {tag}")]
    UnsupportedLanguage { tag: String },
    /// The completion api could not be reached or its body not read.
    #[error("completion request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The completion api answered with something other than its json shape.
    #[error("malformed completion response: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The completion api answered with a non-200 status.
    #[error("completion api returned http status {status}: {body}")]
    Remote { status: u16, body: String },
}

/// Contract between the HTTP transport and a completion backend.
///
/// Implemented by the OpenAI-backed client and by `MockGrammarCorrector`,
/// selected once at startup and injected into the handlers.
#[async_trait]
pub trait GrammarCorrector: Send + Sync {
    async fn correct(
        &self,
        api_key: &str,
        language: Language,
        text: &str,
    ) -> Result<String, CorrectionError>;
}
