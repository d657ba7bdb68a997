//! Text-generation provider abstraction.
//!
//! The handler talks to a [`RecommendationProvider`] trait object so the
//! hosted model can be swapped (or mocked in tests) without touching the
//! request lifecycle. Providers return [`ProviderError`]; classification
//! into response status codes happens in `error.rs`.

use crate::models::Recommendation;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Failures surfaced by a generation provider
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the provider, with the raw body text.
    /// The status is the structured classification signal; the message is
    /// kept for the substring fallback and server-side logging.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation credential is not configured")]
    MissingCredential,

    /// The provider answered 200 but the body did not contain a response
    /// conforming to the recommendation schema
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A hosted text-generation model that turns a prompt into a structured
/// recommendation. One outbound call per request; no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Recommendation, ProviderError>;
}
