//! Pluggable generation provider abstraction
//!
//! The workflow only ever talks to a [`BadgeProvider`]. The production
//! implementation calls the Gemini API; tests substitute mocks to exercise
//! the state machine without a network.

pub mod gemini;

use async_trait::async_trait;

use crate::prompt::BadgePrompt;

pub use gemini::GeminiProvider;

/// Error types for provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Credential absent; raised before any network call is made.
    #[error("API Key is missing")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A one-shot text-to-markup generation endpoint.
///
/// Implementations issue exactly one outbound request per call and never
/// retry; retrying is an explicit caller action. Output is raw text that the
/// workflow still has to sanitize before display.
#[async_trait]
pub trait BadgeProvider: Send + Sync {
    /// Human-readable name for diagnostics
    fn name(&self) -> &'static str;

    /// Generate markup for the given prompt.
    async fn generate(&self, prompt: &BadgePrompt) -> Result<String, ProviderError>;
}
