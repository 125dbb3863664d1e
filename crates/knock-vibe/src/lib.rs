//! Vibe badge generation for the Knock site
//!
//! This library owns the one interactive piece of the site: turning a
//! user-typed vibe description into a monochrome geometric badge via a
//! generative text-to-SVG endpoint.
//!
//! - **Prompting**: the description is interpolated into a fixed template
//!   and sent with a fixed system instruction ([`prompt`]).
//! - **Provider**: one-shot request to the Gemini API behind the
//!   [`BadgeProvider`] seam, so tests run without credentials or network
//!   ([`provider`]).
//! - **Sanitization**: fence-marker cleanup plus an allow-list SVG filter
//!   before anything reaches a display surface ([`sanitize`]).
//! - **Workflow**: the `Idle -> Pending -> Succeeded | Failed` session state
//!   machine with an in-workflow single-flight guard and request deadline
//!   ([`workflow`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use knock_vibe::{GeneratorConfig, VibeWorkflow};
//!
//! let workflow = VibeWorkflow::gemini(GeneratorConfig::with_api_key(key))?;
//!
//! match workflow.request_badge("Rainy day reading a book with coffee").await {
//!     Ok(badge) => render(&badge.svg),
//!     Err(err) => show_error(err.user_message()),
//! }
//! ```

pub mod config;
pub mod constants;
pub mod prompt;
pub mod provider;
pub mod sanitize;
pub mod types;
pub mod workflow;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use prompt::{suggest_random_prompt, BadgePrompt};
pub use provider::{BadgeProvider, GeminiProvider, ProviderError};
pub use sanitize::{sanitize_svg, strip_fences, SanitizeError};
pub use types::{Badge, GenerationOutcome, GenerationState};
pub use workflow::{SharedWorkflow, VibeWorkflow, WorkflowError};
