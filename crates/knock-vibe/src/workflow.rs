//! Vibe workflow - single entry point for badge generation
//!
//! Owns the per-session state machine and forwards requests to the
//! configured provider. Callers (the display surface) interact only with
//! this type: it enforces the single-flight rule itself rather than relying
//! on UI gating, bounds every request with a deadline, and absorbs all
//! failures into `Failed` plus a fixed user-safe message.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::config::GeneratorConfig;
use crate::constants::GENERATION_FAILED_MESSAGE;
use crate::prompt::BadgePrompt;
use crate::provider::{BadgeProvider, GeminiProvider, ProviderError};
use crate::sanitize::{self, SanitizeError};
use crate::types::{Badge, GenerationOutcome, GenerationState};

/// Error types for workflow operations
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// Empty or whitespace-only description; no state change, no request.
    #[error("description is empty")]
    EmptyDescription,

    /// A request is already outstanding for this session.
    #[error("a generation request is already in flight")]
    RequestInFlight,

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("sanitize error: {0}")]
    Sanitize(#[from] SanitizeError),
}

impl WorkflowError {
    /// The only failure text a user ever sees. Detail stays in logs.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

struct Session {
    state: GenerationState,
    badge: Option<Badge>,
    error_message: Option<&'static str>,
}

impl Session {
    fn new() -> Self {
        Self {
            state: GenerationState::Idle,
            badge: None,
            error_message: None,
        }
    }
}

/// Badge generation workflow for one UI session.
pub struct VibeWorkflow {
    provider: Arc<dyn BadgeProvider>,
    request_timeout: Duration,
    session: RwLock<Session>,
}

impl VibeWorkflow {
    /// Create a workflow over an arbitrary provider.
    pub fn new(provider: Arc<dyn BadgeProvider>, request_timeout: Duration) -> Self {
        Self {
            provider,
            request_timeout,
            session: RwLock::new(Session::new()),
        }
    }

    /// Create a workflow backed by the Gemini provider.
    pub fn gemini(config: GeneratorConfig) -> Result<Self, ProviderError> {
        let request_timeout = config.request_timeout;
        let provider = Arc::new(GeminiProvider::new(config)?);
        Ok(Self::new(provider, request_timeout))
    }

    /// Generate a badge for `description`.
    ///
    /// Enters `Pending` synchronously before the provider is awaited. While
    /// `Pending`, further calls are rejected with
    /// [`WorkflowError::RequestInFlight`]; at most one request is ever
    /// outstanding per session, so the stored result always corresponds to
    /// the most recently accepted call. Re-entrant from `Succeeded` and
    /// `Failed`, discarding the previous badge or error.
    pub async fn request_badge(&self, description: &str) -> Result<Badge, WorkflowError> {
        let prompt = BadgePrompt::new(description).ok_or(WorkflowError::EmptyDescription)?;

        {
            let mut session = self.session.write().await;
            if !session.state.accepts_request() {
                return Err(WorkflowError::RequestInFlight);
            }
            session.state = GenerationState::Pending;
            session.badge = None;
            session.error_message = None;
        }

        let outcome = self.run(&prompt).await;

        let mut session = self.session.write().await;
        match outcome {
            Ok(badge) => {
                log::debug!(
                    "badge generated via {} ({} bytes)",
                    self.provider.name(),
                    badge.svg.len()
                );
                session.state = GenerationState::Succeeded;
                session.badge = Some(badge.clone());
                Ok(badge)
            }
            Err(err) => {
                // Diagnostics only; the caller surfaces user_message().
                log::error!("badge generation via {} failed: {}", self.provider.name(), err);
                session.state = GenerationState::Failed;
                session.error_message = Some(GENERATION_FAILED_MESSAGE);
                Err(err)
            }
        }
    }

    async fn run(&self, prompt: &BadgePrompt) -> Result<Badge, WorkflowError> {
        let raw = tokio::time::timeout(self.request_timeout, self.provider.generate(prompt))
            .await
            .map_err(|_| WorkflowError::Timeout(self.request_timeout))??;

        let stripped = sanitize::strip_fences(&raw);
        let svg = sanitize::sanitize_svg(&stripped)?;
        Ok(Badge { svg })
    }

    /// Current state of the session.
    pub async fn state(&self) -> GenerationState {
        self.session.read().await.state
    }

    /// Snapshot for the display surface.
    pub async fn snapshot(&self) -> GenerationOutcome {
        let session = self.session.read().await;
        GenerationOutcome {
            state: session.state,
            badge: session.badge.clone(),
            error_message: session.error_message,
        }
    }

    /// Return the session to `Idle`, discarding any result or error.
    ///
    /// Also the escape hatch for a session stuck `Pending` after its
    /// request future was dropped mid-flight.
    pub async fn reset(&self) {
        let mut session = self.session.write().await;
        *session = Session::new();
    }
}

/// Shared workflow type for application state
pub type SharedWorkflow = Arc<VibeWorkflow>;

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;

    const CLEAN_SVG: &str =
        r#"<svg viewBox="0 0 100 100"><circle cx="50" cy="50" r="40" stroke="black"/></svg>"#;

    struct StaticProvider {
        response: String,
    }

    #[async_trait]
    impl BadgeProvider for StaticProvider {
        fn name(&self) -> &'static str {
            "static"
        }
        async fn generate(&self, _prompt: &BadgePrompt) -> Result<String, ProviderError> {
            Ok(self.response.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl BadgeProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }
        async fn generate(&self, _prompt: &BadgePrompt) -> Result<String, ProviderError> {
            Err(ProviderError::Api {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    /// Signals `entered` when the request reaches the provider, then parks
    /// until `release` fires.
    struct GatedProvider {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl BadgeProvider for GatedProvider {
        fn name(&self) -> &'static str {
            "gated"
        }
        async fn generate(&self, _prompt: &BadgePrompt) -> Result<String, ProviderError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(CLEAN_SVG.to_string())
        }
    }

    struct StallingProvider;

    #[async_trait]
    impl BadgeProvider for StallingProvider {
        fn name(&self) -> &'static str {
            "stalling"
        }
        async fn generate(&self, _prompt: &BadgePrompt) -> Result<String, ProviderError> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    /// Fails on the first call, succeeds afterwards.
    struct FlakyProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BadgeProvider for FlakyProvider {
        fn name(&self) -> &'static str {
            "flaky"
        }
        async fn generate(&self, _prompt: &BadgePrompt) -> Result<String, ProviderError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ProviderError::EmptyResponse)
            } else {
                Ok(CLEAN_SVG.to_string())
            }
        }
    }

    /// Surface workflow diagnostics when tests run with RUST_LOG set.
    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn workflow(provider: impl BadgeProvider + 'static) -> VibeWorkflow {
        init_logging();
        VibeWorkflow::new(Arc::new(provider), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_success_transitions_and_sanitizes() {
        let wf = workflow(StaticProvider {
            response: format!("```xml\n{CLEAN_SVG}\n```"),
        });
        assert_eq!(wf.state().await, GenerationState::Idle);

        let badge = wf.request_badge("cozy cafe").await.unwrap();
        assert!(badge.svg.starts_with("<svg "));
        assert!(!badge.svg.contains("```"));

        let snapshot = wf.snapshot().await;
        assert_eq!(snapshot.state, GenerationState::Succeeded);
        assert_eq!(snapshot.badge.unwrap(), badge);
        assert!(snapshot.error_message.is_none());
    }

    #[tokio::test]
    async fn test_empty_description_is_rejected_without_state_change() {
        let wf = workflow(StaticProvider {
            response: CLEAN_SVG.to_string(),
        });
        let err = wf.request_badge("   \n ").await.unwrap_err();
        assert!(matches!(err, WorkflowError::EmptyDescription));
        assert_eq!(wf.state().await, GenerationState::Idle);
    }

    #[tokio::test]
    async fn test_failure_surfaces_generic_message_only() {
        let wf = workflow(FailingProvider);
        let err = wf.request_badge("rooftop party").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to generate vibe. Please try again.");

        let snapshot = wf.snapshot().await;
        assert_eq!(snapshot.state, GenerationState::Failed);
        assert!(snapshot.badge.is_none());
        assert_eq!(
            snapshot.error_message,
            Some("Failed to generate vibe. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_non_svg_response_fails() {
        let wf = workflow(StaticProvider {
            response: "I'm sorry, I can't draw that.".to_string(),
        });
        let err = wf.request_badge("anything").await.unwrap_err();
        assert!(matches!(err, WorkflowError::Sanitize(SanitizeError::NotSvg)));
        assert_eq!(wf.state().await, GenerationState::Failed);
    }

    #[tokio::test]
    async fn test_pending_is_entered_before_provider_resolves_and_single_flight_holds() {
        init_logging();
        let provider = Arc::new(GatedProvider {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let wf = Arc::new(VibeWorkflow::new(provider.clone(), Duration::from_secs(5)));

        let task = {
            let wf = wf.clone();
            tokio::spawn(async move { wf.request_badge("first vibe").await })
        };

        // Once the provider has been entered, Pending must already be set.
        provider.entered.notified().await;
        assert_eq!(wf.state().await, GenerationState::Pending);

        // A second request while Pending is rejected and leaves the
        // in-flight request undisturbed.
        let err = wf.request_badge("second vibe").await.unwrap_err();
        assert!(matches!(err, WorkflowError::RequestInFlight));
        assert_eq!(wf.state().await, GenerationState::Pending);

        provider.release.notify_one();
        let badge = task.await.unwrap().unwrap();
        assert_eq!(wf.state().await, GenerationState::Succeeded);
        assert_eq!(wf.snapshot().await.badge.unwrap(), badge);
    }

    #[tokio::test]
    async fn test_timeout_yields_failed() {
        init_logging();
        let wf = VibeWorkflow::new(Arc::new(StallingProvider), Duration::from_millis(20));
        let err = wf.request_badge("slow vibe").await.unwrap_err();
        assert!(matches!(err, WorkflowError::Timeout(_)));
        assert_eq!(wf.state().await, GenerationState::Failed);
        assert_eq!(err.user_message(), "Failed to generate vibe. Please try again.");
    }

    #[tokio::test]
    async fn test_reentry_from_failed_discards_previous_error() {
        let wf = workflow(FlakyProvider {
            calls: AtomicUsize::new(0),
        });

        assert!(wf.request_badge("take one").await.is_err());
        assert_eq!(wf.state().await, GenerationState::Failed);

        let badge = wf.request_badge("take two").await.unwrap();
        let snapshot = wf.snapshot().await;
        assert_eq!(snapshot.state, GenerationState::Succeeded);
        assert!(snapshot.error_message.is_none());
        assert_eq!(snapshot.badge.unwrap(), badge);
    }

    #[tokio::test]
    async fn test_reentry_from_succeeded_discards_previous_badge() {
        let wf = workflow(FlakyProvider {
            calls: AtomicUsize::new(1),
        });

        let first = wf.request_badge("first").await.unwrap();
        let second = wf.request_badge("second").await.unwrap();
        assert_eq!(wf.state().await, GenerationState::Succeeded);
        // Same mock payload, but the stored badge is the later call's.
        assert_eq!(first, second);
        assert_eq!(wf.snapshot().await.badge.unwrap(), second);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let wf = workflow(FailingProvider);
        let _ = wf.request_badge("vibe").await;
        assert_eq!(wf.state().await, GenerationState::Failed);

        wf.reset().await;
        let snapshot = wf.snapshot().await;
        assert_eq!(snapshot.state, GenerationState::Idle);
        assert!(snapshot.badge.is_none());
        assert!(snapshot.error_message.is_none());
    }
}
