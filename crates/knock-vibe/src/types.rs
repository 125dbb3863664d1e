//! Session-facing types for badge generation

use serde::{Deserialize, Serialize};

/// Lifecycle of a generation session.
///
/// `Idle` is the only initial state; both terminal states are re-enterable
/// by a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl GenerationState {
    /// Whether a new request may be accepted in this state.
    pub fn accepts_request(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A generated, sanitized badge ready for a display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Sanitized SVG markup
    pub svg: String,
}

/// Snapshot of the session handed to the display surface.
///
/// `error_message` is always the fixed user-safe string when present;
/// diagnostic detail never leaves the logs.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub state: GenerationState,
    pub badge: Option<Badge>,
    pub error_message: Option<&'static str>,
}
