//! Prompt construction for badge generation
//!
//! A [`BadgePrompt`] is the only thing a provider ever sees: the user's
//! description interpolated into a fixed template, paired with the fixed
//! system instruction. The instruction itself is never derived from input.

use rand::Rng;

use crate::constants::{BADGE_PROMPT_TEMPLATE, SUGGESTED_VIBES, SYSTEM_INSTRUCTION};

/// An immutable, fully constructed generation prompt.
///
/// Exists only for the duration of one outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgePrompt {
    user_prompt: String,
}

impl BadgePrompt {
    /// Build a prompt from a user description.
    ///
    /// Returns `None` for empty or whitespace-only input; such input must
    /// never reach the wire.
    pub fn new(description: &str) -> Option<Self> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        Some(Self {
            user_prompt: BADGE_PROMPT_TEMPLATE.replacen("{}", description, 1),
        })
    }

    /// The templated user-role prompt.
    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    /// The fixed system instruction sent alongside the prompt.
    pub fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }
}

/// Pick one of the fixed example descriptions, uniformly at random.
///
/// UI convenience for the "Randomize" control; replaces the draft
/// description only, never touches generation state.
pub fn suggest_random_prompt() -> &'static str {
    let index = rand::thread_rng().gen_range(0..SUGGESTED_VIBES.len());
    SUGGESTED_VIBES[index]
}
