//! Fixed strings and defaults for badge generation
//!
//! The system instruction and prompt template are deliberately constants:
//! user input is only ever interpolated into the template, never into the
//! instruction sent to the model.

/// System-level instruction sent with every generation request.
///
/// Constrains the model to raw monochrome SVG in a square coordinate space.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert SVG Graphics Designer and Frontend Engineer specializing in \
Minimalist, Apple-style, and Geometric logo design.

Your task is to generate raw SVG code for a logo concept based on the user's description.

Constraints:
1. Output ONLY the raw <svg>...</svg> code. Do not wrap it in markdown blocks (like ```xml). Do not add explanations.
2. The SVG must be strictly Black and White (or currentColor).
3. The design must be minimal, abstract, and follow the \"Knock\" brand guidelines: broken circles, portals, soft rounded edges.
4. ViewBox should be \"0 0 100 100\".
5. Use minimalist strokes and geometric shapes.";

/// Template wrapped around the user's description when building the prompt.
/// `{}` is replaced with the raw (trimmed) description.
pub const BADGE_PROMPT_TEMPLATE: &str = "A minimal abstract geometric badge \
representing the vibe: \"{}\". Minimalist, black and white, simple strokes.";

/// Example vibe descriptions offered by the "Randomize" control.
pub const SUGGESTED_VIBES: &[&str] = &[
    "Rainy day reading a book with coffee",
    "Late night coding session focus",
    "Sunny park picnic with acoustic guitar",
    "Urban photography walk downtown",
    "Quiet museum wandering",
    "High energy rooftop party",
];

/// The only failure text ever shown to a user. Error detail stays in logs.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate vibe. Please try again.";

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    /// Generative model used for badge synthesis.
    pub const MODEL: &str = "gemini-2.5-flash";

    /// Base URL of the Gemini API.
    pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Sampling temperature: some creativity, but structurally sound.
    pub const TEMPERATURE: f32 = 0.7;

    /// Upper bound on a single generation request. The upstream API has no
    /// bound of its own, so `Pending` would otherwise be unbounded.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}
