//! Content types consumed by the display surface
//!
//! Everything here is `'static` data: the site's copy is compiled in, and
//! the display layer receives it already resolved.

use serde::Serialize;

/// Decorative visual rendered alongside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visual {
    Portal,
    Grid,
    Typography,
    Color,
    Icon,
    None,
}

/// One entry in the sidebar / mobile navigation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    /// Anchor id of the section this entry scrolls to
    pub id: &'static str,
    pub label: &'static str,
}

/// A scrollable content section of the page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Body paragraphs, in order
    pub content: &'static [&'static str],
    /// Optional bullet list (empty when the section has none)
    pub list_items: &'static [&'static str],
    pub visual: Visual,
}

/// A titled block within a legal document.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

/// A legal document shown in a modal (Privacy Policy, Terms of Service).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegalDoc {
    pub slug: &'static str,
    pub title: &'static str,
    /// "LAST UPDATED" / "EFFECTIVE DATE" banner text
    pub dateline: &'static str,
    pub sections: &'static [LegalSection],
}
