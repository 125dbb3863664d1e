//! Static content for the Knock single-page site
//!
//! The page itself is a presentation concern; this crate is the typed source
//! of everything it displays: navigation entries, the six content sections
//! with their decorative visual kinds, and the two legal documents behind
//! the Privacy and Terms modals. All data is compiled in and serializable
//! for whatever surface renders it.

pub mod legal;
pub mod pages;
pub mod types;

pub use legal::{legal_doc, PRIVACY_POLICY, TERMS_OF_SERVICE};
pub use pages::{section, APP_NAME, DOC_VERSION, NAV_ITEMS, SECTIONS};
pub use types::{LegalDoc, LegalSection, NavItem, Section, Visual};
