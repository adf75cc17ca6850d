//! Simulated application under test plus the automation layer above it.
//!
//! The real rendering engine is an external collaborator; this module
//! carries a deterministic in-process stand-in with the same observable
//! surface: locatable elements, tap dispatch and text extraction.

pub mod device;
pub mod elements;
pub mod session;

pub use device::Device;
pub use session::{AppSession, Surface, Tab};

/// A locatable element currently visible in the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiElement {
    /// Stable element identifier
    pub id: String,
    /// Extracted text content
    pub text: String,
}

impl UiElement {
    /// Create a new element handle
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
