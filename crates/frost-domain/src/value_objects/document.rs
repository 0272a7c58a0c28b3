//! Document value objects

use serde::{Deserialize, Serialize};

/// Value Object: Indexed Document
///
/// Documents belong to the surrounding application (projects, equipment
/// manuals, service notes). The search core only reads their identity and
/// content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Unique document identifier
    pub id: String,
    /// Human readable title
    pub title: String,
    /// Text that gets embedded
    pub content: String,
}

impl Document {
    /// Create a document
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
