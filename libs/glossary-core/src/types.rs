//! Core types for glossary extraction.

use serde::{Deserialize, Serialize};

/// A single flashcard entry: term on the front, definition on the back.
///
/// Serialized as one two-field CSV record, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub description: String,
}

impl Entry {
    /// Create an entry from a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
