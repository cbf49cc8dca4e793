//! Field handles and the value store they are read from.

use std::collections::{BTreeMap, HashMap};

/// Handle to one form input.
///
/// The label is injected when the handle is built instead of being looked
/// up from the page layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    id: String,
    label: String,
}

impl Field {
    /// Creates a field handle. The label is stored trimmed.
    pub fn new(id: impl Into<String>, label: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            label: label.as_ref().trim().to_string(),
        }
    }

    /// Returns the field identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Store holding the current, untrimmed value of every field.
///
/// Values are read on every validation pass and never cached.
pub trait FieldSource {
    /// Returns the raw value of `field`; a missing field reads as empty.
    fn raw_value(&self, field: &Field) -> String;
}

impl FieldSource for HashMap<String, String> {
    fn raw_value(&self, field: &Field) -> String {
        self.get(field.id()).cloned().unwrap_or_default()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn raw_value(&self, field: &Field) -> String {
        self.get(field.id()).cloned().unwrap_or_default()
    }
}
