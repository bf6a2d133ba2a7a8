//! LanguageDimension - One value of the language content dimension
//!
//! `key` is the dimension value stored on nodes (`en_US`), `label` is what
//! editors see in the dimension switcher (`English (US)`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageDimension {
    key: String,
    label: String,
}

impl LanguageDimension {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl core::fmt::Display for LanguageDimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.key)
    }
}
