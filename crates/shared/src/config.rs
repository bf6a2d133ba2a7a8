//! Configuration types for Quill
//!
//! Loaded from JSON or YAML, chosen by file extension. Every key is
//! optional; a missing file section falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QuillError;

/// A configured language dimension value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionConfig {
    pub key: String,
    pub label: String,
}

/// Page size and link window of the archive list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    pub items_per_page: usize,
    pub maximum_number_of_links: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            maximum_number_of_links: 99,
        }
    }
}

/// How category option values are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionValueFormat {
    #[default]
    Json,
    Plain,
}

/// Settings of the category data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySourceConfig {
    pub identifier: String,
    pub format: OptionValueFormat,
    pub identity_key: String,
    pub type_key: String,
    pub type_tag: String,
}

impl Default for CategorySourceConfig {
    fn default() -> Self {
        Self {
            identifier: "post-categories".to_string(),
            format: OptionValueFormat::Json,
            identity_key: "__identity".to_string(),
            type_key: "__type".to_string(),
            type_tag: "Quill\\Blog\\Domain\\Model\\Category".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuillConfig {
    /// Name of the current user
    pub actor: String,
    /// Key of the dimension used when none is requested
    pub default_dimension: String,
    pub dimensions: Vec<DimensionConfig>,
    pub pagination: PaginationConfig,
    pub category_source: CategorySourceConfig,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            actor: "admin".to_string(),
            default_dimension: "en_US".to_string(),
            dimensions: vec![DimensionConfig {
                key: "en_US".to_string(),
                label: "English (US)".to_string(),
            }],
            pagination: PaginationConfig::default(),
            category_source: CategorySourceConfig::default(),
        }
    }
}

impl QuillConfig {
    /// Load configuration from a JSON or YAML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// The default dimension must be one of the configured dimensions
    pub fn validate(&self) -> crate::Result<()> {
        if self.actor.trim().is_empty() {
            return Err(QuillError::Config("actor must not be empty".to_string()));
        }
        if self.category_source.identifier.trim().is_empty() {
            return Err(QuillError::Config(
                "categorySource.identifier must not be empty".to_string(),
            ));
        }
        if !self.dimensions.iter().any(|d| d.key == self.default_dimension) {
            return Err(QuillError::Config(format!(
                "default dimension '{}' is not among the configured dimensions",
                self.default_dimension
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "actor": "alice",
            "defaultDimension": "de",
            "dimensions": [
                {"key": "en_US", "label": "English (US)"},
                {"key": "de", "label": "German"}
            ],
            "pagination": {"itemsPerPage": 5}
        }"#;

        let config: QuillConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.actor, "alice");
        assert_eq!(config.pagination.items_per_page, 5);
        assert_eq!(config.pagination.maximum_number_of_links, 99);
        assert_eq!(config.category_source.identifier, "post-categories");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "actor: bob\ncategorySource:\n  format: plain\n"
        )
        .unwrap();

        let config = QuillConfig::from_file(file.path()).unwrap();
        assert_eq!(config.actor, "bob");
        assert_eq!(config.category_source.format, OptionValueFormat::Plain);
        assert_eq!(config.default_dimension, "en_US");
    }

    #[test]
    fn test_unknown_default_dimension_rejected() {
        let config = QuillConfig {
            default_dimension: "fr".to_string(),
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(QuillError::Config(_))));
    }

    #[test]
    fn test_empty_source_identifier_rejected() {
        let mut config = QuillConfig::default();
        config.category_source.identifier = " ".to_string();

        assert!(matches!(config.validate(), Err(QuillError::Config(_))));
    }
}
