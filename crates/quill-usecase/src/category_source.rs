//! Category Option Source - Categories for the editor's select box
//!
//! The select box stores the chosen option's `value` on the post node, so
//! the value must be encoded exactly the way the property converter of the
//! editing backend decodes entity references. The encoding is configurable
//! for that reason.

use quill_domain::{Category, CategoryId, CategoryRepository};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ArchiveError, Result};

/// Name the editor uses to request this data source
pub const CATEGORY_SOURCE_IDENTIFIER: &str = "post-categories";

/// Type tag written next to the identity by default
pub const DEFAULT_CATEGORY_TYPE: &str = "Quill\\Blog\\Domain\\Model\\Category";

/// One entry of the select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub label: String,
    pub value: String,
}

/// How a category reference is written into an option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityEncoding {
    /// `{"<identity_key>": "<id>", "<type_key>": "<type_tag>"}`
    Json {
        identity_key: String,
        type_key: String,
        type_tag: String,
    },
    /// The bare identifier
    Plain,
}

impl Default for IdentityEncoding {
    fn default() -> Self {
        IdentityEncoding::Json {
            identity_key: "__identity".to_string(),
            type_key: "__type".to_string(),
            type_tag: DEFAULT_CATEGORY_TYPE.to_string(),
        }
    }
}

impl IdentityEncoding {
    pub fn encode(&self, id: &CategoryId) -> String {
        match self {
            IdentityEncoding::Json {
                identity_key,
                type_key,
                type_tag,
            } => {
                let mut reference = Map::new();
                reference.insert(identity_key.clone(), Value::String(id.as_str().to_string()));
                reference.insert(type_key.clone(), Value::String(type_tag.clone()));
                Value::Object(reference).to_string()
            }
            IdentityEncoding::Plain => id.as_str().to_string(),
        }
    }

    pub fn decode(&self, value: &str) -> Result<CategoryId> {
        let invalid = |reason: &str| ArchiveError::InvalidOptionValue {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            IdentityEncoding::Json {
                identity_key,
                type_key,
                type_tag,
            } => {
                let reference: Value =
                    serde_json::from_str(value).map_err(|e| invalid(&e.to_string()))?;

                if reference.get(type_key).and_then(Value::as_str) != Some(type_tag.as_str()) {
                    return Err(invalid("type tag does not match"));
                }

                reference
                    .get(identity_key)
                    .and_then(Value::as_str)
                    .filter(|id| !id.is_empty())
                    .map(CategoryId::new)
                    .ok_or_else(|| invalid("identity missing"))
            }
            IdentityEncoding::Plain if value.is_empty() => Err(invalid("identity missing")),
            IdentityEncoding::Plain => Ok(CategoryId::new(value)),
        }
    }
}

pub struct CategoryOptionSource<'a> {
    categories: &'a dyn CategoryRepository,
    encoding: IdentityEncoding,
    identifier: String,
}

impl<'a> CategoryOptionSource<'a> {
    pub fn new(categories: &'a dyn CategoryRepository, encoding: IdentityEncoding) -> Self {
        Self {
            categories,
            encoding,
            identifier: CATEGORY_SOURCE_IDENTIFIER.to_string(),
        }
    }

    /// Builder: register under another data source name
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// One option per category, in storage order
    pub fn get_data(&self) -> Result<Vec<CategoryOption>> {
        let options: Vec<CategoryOption> = self
            .categories
            .find_all()?
            .iter()
            .map(|category| CategoryOption {
                label: category.name().to_string(),
                value: self.encoding.encode(category.id()),
            })
            .collect();

        debug!(count = options.len(), "category options built");
        Ok(options)
    }

    /// Turn a stored option value back into its category
    pub fn resolve(&self, value: &str) -> Result<Option<Category>> {
        let id = self.encoding.decode(value)?;
        Ok(self.categories.find_by_id(&id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{category, FakeContent};

    fn content() -> FakeContent {
        let mut content = FakeContent::new();
        content.categories = vec![
            category("0b5e9c1e-1", "News"),
            category("0b5e9c1e-2", "Releases"),
            category("0b5e9c1e-3", "Events"),
        ];
        content
    }

    #[test]
    fn test_one_option_per_category() {
        let content = content();
        let source = CategoryOptionSource::new(&content, IdentityEncoding::default());

        let options = source.get_data().unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "News");

        for (option, category) in options.iter().zip(&content.categories) {
            let id = IdentityEncoding::default().decode(&option.value).unwrap();
            assert_eq!(&id, category.id());
        }
    }

    #[test]
    fn test_identifier_defaults_and_overrides() {
        let content = content();

        let source = CategoryOptionSource::new(&content, IdentityEncoding::default());
        assert_eq!(source.identifier(), CATEGORY_SOURCE_IDENTIFIER);

        let renamed = CategoryOptionSource::new(&content, IdentityEncoding::default())
            .with_identifier("blog-topics");
        assert_eq!(renamed.identifier(), "blog-topics");
    }

    #[test]
    fn test_json_value_shape() {
        let value = IdentityEncoding::default().encode(&CategoryId::new("abc"));
        let parsed: Value = serde_json::from_str(&value).unwrap();

        assert_eq!(parsed["__identity"], "abc");
        assert_eq!(parsed["__type"], DEFAULT_CATEGORY_TYPE);
    }

    #[test]
    fn test_resolve_round_trip() {
        let content = content();
        let source = CategoryOptionSource::new(&content, IdentityEncoding::Plain);

        let options = source.get_data().unwrap();
        assert_eq!(options[1].value, "0b5e9c1e-2");
        let category = source.resolve(&options[1].value).unwrap().unwrap();
        assert_eq!(category.name(), "Releases");
    }

    #[test]
    fn test_decode_rejects_foreign_type() {
        let encoding = IdentityEncoding::default();
        let foreign = r#"{"__identity":"abc","__type":"Some\\Other\\Entity"}"#;

        assert!(matches!(
            encoding.decode(foreign),
            Err(ArchiveError::InvalidOptionValue { .. })
        ));
        assert!(encoding.decode("not json").is_err());
    }

    #[test]
    fn test_empty_repository() {
        let content = FakeContent::new();
        let source = CategoryOptionSource::new(&content, IdentityEncoding::default());

        assert!(source.get_data().unwrap().is_empty());
        assert_eq!(source.identifier(), "post-categories");
    }
}
