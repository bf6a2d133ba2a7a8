//! Post - One blog entry in the content tree
//!
//! A Post is an Entity: the same `NodeId` is the same post even after
//! it is archived, moved back or edited.
//!
//! The archive only ever writes one thing on a post: the `archived` flag.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::container::Container;
use super::node::NodeId;
use super::property::PropertyValue;
use super::workspace::Workspace;

/// Property names the archive reads from a post node
pub mod property_names {
    pub const TITLE: &str = "title";
    pub const ARCHIVED: &str = "archived";
    pub const PUBLISHED_AT: &str = "publishedAt";
    pub const AUTHOR: &str = "author";
    pub const CATEGORIES: &str = "categories";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier (Entity identity)
    id: NodeId,
    /// Workspace this node variant lives in
    workspace: Workspace,
    /// Language dimension value of this node variant
    dimension: String,
    /// Blog the post is a child of, resolved by the repository
    parent: Option<Container>,
    archived: bool,
    published_at: DateTime<Utc>,
    /// Author name; empty when the post was never attributed
    author: String,
    category: Option<Category>,
    /// Every other property (title, teaser settings, ...)
    properties: BTreeMap<String, PropertyValue>,
}

impl Post {
    /// Create a new, non-archived Post
    pub fn new(
        id: NodeId,
        workspace: Workspace,
        dimension: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            workspace,
            dimension: dimension.into(),
            parent: None,
            archived: false,
            published_at,
            author: String::new(),
            category: None,
            properties: BTreeMap::new(),
        }
    }

    /// Builder: set the archived flag
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Builder: set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Builder: attach a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Builder: set the parent blog
    pub fn with_parent(mut self, parent: Container) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder: set a free-form property
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn parent(&self) -> Option<&Container> {
        self.parent.as_ref()
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.properties
            .get(property_names::TITLE)
            .and_then(PropertyValue::as_text)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Free-form properties only
    pub fn extra_properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    /// All properties of the node, the typed ones included
    ///
    /// This is what a template sees when every property is exposed under
    /// its own name. A missing category and an empty author are left out.
    pub fn properties(&self) -> BTreeMap<String, PropertyValue> {
        let mut all = self.properties.clone();
        all.insert(property_names::ARCHIVED.to_string(), self.archived.into());
        all.insert(
            property_names::PUBLISHED_AT.to_string(),
            self.published_at.into(),
        );
        if !self.author.is_empty() {
            all.insert(property_names::AUTHOR.to_string(), self.author.clone().into());
        }
        if let Some(category) = &self.category {
            all.insert(
                property_names::CATEGORIES.to_string(),
                category.name().into(),
            );
        }
        all
    }

    // ========== State Changes ==========

    /// Move the post in or out of the archive
    pub fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Post {}
