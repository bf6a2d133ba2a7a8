//! Node identity and plain content nodes
//!
//! Every record in the content tree (blog containers, posts and the
//! content below a post) is addressed by a `NodeId`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::property::PropertyValue;

/// Identifier of a node in the content tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content node living below a post (text, image, ...)
///
/// Only the blog's detail view reads these; the archive never filters them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    id: NodeId,
    parent: NodeId,
    node_type: String,
    properties: BTreeMap<String, PropertyValue>,
}

impl ContentNode {
    pub fn new(id: NodeId, parent: NodeId, node_type: impl Into<String>) -> Self {
        Self {
            id,
            parent,
            node_type: node_type.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder: set a property
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn parent(&self) -> &NodeId {
        &self.parent
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }
}
