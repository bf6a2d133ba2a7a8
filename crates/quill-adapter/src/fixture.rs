//! Content Fixtures - YAML import and export of the in-memory store
//!
//! ```yaml
//! categories:
//!   - name: News
//! blogs:
//!   - id: blog-1
//!     title: Company Blog
//! posts:
//!   - id: post-1
//!     blog: blog-1
//!     author: Alice
//!     archived: true
//!     publishedAt: 2024-03-01T12:00:00Z
//!     category: News
//!     properties:
//!       title: Hello
//!     content:
//!       - id: text-1
//!         type: Text
//!         properties:
//!           text: "<p>Hello world</p>"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use quill_domain::model::workspace::LIVE_WORKSPACE;
use quill_domain::{
    Category, CategoryId, CategoryRepository, Container, ContentNode, NodeId, Post,
    PropertyValue, Workspace,
};
use serde::{Deserialize, Serialize};
use shared::{QuillError, Result};
use tracing::{debug, info};

use crate::repository::in_memory::{InMemoryCategoryRepository, InMemoryContentRepository};

fn live() -> String {
    LIVE_WORKSPACE.to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFixture {
    /// Generated when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogFixture {
    pub id: String,
    pub title: String,
    #[serde(default = "live")]
    pub workspace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNodeFixture {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNodeFixture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFixture {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default = "live")]
    pub workspace: String,
    /// Falls back to the default dimension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub archived: bool,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    /// Category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentNodeFixture>,
}

/// A YAML content export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFixture {
    pub categories: Vec<CategoryFixture>,
    pub blogs: Vec<BlogFixture>,
    pub posts: Vec<PostFixture>,
}

/// What an import added to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub blogs: usize,
    pub posts: usize,
    pub content_nodes: usize,
}

fn fixture_error(error: impl std::fmt::Display) -> QuillError {
    QuillError::Fixture(error.to_string())
}

impl ContentFixture {
    /// Load a fixture file, or every `*.yaml` file of a directory
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::from_directory(path)
        } else {
            Self::from_file(path)
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let fixture: Self = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), posts = fixture.posts.len(), "fixture file read");
        Ok(fixture)
    }

    /// Files are merged in name order
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let pattern = dir.join("*.yaml");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| QuillError::Config(format!("Invalid path: {}", dir.display())))?;

        let mut paths: Vec<_> = glob::glob(pattern)
            .map_err(fixture_error)?
            .collect::<std::result::Result<_, _>>()
            .map_err(fixture_error)?;
        paths.sort();

        let mut merged = Self::default();
        for path in paths {
            let fixture = Self::from_file(&path)?;
            merged.categories.extend(fixture.categories);
            merged.blogs.extend(fixture.blogs);
            merged.posts.extend(fixture.posts);
        }
        Ok(merged)
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Add everything in the fixture to the store
    pub fn import(
        &self,
        content: &mut InMemoryContentRepository,
        categories: &mut InMemoryCategoryRepository,
        default_dimension: &str,
    ) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for fixture in &self.categories {
            let id = fixture
                .id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            categories
                .add(Category::new(CategoryId::new(id), &fixture.name))
                .map_err(fixture_error)?;
            summary.categories += 1;
        }

        for fixture in &self.blogs {
            content
                .add_blog(Container::new(
                    NodeId::new(&fixture.id),
                    &fixture.title,
                    Workspace::new(&fixture.workspace),
                ))
                .map_err(fixture_error)?;
            summary.blogs += 1;
        }

        for fixture in &self.posts {
            let mut post = Post::new(
                NodeId::new(&fixture.id),
                Workspace::new(&fixture.workspace),
                fixture.dimension.as_deref().unwrap_or(default_dimension),
                fixture.published_at,
            )
            .with_archived(fixture.archived)
            .with_author(&fixture.author);

            if let Some(name) = &fixture.category {
                let category = categories
                    .find_by_name(name)
                    .map_err(fixture_error)?
                    .ok_or_else(|| {
                        QuillError::Fixture(format!(
                            "post '{}' refers to unknown category '{}'",
                            fixture.id, name
                        ))
                    })?;
                post = post.with_category(category);
            }
            for (name, value) in &fixture.properties {
                post = post.with_property(name, value.clone());
            }

            content
                .add_post(post, fixture.blog.as_ref().map(NodeId::new))
                .map_err(fixture_error)?;
            summary.posts += 1;

            summary.content_nodes +=
                import_nodes(content, &NodeId::new(&fixture.id), &fixture.content)?;
        }

        info!(
            categories = summary.categories,
            blogs = summary.blogs,
            posts = summary.posts,
            content_nodes = summary.content_nodes,
            "content fixture imported"
        );
        Ok(summary)
    }

    /// Capture the whole store as a fixture
    pub fn export(
        content: &InMemoryContentRepository,
        categories: &InMemoryCategoryRepository,
    ) -> Result<Self> {
        let snapshot = content.snapshot().map_err(fixture_error)?;

        let categories = categories
            .find_all()
            .map_err(fixture_error)?
            .iter()
            .map(|category| CategoryFixture {
                id: Some(category.id().to_string()),
                name: category.name().to_string(),
            })
            .collect();

        let blogs = snapshot
            .blogs
            .iter()
            .map(|blog| BlogFixture {
                id: blog.id().to_string(),
                title: blog.title().to_string(),
                workspace: blog.workspace().name().to_string(),
            })
            .collect();

        let posts = snapshot
            .posts
            .iter()
            .map(|(post, blog)| PostFixture {
                id: post.id().to_string(),
                blog: blog.as_ref().map(NodeId::to_string),
                workspace: post.workspace().name().to_string(),
                dimension: Some(post.dimension().to_string()),
                archived: post.is_archived(),
                published_at: post.published_at(),
                author: post.author().to_string(),
                category: post.category().map(|c| c.name().to_string()),
                properties: post.extra_properties().clone(),
                content: export_nodes(&snapshot.content, post.id()),
            })
            .collect();

        Ok(Self {
            categories,
            blogs,
            posts,
        })
    }
}

fn import_nodes(
    content: &mut InMemoryContentRepository,
    parent: &NodeId,
    fixtures: &[ContentNodeFixture],
) -> Result<usize> {
    let mut count = 0;
    for fixture in fixtures {
        let id = NodeId::new(&fixture.id);
        let node = fixture
            .properties
            .iter()
            .fold(
                ContentNode::new(id.clone(), parent.clone(), &fixture.node_type),
                |node, (name, value)| node.with_property(name, value.clone()),
            );
        content.add_content(node).map_err(fixture_error)?;
        count += 1 + import_nodes(content, &id, &fixture.children)?;
    }
    Ok(count)
}

fn export_nodes(nodes: &[ContentNode], parent: &NodeId) -> Vec<ContentNodeFixture> {
    nodes
        .iter()
        .filter(|node| node.parent() == parent)
        .map(|node| ContentNodeFixture {
            id: node.id().to_string(),
            node_type: node.node_type().to_string(),
            properties: node.properties().clone(),
            children: export_nodes(nodes, node.id()),
        })
        .collect()
}
