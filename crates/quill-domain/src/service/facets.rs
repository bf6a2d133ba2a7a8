//! Facet Builder - The filter menus next to the archive list
//!
//! Each menu is keyed by what the editor reads (workspace name, author,
//! category name, blog title) and points at the entity to filter by.
//! Posts missing an attribute add nothing to that attribute's menu.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::category::Category;
use crate::model::container::Container;
use crate::model::post::Post;
use crate::model::workspace::Workspace;

/// The four filter menus of the archive
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetMenus {
    pub workspaces: BTreeMap<String, Workspace>,
    pub authors: BTreeSet<String>,
    pub categories: BTreeMap<String, Category>,
    pub blogs: BTreeMap<String, Container>,
}

impl FacetMenus {
    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
            && self.authors.is_empty()
            && self.categories.is_empty()
            && self.blogs.is_empty()
    }
}

/// Derives filter menus from a list of posts
#[derive(Debug, Clone, Copy, Default)]
pub struct FacetBuilder;

impl FacetBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the menus; a later post wins when two share a label
    pub fn build(&self, posts: &[Post]) -> FacetMenus {
        let mut menus = FacetMenus::default();

        for post in posts {
            let workspace = post.workspace();
            menus
                .workspaces
                .insert(workspace.name().to_string(), workspace.clone());

            if !post.author().is_empty() {
                menus.authors.insert(post.author().to_string());
            }

            if let Some(category) = post.category().filter(|c| !c.name().is_empty()) {
                menus
                    .categories
                    .insert(category.name().to_string(), category.clone());
            }

            if let Some(blog) = post.parent().filter(|b| !b.title().is_empty()) {
                menus.blogs.insert(blog.title().to_string(), blog.clone());
            }
        }

        menus
    }
}
