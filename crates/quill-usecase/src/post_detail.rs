//! Post Detail - One post with every property exposed by name

use std::collections::BTreeMap;
use std::sync::LazyLock;

use quill_domain::{ContentNode, NodeId, Post, PostRepository, PropertyValue};
use regex::Regex;
use serde::Serialize;

use crate::error::{ArchiveError, Result};

/// Teasers are cut to this many characters
pub const TEASER_LENGTH: usize = 200;

const TEXT_NODE_TYPE: &str = "Text";
const IMAGE_NODE_TYPE: &str = "Image";

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailView {
    pub post: Post,
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaser: Option<String>,
    /// Only set together with a teaser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PropertyValue>,
}

pub struct PostDetail<'a> {
    posts: &'a dyn PostRepository,
}

impl<'a> PostDetail<'a> {
    pub fn new(posts: &'a dyn PostRepository) -> Self {
        Self { posts }
    }

    pub fn show(&self, id: &NodeId) -> Result<PostDetailView> {
        let post = self
            .posts
            .find_by_id(id)?
            .ok_or_else(|| ArchiveError::PostNotFound { id: id.to_string() })?;

        let descendants = self.posts.find_descendants(id)?;
        let teaser = text_teaser(&descendants);
        let image = teaser.as_ref().and_then(|_| first_image(&descendants));

        Ok(PostDetailView {
            properties: post.properties(),
            post,
            teaser,
            image,
        })
    }
}

/// Node types are matched on their last segment (`Vendor.Package:Text`)
fn is_node_type(node: &ContentNode, name: &str) -> bool {
    node.node_type().rsplit(':').next() == Some(name)
}

fn text_teaser(nodes: &[ContentNode]) -> Option<String> {
    nodes
        .iter()
        .filter(|n| is_node_type(n, TEXT_NODE_TYPE))
        .filter_map(|n| n.property("text").and_then(PropertyValue::as_text))
        .map(|html| truncate(&plain_text(html), TEASER_LENGTH))
        .find(|text| !text.is_empty())
}

fn first_image(nodes: &[ContentNode]) -> Option<PropertyValue> {
    nodes
        .iter()
        .filter(|n| is_node_type(n, IMAGE_NODE_TYPE))
        .find_map(|n| n.property("image").cloned())
}

/// Drop markup and collapse whitespace
fn plain_text(html: &str) -> String {
    TAG.replace_all(html, " ")
        .replace("&nbsp;", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut at a word boundary and mark the cut
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let shortened = match cut.rfind(' ') {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}...", shortened.trim_end())
}
