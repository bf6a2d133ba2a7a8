//! Archive Listing - The archive overview with its filter menus
//!
//! One request picks exactly one way of fetching posts, then always:
//!
//! ```text
//! fetch(selector) ─► keep archived ─► newest first ─► menus + languages ─► view model
//! ```

use std::collections::{BTreeMap, BTreeSet};

use quill_domain::service::dimensions::DimensionSelection;
use quill_domain::{
    filter_archived, sort_by_published_desc, Category, Container, ContainerRepository,
    DimensionRepository, DimensionResolver, FacetBuilder, LanguageDimension, NodeId, Post,
    PostRepository, UserContext, Workspace,
};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Filter inputs of an archive request; every one is optional
#[derive(Debug, Clone, Default)]
pub struct ArchiveQuery {
    pub workspace: Option<Workspace>,
    pub author: Option<String>,
    pub category: Option<Category>,
    pub blog: Option<NodeId>,
    pub dimension: Option<LanguageDimension>,
    pub dimension_label: Option<String>,
}

impl ArchiveQuery {
    /// Pick the active filter: workspace > author > category > blog
    pub fn selector(&self) -> PostSelector {
        if let Some(workspace) = &self.workspace {
            PostSelector::ByWorkspace(workspace.clone())
        } else if let Some(author) = self.author.as_ref().filter(|a| !a.trim().is_empty()) {
            PostSelector::ByAuthor(author.clone())
        } else if let Some(category) = &self.category {
            PostSelector::ByCategory(category.clone())
        } else if let Some(blog) = &self.blog {
            PostSelector::ByContainer(blog.clone())
        } else {
            PostSelector::Fallback
        }
    }
}

/// Which fetch operation serves the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSelector {
    ByWorkspace(Workspace),
    ByAuthor(String),
    ByCategory(Category),
    ByContainer(NodeId),
    /// No filter given: posts of every author
    Fallback,
}

/// Everything the archive template renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveViewModel {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub posts: Vec<Post>,
    pub post_count: usize,
    pub workspace_filter_menu: BTreeMap<String, Workspace>,
    pub author_filter_menu: BTreeSet<String>,
    pub category_filter_menu: BTreeMap<String, Category>,
    pub blog_filter_menu: BTreeMap<String, Container>,
    pub blogs: Vec<Container>,
    pub personal_workspace: String,
    /// Languages the editor can switch to
    pub dimensions: Vec<LanguageDimension>,
    /// Key of the default language, set when no language was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Label of the requested language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_label: Option<String>,
}

/// Assembles the archive view model from its collaborators
pub struct ArchiveListing<'a> {
    posts: &'a dyn PostRepository,
    blogs: &'a dyn ContainerRepository,
    dimensions: &'a dyn DimensionRepository,
    user: &'a dyn UserContext,
}

impl<'a> ArchiveListing<'a> {
    pub fn new(
        posts: &'a dyn PostRepository,
        blogs: &'a dyn ContainerRepository,
        dimensions: &'a dyn DimensionRepository,
        user: &'a dyn UserContext,
    ) -> Self {
        Self {
            posts,
            blogs,
            dimensions,
            user,
        }
    }

    /// Fetch posts for one selector, unfiltered and unsorted
    pub fn fetch(
        &self,
        selector: &PostSelector,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>> {
        let posts = match selector {
            PostSelector::ByWorkspace(workspace) => {
                self.posts.fetch_by_workspace(workspace, dimension)?
            }
            PostSelector::ByAuthor(author) => self.posts.fetch_by_author(Some(author), dimension)?,
            PostSelector::ByCategory(category) => {
                self.posts.fetch_by_category(category, dimension)?
            }
            PostSelector::ByContainer(blog) => self.posts.fetch_child_posts(blog)?,
            PostSelector::Fallback => self.posts.fetch_by_author(None, dimension)?,
        };
        Ok(posts)
    }

    /// Build the whole archive view
    pub fn list(&self, query: &ArchiveQuery) -> Result<ArchiveViewModel> {
        let selector = query.selector();
        let fetched = self.fetch(&selector, query.dimension.as_ref())?;
        let fetched_count = fetched.len();
        let posts = sort_by_published_desc(filter_archived(fetched));

        let menus = FacetBuilder::new().build(&posts);

        let personal_workspace = self.user.personal_workspace()?;
        let blogs = self.blogs.list_personal(&personal_workspace)?;

        let resolved = DimensionResolver::new().resolve(
            self.dimensions.list_language_dimensions()?,
            self.dimensions.default_language_dimension()?,
            query.dimension.as_ref(),
            query.dimension_label.as_deref(),
        );
        let (default_language, dimension_label) = match resolved.active {
            DimensionSelection::Requested { label, .. } => (None, Some(label)),
            DimensionSelection::Default { dimension } => (Some(dimension.key().to_string()), None),
        };

        debug!(
            selector = ?selector,
            fetched = fetched_count,
            archived = posts.len(),
            "archive listing assembled"
        );

        Ok(ArchiveViewModel {
            post_count: posts.len(),
            posts,
            workspace_filter_menu: menus.workspaces,
            author_filter_menu: menus.authors,
            category_filter_menu: menus.categories,
            blog_filter_menu: menus.blogs,
            blogs,
            personal_workspace: personal_workspace.name().to_string(),
            dimensions: resolved.selectable,
            default_language,
            dimension_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{category, post, published, FakeContent};

    fn listing(content: &FakeContent) -> ArchiveListing<'_> {
        ArchiveListing::new(content, content, content, content)
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn test_selector_precedence() {
        let mut query = ArchiveQuery {
            workspace: Some(Workspace::live()),
            author: Some("Alice".to_string()),
            category: Some(category("c-1", "News")),
            blog: Some(NodeId::new("blog-1")),
            ..Default::default()
        };
        assert_eq!(query.selector(), PostSelector::ByWorkspace(Workspace::live()));

        query.workspace = None;
        assert_eq!(query.selector(), PostSelector::ByAuthor("Alice".to_string()));

        query.author = Some("  ".to_string());
        assert_eq!(query.selector(), PostSelector::ByCategory(category("c-1", "News")));

        query.category = None;
        assert_eq!(query.selector(), PostSelector::ByContainer(NodeId::new("blog-1")));

        query.blog = None;
        assert_eq!(query.selector(), PostSelector::Fallback);
    }

    #[test]
    fn test_lists_archived_posts_newest_first() {
        let content = FakeContent::new().with_posts(vec![
            post("p-1", true, 1),
            post("p-2", false, 2),
            post("p-3", true, 3),
        ]);

        let view = listing(&content).list(&ArchiveQuery::default()).unwrap();
        assert_eq!(ids(&view.posts), vec!["p-3", "p-1"]);
        assert_eq!(view.post_count, 2);
    }

    #[test]
    fn test_category_menu_single_entry() {
        let news = category("c-news", "News");
        let content = FakeContent::new().with_posts(vec![
            post("p-1", true, 1).with_category(news.clone()),
            post("p-2", true, 2).with_category(news.clone()),
            post("p-3", true, 3),
        ]);

        let view = listing(&content).list(&ArchiveQuery::default()).unwrap();
        assert_eq!(view.category_filter_menu.len(), 1);
        assert_eq!(view.category_filter_menu.get("News"), Some(&news));
    }

    #[test]
    fn test_filter_by_category() {
        let news = category("c-news", "News");
        let content = FakeContent::new().with_posts(vec![
            post("p-1", true, 1).with_category(news.clone()),
            post("p-2", true, 2).with_category(category("c-events", "Events")),
            post("p-3", true, 3),
            post("p-4", true, 4).with_category(news.clone()),
            post("p-5", false, 5).with_category(news.clone()),
        ]);
        let query = ArchiveQuery {
            category: Some(news.clone()),
            ..Default::default()
        };

        let view = listing(&content).list(&query).unwrap();
        assert_eq!(ids(&view.posts), vec!["p-4", "p-1"]);
        assert_eq!(view.category_filter_menu.keys().collect::<Vec<_>>(), vec!["News"]);
    }

    #[test]
    fn test_filter_by_author() {
        let content = FakeContent::new().with_posts(vec![
            post("p-1", true, 1).with_author("Alice"),
            post("p-2", true, 2).with_author("Bob"),
        ]);

        let query = ArchiveQuery {
            author: Some("Bob".to_string()),
            ..Default::default()
        };
        let view = listing(&content).list(&query).unwrap();
        assert_eq!(ids(&view.posts), vec!["p-2"]);
        assert_eq!(view.author_filter_menu.len(), 1);
    }

    #[test]
    fn test_filter_by_workspace() {
        let draft = Post::new(
            NodeId::new("draft"),
            Workspace::personal("alice"),
            "en_US",
            published(5),
        )
        .with_archived(true);
        let content = FakeContent::new().with_posts(vec![post("p-1", true, 1), draft]);

        let query = ArchiveQuery {
            workspace: Some(Workspace::personal("alice")),
            ..Default::default()
        };
        let view = listing(&content).list(&query).unwrap();
        assert_eq!(ids(&view.posts), vec!["draft"]);
        assert!(view.workspace_filter_menu.contains_key("user-alice"));
    }

    #[test]
    fn test_unknown_blog_yields_empty_listing() {
        let content = FakeContent::new().with_posts(vec![post("p-1", true, 1)]);

        let query = ArchiveQuery {
            blog: Some(NodeId::new("missing")),
            ..Default::default()
        };
        let view = listing(&content).list(&query).unwrap();
        assert!(view.posts.is_empty());
        assert_eq!(view.post_count, 0);
        assert!(view.blog_filter_menu.is_empty());
    }

    #[test]
    fn test_blog_filter_lists_children() {
        let blog = Container::new(NodeId::new("blog-1"), "Company Blog", Workspace::live());
        let mut content = FakeContent::new().with_posts(vec![
            post("p-1", true, 1).with_parent(blog.clone()),
            post("p-2", true, 2),
        ]);
        content.blogs.push(blog);

        let query = ArchiveQuery {
            blog: Some(NodeId::new("blog-1")),
            ..Default::default()
        };
        let view = listing(&content).list(&query).unwrap();
        assert_eq!(ids(&view.posts), vec!["p-1"]);
        assert!(view.blog_filter_menu.contains_key("Company Blog"));
        assert_eq!(view.blogs.len(), 1);
    }

    #[test]
    fn test_default_language_when_none_requested() {
        let content = FakeContent::new();

        let view = listing(&content).list(&ArchiveQuery::default()).unwrap();
        assert_eq!(view.default_language.as_deref(), Some("en_US"));
        assert_eq!(view.dimension_label, None);
        assert!(view.dimensions.iter().all(|d| d.key() != "en_US"));
        assert_eq!(view.personal_workspace, "user-alice");
    }

    #[test]
    fn test_requested_language_filters_posts_and_switcher() {
        let german = Post::new(NodeId::new("p-de"), Workspace::live(), "de", published(4))
            .with_archived(true);
        let content = FakeContent::new().with_posts(vec![post("p-en", true, 1), german]);

        let query = ArchiveQuery {
            dimension: Some(LanguageDimension::new("de", "German")),
            dimension_label: Some("Deutsch".to_string()),
            ..Default::default()
        };
        let view = listing(&content).list(&query).unwrap();
        assert_eq!(ids(&view.posts), vec!["p-de"]);
        assert_eq!(view.dimension_label.as_deref(), Some("Deutsch"));
        assert_eq!(view.default_language, None);
        assert!(view.dimensions.iter().all(|d| d.key() != "de"));
    }

    #[test]
    fn test_empty_posts_not_serialized() {
        let content = FakeContent::new();

        let view = listing(&content).list(&ArchiveQuery::default()).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("posts").is_none());
        assert_eq!(json["postCount"], 0);
        assert!(json.get("dimensionLabel").is_none());
    }
}
