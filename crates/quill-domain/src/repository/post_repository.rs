//! Post Repository - Access to post nodes of the content tree
//!
//! Four fetch operations back the four archive filters. Dimension `None`
//! means "the default dimension"; the adapter knows which one that is.

use crate::model::category::Category;
use crate::model::dimension::LanguageDimension;
use crate::model::node::{ContentNode, NodeId};
use crate::model::post::Post;
use crate::model::workspace::Workspace;
use crate::repository::RepositoryError;

/// Post Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Order of returned posts is the storage order; callers sort.
pub trait PostRepository {
    /// All posts in a workspace
    fn fetch_by_workspace(
        &self,
        workspace: &Workspace,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError>;

    /// All posts written by `author`; `None` matches every author
    fn fetch_by_author(
        &self,
        author: Option<&str>,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError>;

    /// All posts attached to a category
    fn fetch_by_category(
        &self,
        category: &Category,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError>;

    /// Direct post children of a blog container
    ///
    /// An unknown container has no children.
    fn fetch_child_posts(&self, container: &NodeId) -> Result<Vec<Post>, RepositoryError>;

    /// Find a post by ID
    fn find_by_id(&self, id: &NodeId) -> Result<Option<Post>, RepositoryError>;

    /// All content nodes below a post, depth first
    fn find_descendants(&self, id: &NodeId) -> Result<Vec<ContentNode>, RepositoryError>;

    /// Write back a changed post
    fn save(&mut self, post: &Post) -> Result<(), RepositoryError>;

    /// Remove a post and every node below it
    fn remove_and_cascade(&mut self, id: &NodeId) -> Result<(), RepositoryError>;

    /// Check if a post exists
    fn exists(&self, id: &NodeId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// Flushes pending writes to storage
pub trait PersistenceManager {
    fn persist_all(&mut self) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    /// In-memory implementation for testing
    struct InMemoryPostRepo {
        posts: HashMap<String, Post>,
    }

    impl InMemoryPostRepo {
        fn new() -> Self {
            Self {
                posts: HashMap::new(),
            }
        }
    }

    impl PostRepository for InMemoryPostRepo {
        fn fetch_by_workspace(
            &self,
            workspace: &Workspace,
            _dimension: Option<&LanguageDimension>,
        ) -> Result<Vec<Post>, RepositoryError> {
            Ok(self
                .posts
                .values()
                .filter(|p| p.workspace() == workspace)
                .cloned()
                .collect())
        }

        fn fetch_by_author(
            &self,
            author: Option<&str>,
            _dimension: Option<&LanguageDimension>,
        ) -> Result<Vec<Post>, RepositoryError> {
            Ok(self
                .posts
                .values()
                .filter(|p| author.map_or(true, |a| p.author() == a))
                .cloned()
                .collect())
        }

        fn fetch_by_category(
            &self,
            category: &Category,
            _dimension: Option<&LanguageDimension>,
        ) -> Result<Vec<Post>, RepositoryError> {
            Ok(self
                .posts
                .values()
                .filter(|p| p.category() == Some(category))
                .cloned()
                .collect())
        }

        fn fetch_child_posts(&self, container: &NodeId) -> Result<Vec<Post>, RepositoryError> {
            Ok(self
                .posts
                .values()
                .filter(|p| p.parent().map(|c| c.id()) == Some(container))
                .cloned()
                .collect())
        }

        fn find_by_id(&self, id: &NodeId) -> Result<Option<Post>, RepositoryError> {
            Ok(self.posts.get(id.as_str()).cloned())
        }

        fn find_descendants(&self, _id: &NodeId) -> Result<Vec<ContentNode>, RepositoryError> {
            Ok(Vec::new())
        }

        fn save(&mut self, post: &Post) -> Result<(), RepositoryError> {
            self.posts.insert(post.id().as_str().to_string(), post.clone());
            Ok(())
        }

        fn remove_and_cascade(&mut self, id: &NodeId) -> Result<(), RepositoryError> {
            self.posts.remove(id.as_str());
            Ok(())
        }
    }

    #[test]
    fn test_exists_follows_find_by_id() {
        let mut repo = InMemoryPostRepo::new();
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let post = Post::new(NodeId::new("p-001"), Workspace::live(), "en_US", published);

        repo.save(&post).unwrap();
        assert!(repo.exists(&NodeId::new("p-001")).unwrap());

        repo.remove_and_cascade(&NodeId::new("p-001")).unwrap();
        assert!(!repo.exists(&NodeId::new("p-001")).unwrap());
    }

    #[test]
    fn test_author_wildcard() {
        let mut repo = InMemoryPostRepo::new();
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let alice =
            Post::new(NodeId::new("p-1"), Workspace::live(), "en_US", published).with_author("Alice");
        let bob =
            Post::new(NodeId::new("p-2"), Workspace::live(), "en_US", published).with_author("Bob");
        repo.save(&alice).unwrap();
        repo.save(&bob).unwrap();

        assert_eq!(repo.fetch_by_author(None, None).unwrap().len(), 2);
        assert_eq!(repo.fetch_by_author(Some("Bob"), None).unwrap().len(), 1);
    }
}
