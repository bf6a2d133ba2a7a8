//! In-memory fakes of every port, for use case tests

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use quill_domain::{
    Category, CategoryId, CategoryRepository, Container, ContainerRepository, ContentNode,
    DimensionRepository, LanguageDimension, NodeId, PersistenceManager, Post, PostRepository,
    RepositoryError, UserContext, Workspace,
};

pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

pub(crate) fn published(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, day, 9, 30, 0).unwrap()
}

pub(crate) fn post(id: &str, archived: bool, day: u32) -> Post {
    Post::new(NodeId::new(id), Workspace::live(), "en_US", published(day)).with_archived(archived)
}

pub(crate) fn category(id: &str, name: &str) -> Category {
    Category::new(CategoryId::new(id), name)
}

pub(crate) struct FakeContent {
    pub posts: Vec<Post>,
    pub content: Vec<ContentNode>,
    pub blogs: Vec<Container>,
    pub categories: Vec<Category>,
    pub dimensions: Vec<LanguageDimension>,
    pub default_dimension: String,
    pub user: String,
    pub journal: Journal,
}

impl FakeContent {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            content: Vec::new(),
            blogs: Vec::new(),
            categories: Vec::new(),
            dimensions: vec![
                LanguageDimension::new("en_US", "English (US)"),
                LanguageDimension::new("de", "German"),
            ],
            default_dimension: "en_US".to_string(),
            user: "alice".to_string(),
            journal: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    fn in_dimension(&self, post: &Post, dimension: Option<&LanguageDimension>) -> bool {
        let key = dimension.map_or(self.default_dimension.as_str(), |d| d.key());
        post.dimension() == key
    }

    fn select(
        &self,
        dimension: Option<&LanguageDimension>,
        predicate: impl Fn(&Post) -> bool,
    ) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| self.in_dimension(p, dimension) && predicate(p))
            .cloned()
            .collect()
    }

    fn collect_below(&self, id: &NodeId, into: &mut Vec<ContentNode>) {
        for node in self.content.iter().filter(|n| n.parent() == id) {
            into.push(node.clone());
            self.collect_below(node.id(), into);
        }
    }
}

impl PostRepository for FakeContent {
    fn fetch_by_workspace(
        &self,
        workspace: &Workspace,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError> {
        Ok(self.select(dimension, |p| p.workspace() == workspace))
    }

    fn fetch_by_author(
        &self,
        author: Option<&str>,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError> {
        Ok(self.select(dimension, |p| author.map_or(true, |a| p.author() == a)))
    }

    fn fetch_by_category(
        &self,
        category: &Category,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError> {
        Ok(self.select(dimension, |p| p.category() == Some(category)))
    }

    fn fetch_child_posts(&self, container: &NodeId) -> Result<Vec<Post>, RepositoryError> {
        Ok(self
            .posts
            .iter()
            .filter(|p| p.parent().map(|c| c.id()) == Some(container))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: &NodeId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.iter().find(|p| p.id() == id).cloned())
    }

    fn find_descendants(&self, id: &NodeId) -> Result<Vec<ContentNode>, RepositoryError> {
        let mut below = Vec::new();
        self.collect_below(id, &mut below);
        Ok(below)
    }

    fn save(&mut self, post: &Post) -> Result<(), RepositoryError> {
        self.journal.borrow_mut().push(format!("save:{}", post.id()));
        match self.posts.iter_mut().find(|p| p.id() == post.id()) {
            Some(existing) => *existing = post.clone(),
            None => self.posts.push(post.clone()),
        }
        Ok(())
    }

    fn remove_and_cascade(&mut self, id: &NodeId) -> Result<(), RepositoryError> {
        self.journal.borrow_mut().push(format!("remove:{}", id));
        let mut below = Vec::new();
        self.collect_below(id, &mut below);
        self.content.retain(|n| !below.contains(n));
        self.posts.retain(|p| p.id() != id);
        Ok(())
    }
}

impl ContainerRepository for FakeContent {
    fn list_personal(&self, workspace: &Workspace) -> Result<Vec<Container>, RepositoryError> {
        Ok(self
            .blogs
            .iter()
            .filter(|b| b.workspace() == workspace || b.workspace().is_live())
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: &NodeId) -> Result<Option<Container>, RepositoryError> {
        Ok(self.blogs.iter().find(|b| b.id() == id).cloned())
    }
}

impl CategoryRepository for FakeContent {
    fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.clone())
    }

    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        Ok(self.categories.iter().find(|c| c.id() == id).cloned())
    }
}

impl DimensionRepository for FakeContent {
    fn list_language_dimensions(&self) -> Result<Vec<LanguageDimension>, RepositoryError> {
        Ok(self.dimensions.clone())
    }

    fn default_language_dimension(&self) -> Result<LanguageDimension, RepositoryError> {
        self.find_dimension(&self.default_dimension)?
            .ok_or_else(|| RepositoryError::NotFound {
                id: self.default_dimension.clone(),
            })
    }
}

impl UserContext for FakeContent {
    fn current_user_name(&self) -> Result<String, RepositoryError> {
        Ok(self.user.clone())
    }
}

/// Records flushes into the same journal as the content fake
pub(crate) struct FakePersistence {
    pub journal: Journal,
}

impl PersistenceManager for FakePersistence {
    fn persist_all(&mut self) -> Result<(), RepositoryError> {
        self.journal.borrow_mut().push("flush".to_string());
        Ok(())
    }
}
