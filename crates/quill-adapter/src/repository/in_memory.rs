//! In-Memory Repository Implementations
//!
//! A content tree held in memory: blogs at the top, posts below blogs and
//! content nodes below posts. Useful for testing, demos and the CLI.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use quill_domain::{
    Category, CategoryId, CategoryRepository, Container, ContainerRepository, ContentNode,
    DimensionRepository, LanguageDimension, NodeId, PersistenceManager, Post, PostRepository,
    RepositoryError, UserContext, Workspace,
};
use tracing::debug;

#[derive(Debug, Clone)]
enum NodeRecord {
    Blog(Container),
    Post {
        post: Post,
        parent: Option<NodeId>,
    },
    Content(ContentNode),
}

impl NodeRecord {
    fn parent(&self) -> Option<&NodeId> {
        match self {
            NodeRecord::Blog(_) => None,
            NodeRecord::Post { parent, .. } => parent.as_ref(),
            NodeRecord::Content(node) => Some(node.parent()),
        }
    }
}

#[derive(Debug, Default)]
struct ContentTree {
    nodes: HashMap<NodeId, NodeRecord>,
    /// Insertion order, which is also the order of fetch results
    order: Vec<NodeId>,
    pending_writes: usize,
    flushes: usize,
}

impl ContentTree {
    fn insert(&mut self, id: NodeId, record: NodeRecord) {
        if self.nodes.insert(id.clone(), record).is_none() {
            self.order.push(id);
        }
        self.pending_writes += 1;
    }

    /// Insert a node whose id is not taken yet
    fn insert_new(&mut self, id: NodeId, record: NodeRecord) -> Result<(), RepositoryError> {
        if self.nodes.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists { id: id.to_string() });
        }
        self.insert(id, record);
        Ok(())
    }

    fn records(&self) -> impl Iterator<Item = &NodeRecord> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    fn blog(&self, id: &NodeId) -> Option<&Container> {
        match self.nodes.get(id) {
            Some(NodeRecord::Blog(blog)) => Some(blog),
            _ => None,
        }
    }

    /// A post with its parent blog resolved
    fn resolve(&self, post: &Post, parent: Option<&NodeId>) -> Post {
        match parent.and_then(|id| self.blog(id)) {
            Some(blog) => post.clone().with_parent(blog.clone()),
            None => post.clone(),
        }
    }

    fn posts(&self) -> impl Iterator<Item = Post> + '_ {
        self.records().filter_map(|record| match record {
            NodeRecord::Post { post, parent } => Some(self.resolve(post, parent.as_ref())),
            _ => None,
        })
    }

    fn post(&self, id: &NodeId) -> Option<Post> {
        match self.nodes.get(id) {
            Some(NodeRecord::Post { post, parent }) => Some(self.resolve(post, parent.as_ref())),
            _ => None,
        }
    }

    /// Ids of every node below `id`, depth first
    fn descendant_ids(&self, id: &NodeId) -> Vec<NodeId> {
        let mut below = Vec::new();
        for child in self
            .order
            .iter()
            .filter(|child| self.nodes.get(*child).and_then(NodeRecord::parent) == Some(id))
        {
            below.push(child.clone());
            below.extend(self.descendant_ids(child));
        }
        below
    }
}

/// Everything in the content tree, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TreeSnapshot {
    pub blogs: Vec<Container>,
    /// Posts with the id of their parent blog
    pub posts: Vec<(Post, Option<NodeId>)>,
    pub content: Vec<ContentNode>,
}

/// In-memory content repository
///
/// Thread-safe implementation using RwLock. Clones share the same tree.
#[derive(Debug, Clone)]
pub struct InMemoryContentRepository {
    tree: Arc<RwLock<ContentTree>>,
    default_dimension: String,
}

impl InMemoryContentRepository {
    pub fn new(default_dimension: impl Into<String>) -> Self {
        Self {
            tree: Arc::new(RwLock::new(ContentTree::default())),
            default_dimension: default_dimension.into(),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ContentTree>, RepositoryError> {
        self.tree.read().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ContentTree>, RepositoryError> {
        self.tree.write().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }

    /// Add a blog at the top of the tree
    pub fn add_blog(&mut self, blog: Container) -> Result<(), RepositoryError> {
        let mut tree = self.write()?;
        tree.insert_new(blog.id().clone(), NodeRecord::Blog(blog))
    }

    /// Add a post, optionally below a blog
    pub fn add_post(&mut self, post: Post, blog: Option<NodeId>) -> Result<(), RepositoryError> {
        let mut tree = self.write()?;
        if let Some(id) = &blog {
            if tree.blog(id).is_none() {
                return Err(RepositoryError::NotFound { id: id.to_string() });
            }
        }
        tree.insert_new(post.id().clone(), NodeRecord::Post { post, parent: blog })
    }

    /// Add a content node below an existing node
    ///
    /// Ids are unique across the tree, so a node can never end up below itself.
    pub fn add_content(&mut self, node: ContentNode) -> Result<(), RepositoryError> {
        let mut tree = self.write()?;
        if !tree.nodes.contains_key(node.parent()) {
            return Err(RepositoryError::NotFound {
                id: node.parent().to_string(),
            });
        }
        tree.insert_new(node.id().clone(), NodeRecord::Content(node))
    }

    /// Writes since the last flush
    pub fn pending_writes(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.pending_writes)
    }

    pub fn flush_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.flushes)
    }

    pub fn snapshot(&self) -> Result<TreeSnapshot, RepositoryError> {
        let tree = self.read()?;
        let mut snapshot = TreeSnapshot::default();
        for record in tree.records() {
            match record {
                NodeRecord::Blog(blog) => snapshot.blogs.push(blog.clone()),
                NodeRecord::Post { post, parent } => {
                    snapshot.posts.push((post.clone(), parent.clone()))
                }
                NodeRecord::Content(node) => snapshot.content.push(node.clone()),
            }
        }
        Ok(snapshot)
    }

    fn dimension_key<'a>(&'a self, dimension: Option<&'a LanguageDimension>) -> &'a str {
        dimension.map_or(self.default_dimension.as_str(), |d| d.key())
    }

    fn select(
        &self,
        dimension: Option<&LanguageDimension>,
        predicate: impl Fn(&Post) -> bool,
    ) -> Result<Vec<Post>, RepositoryError> {
        let key = self.dimension_key(dimension);
        let tree = self.read()?;
        let posts = tree
            .posts()
            .filter(|p| p.dimension() == key && predicate(p))
            .collect();
        Ok(posts)
    }
}

impl PostRepository for InMemoryContentRepository {
    fn fetch_by_workspace(
        &self,
        workspace: &Workspace,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError> {
        self.select(dimension, |p| p.workspace() == workspace)
    }

    fn fetch_by_author(
        &self,
        author: Option<&str>,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError> {
        self.select(dimension, |p| author.map_or(true, |a| p.author() == a))
    }

    fn fetch_by_category(
        &self,
        category: &Category,
        dimension: Option<&LanguageDimension>,
    ) -> Result<Vec<Post>, RepositoryError> {
        self.select(dimension, |p| p.category().map(Category::id) == Some(category.id()))
    }

    fn fetch_child_posts(&self, container: &NodeId) -> Result<Vec<Post>, RepositoryError> {
        let tree = self.read()?;
        if tree.blog(container).is_none() {
            debug!(container = %container, "blog not found, no child posts");
            return Ok(Vec::new());
        }
        let children = tree
            .posts()
            .filter(|p| p.parent().map(Container::id) == Some(container))
            .collect();
        Ok(children)
    }

    fn find_by_id(&self, id: &NodeId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.read()?.post(id))
    }

    fn find_descendants(&self, id: &NodeId) -> Result<Vec<ContentNode>, RepositoryError> {
        let tree = self.read()?;
        let nodes = tree
            .descendant_ids(id)
            .iter()
            .filter_map(|child| match tree.nodes.get(child) {
                Some(NodeRecord::Content(node)) => Some(node.clone()),
                _ => None,
            })
            .collect();
        Ok(nodes)
    }

    fn save(&mut self, post: &Post) -> Result<(), RepositoryError> {
        let mut tree = self.write()?;
        let parent = match tree.nodes.get(post.id()) {
            Some(NodeRecord::Post { parent, .. }) => parent.clone(),
            Some(_) => {
                return Err(RepositoryError::Concurrency {
                    id: post.id().to_string(),
                })
            }
            None => post.parent().map(|blog| blog.id().clone()),
        };
        tree.insert(
            post.id().clone(),
            NodeRecord::Post {
                post: post.clone(),
                parent,
            },
        );
        Ok(())
    }

    fn remove_and_cascade(&mut self, id: &NodeId) -> Result<(), RepositoryError> {
        let mut tree = self.write()?;
        if !tree.nodes.contains_key(id) {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        }

        let mut removed = tree.descendant_ids(id);
        removed.push(id.clone());
        for node in &removed {
            tree.nodes.remove(node);
        }
        tree.order.retain(|node| !removed.contains(node));
        tree.pending_writes += 1;

        debug!(node = %id, removed = removed.len(), "node removed with descendants");
        Ok(())
    }
}

impl PersistenceManager for InMemoryContentRepository {
    fn persist_all(&mut self) -> Result<(), RepositoryError> {
        let mut tree = self.write()?;
        debug!(pending = tree.pending_writes, "flushing pending writes");
        tree.pending_writes = 0;
        tree.flushes += 1;
        Ok(())
    }
}

impl ContainerRepository for InMemoryContentRepository {
    fn list_personal(&self, workspace: &Workspace) -> Result<Vec<Container>, RepositoryError> {
        let tree = self.read()?;
        let blogs = tree
            .records()
            .filter_map(|record| match record {
                NodeRecord::Blog(blog)
                    if blog.workspace() == workspace || blog.workspace().is_live() =>
                {
                    Some(blog.clone())
                }
                _ => None,
            })
            .collect();
        Ok(blogs)
    }

    fn find_by_id(&self, id: &NodeId) -> Result<Option<Container>, RepositoryError> {
        Ok(self.read()?.blog(id).cloned())
    }
}

/// In-memory Category Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Add or replace a category
    pub fn add(&mut self, category: Category) -> Result<(), RepositoryError> {
        let mut categories = self.categories.write().map_err(|_| {
            RepositoryError::Persistence {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        match categories.iter_mut().find(|c| c.id() == category.id()) {
            Some(existing) => *existing = category,
            None => categories.push(category),
        }
        Ok(())
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = self.categories.read().map_err(|_| {
            RepositoryError::Persistence {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(categories.clone())
    }

    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        Ok(self.find_all()?.into_iter().find(|c| c.id() == id))
    }
}

/// Dimensions from configuration
#[derive(Debug, Clone)]
pub struct StaticDimensionRepository {
    dimensions: Vec<LanguageDimension>,
    default_key: String,
}

impl StaticDimensionRepository {
    pub fn new(dimensions: Vec<LanguageDimension>, default_key: impl Into<String>) -> Self {
        Self {
            dimensions,
            default_key: default_key.into(),
        }
    }

    pub fn from_config(config: &shared::QuillConfig) -> Self {
        Self::new(
            config
                .dimensions
                .iter()
                .map(|d| LanguageDimension::new(&d.key, &d.label))
                .collect(),
            &config.default_dimension,
        )
    }
}

impl DimensionRepository for StaticDimensionRepository {
    fn list_language_dimensions(&self) -> Result<Vec<LanguageDimension>, RepositoryError> {
        Ok(self.dimensions.clone())
    }

    fn default_language_dimension(&self) -> Result<LanguageDimension, RepositoryError> {
        self.find_dimension(&self.default_key)?
            .ok_or_else(|| RepositoryError::NotFound {
                id: self.default_key.clone(),
            })
    }
}

/// A fixed current user
#[derive(Debug, Clone)]
pub struct StaticUserContext {
    user_name: String,
}

impl StaticUserContext {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }
}

impl UserContext for StaticUserContext {
    fn current_user_name(&self) -> Result<String, RepositoryError> {
        Ok(self.user_name.clone())
    }
}
