//! # Quill Domain Layer
//!
//! The heart of Quill - the blog archive rules, free of any storage concern.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Archive filter, sorter, facets, dimensions    ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate never touches storage.**
//!
//! The content tree, workspaces and persistence live behind the
//! repository traits. Swapping the content store never changes this crate.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    category::{Category, CategoryId},
    container::Container,
    dimension::LanguageDimension,
    node::{ContentNode, NodeId},
    post::Post,
    property::PropertyValue,
    workspace::Workspace,
};

pub use repository::{
    category_repository::CategoryRepository,
    container_repository::ContainerRepository,
    dimension_repository::DimensionRepository,
    post_repository::{PersistenceManager, PostRepository},
    user_context::UserContext,
    RepositoryError,
};

pub use service::{
    dimensions::{DimensionResolver, DimensionSelection},
    facets::{FacetBuilder, FacetMenus},
    listing::{filter_archived, sort_by_published_desc},
};
