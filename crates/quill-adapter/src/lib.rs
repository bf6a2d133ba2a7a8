//! # Quill Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - In-memory implementations of the domain ports
//! - `fixture`     - YAML content import and export for the in-memory store

pub mod fixture;
pub mod repository;

pub use fixture::{ContentFixture, ImportSummary};
pub use repository::in_memory::{
    InMemoryCategoryRepository, InMemoryContentRepository, StaticDimensionRepository,
    StaticUserContext, TreeSnapshot,
};
