//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits describe what the archive needs from the content
//! repository, NOT how the content tree is stored. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait PostRepository  │  InMemoryContentRepository
//!   fn fetch_by_*()     │  (a CMS content repository)
//!   fn remove_and_...() │
//! ```

use thiserror::Error;

pub mod category_repository;
pub mod container_repository;
pub mod dimension_repository;
pub mod post_repository;
pub mod user_context;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Record not found
    #[error("Node not found: {id}")]
    NotFound { id: String },
    /// A node with this id is already stored
    #[error("Node already exists: {id}")]
    AlreadyExists { id: String },
    /// Storage failed to read or write
    #[error("Persistence error: {message}")]
    Persistence { message: String },
    /// Concurrent modification detected
    #[error("Concurrent modification for node: {id}")]
    Concurrency { id: String },
}
