//! # Quill Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//!
//! - `archive_listing` - filtered, sorted archive with its filter menus
//! - `post_mutation`   - move a post out of the archive, delete a post
//! - `post_detail`     - one post with all of its properties
//! - `category_source` - category options for the editor's select box
//! - `pagination`      - page window over the archive list

pub use quill_domain;

pub mod archive_listing;
pub mod category_source;
pub mod error;
pub mod pagination;
pub mod post_detail;
pub mod post_mutation;

#[cfg(test)]
pub(crate) mod test_support;

pub use archive_listing::{ArchiveListing, ArchiveQuery, ArchiveViewModel, PostSelector};
pub use category_source::{CategoryOption, CategoryOptionSource, IdentityEncoding};
pub use error::ArchiveError;
pub use pagination::{PageLink, Pagination, PaginationSettings, PaginationView};
pub use post_detail::{PostDetail, PostDetailView};
pub use post_mutation::{PostMutations, Redirect, RequestMethod};
