//! Error types for the archive use cases

use quill_domain::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The post to act on does not resolve to a node
    #[error("Post '{id}' not found")]
    PostNotFound { id: String },

    /// A category option value could not be decoded
    #[error("Invalid category option value '{value}': {reason}")]
    InvalidOptionValue { value: String, reason: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
