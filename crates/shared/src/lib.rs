//! # Quill Shared
//!
//! Configuration and error types used by the adapter layer and the CLI.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
