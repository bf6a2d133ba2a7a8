//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from quill-domain.

pub mod in_memory;
