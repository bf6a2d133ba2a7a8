//! Domain Models - The vocabulary of Quill
//!
//! These types mirror the nodes and records of the content repository
//! as far as the blog archive needs to see them.

pub mod category;
pub mod container;
pub mod dimension;
pub mod node;
pub mod post;
pub mod property;
pub mod workspace;
