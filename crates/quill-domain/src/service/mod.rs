//! Domain Services - Archive rules that work on many posts at once
//!
//! Services are stateless: they take posts in and hand new values back.

pub mod dimensions;
pub mod facets;
pub mod listing;
