//! Workspace - An isolated editing context layered over the live content
//!
//! Workspaces are read-only context here: posts are listed per workspace
//! and the current user's personal workspace is shown in the archive.

use serde::{Deserialize, Serialize};

/// Prefix the content repository uses for personal workspaces
pub const PERSONAL_WORKSPACE_PREFIX: &str = "user-";

/// Name of the public workspace
pub const LIVE_WORKSPACE: &str = "live";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Workspace {
    name: String,
}

impl Workspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn live() -> Self {
        Self::new(LIVE_WORKSPACE)
    }

    /// The personal workspace of a user
    pub fn personal(user_name: &str) -> Self {
        Self::new(format!("{}{}", PERSONAL_WORKSPACE_PREFIX, user_name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_personal(&self) -> bool {
        self.name.starts_with(PERSONAL_WORKSPACE_PREFIX)
    }

    pub fn is_live(&self) -> bool {
        self.name == LIVE_WORKSPACE
    }
}
