//! Container - The blog node grouping a set of posts

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::workspace::Workspace;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    id: NodeId,
    title: String,
    workspace: Workspace,
}

impl Container {
    pub fn new(id: NodeId, title: impl Into<String>, workspace: Workspace) -> Self {
        Self {
            id,
            title: title.into(),
            workspace,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Container {}
