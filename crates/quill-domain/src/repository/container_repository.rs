//! Container Repository - Blog nodes

use crate::model::container::Container;
use crate::model::node::NodeId;
use crate::model::workspace::Workspace;
use crate::repository::RepositoryError;

/// Container Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait ContainerRepository {
    /// Blogs visible from a personal workspace (its own and the live ones)
    fn list_personal(&self, workspace: &Workspace) -> Result<Vec<Container>, RepositoryError>;

    /// Find a blog by ID
    fn find_by_id(&self, id: &NodeId) -> Result<Option<Container>, RepositoryError>;
}
