//! User Context - Who is looking at the archive

use crate::model::workspace::Workspace;
use crate::repository::RepositoryError;

/// User Context Trait
///
/// This is a PORT in hexagonal architecture.
pub trait UserContext {
    /// Name of the current user
    fn current_user_name(&self) -> Result<String, RepositoryError>;

    /// Personal workspace of the current user
    fn personal_workspace(&self) -> Result<Workspace, RepositoryError> {
        Ok(Workspace::personal(&self.current_user_name()?))
    }
}
