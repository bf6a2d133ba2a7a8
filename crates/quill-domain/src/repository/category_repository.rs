//! Category Repository - Read access to categories

use crate::model::category::{Category, CategoryId};
use crate::repository::RepositoryError;

/// Category Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait CategoryRepository {
    /// Every category, in storage order
    fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Find a category by its persistent identifier
    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// Find a category by its display name
    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self.find_all()?.into_iter().find(|c| c.name() == name))
    }
}
