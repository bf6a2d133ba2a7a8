//! Dimension Repository - Known values of the language dimension

use crate::model::dimension::LanguageDimension;
use crate::repository::RepositoryError;

/// Dimension Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait DimensionRepository {
    /// All configured language dimension values
    fn list_language_dimensions(&self) -> Result<Vec<LanguageDimension>, RepositoryError>;

    /// The dimension content falls back to when none is requested
    fn default_language_dimension(&self) -> Result<LanguageDimension, RepositoryError>;

    /// Look up a dimension by its key
    fn find_dimension(&self, key: &str) -> Result<Option<LanguageDimension>, RepositoryError> {
        Ok(self
            .list_language_dimensions()?
            .into_iter()
            .find(|d| d.key() == key))
    }
}
