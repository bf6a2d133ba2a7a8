//! CLI Commands

pub mod categories;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod unarchive;

pub use categories::CategoriesCommand;
pub use delete::DeleteCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
pub use unarchive::UnarchiveCommand;
