//! CLI command implementations.
//!
//! - `list`: Page through reservations with search and sort
//! - `show`: Show one reservation
//! - `add`: Validate and add a reservation
//! - `update`: Validate and replace a reservation's details
//! - `delete`: Delete a reservation
//! - `import`: Import record lines from a file or stdin
//! - `export`: Write all reservations as CSV
//! - `cleanup`: Remove past reservations
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod cleanup;
pub mod completions;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod show;
pub mod update;

pub use add::AddCommand;
pub use cleanup::CleanupCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use export::ExportCommand;
pub use import::ImportCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;
