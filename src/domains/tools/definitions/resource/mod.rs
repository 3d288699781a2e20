//! Resource tool definitions.
//!
//! Tools over the persistent keyed JSON store.

mod delete;
mod get;
mod list;
mod save;

pub use delete::DeleteResourceTool;
pub use get::GetResourceTool;
pub use list::ListResourcesTool;
pub use save::SaveResourceTool;
