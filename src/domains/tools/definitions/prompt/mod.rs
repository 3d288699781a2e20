//! Prompt tool definitions.
//!
//! Tools over the persistent prompt-template store.

mod delete;
mod get;
mod list;
mod render;
mod save;

pub use delete::DeletePromptTool;
pub use get::GetPromptTool;
pub use list::ListPromptsTool;
pub use render::RenderPromptTool;
pub use save::SavePromptTool;
