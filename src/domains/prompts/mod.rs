//! Prompts domain module.
//!
//! Durable storage for text templates with `{name}` placeholders, plus the
//! render operation that substitutes caller-supplied variables.
//!
//! ## Architecture
//!
//! - `store.rs` - record persistence and the substitution engine
//! - `service.rs` - MCP prompt protocol surface over the store
//! - `error.rs` - prompt-specific error types

mod error;
mod service;
mod store;

pub use error::PromptError;
pub use service::PromptService;
pub use store::{render_template, PromptRecord, PromptStore};
