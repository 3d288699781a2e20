//! Word Document MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server whose tools
//! build and edit a Word document and manage persistent resources and
//! prompt templates.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   shared state, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **document**: the shared document model and its `.docx` codec
//!   - **resources**: durable keyed JSON values with an in-memory cache
//!   - **prompts**: durable prompt templates with placeholder rendering
//!   - **tools**: the MCP tools exposed to clients
//!
//! # Example
//!
//! ```rust,no_run
//! use word_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
