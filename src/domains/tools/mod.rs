//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to
//! perform specific actions on the document and the stores.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool listing
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` under the matching domain
//! 2. Define params, execute(), to_tool(), and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
