//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server: the shared document, the two persistent stores, and the tool
//! surface over all of them.

pub mod document;
pub mod prompts;
pub mod resources;
pub mod tools;
