//! Resources domain module.
//!
//! Durable key/value persistence for arbitrarily-typed payloads, with an
//! in-memory cache layered in front of one JSON file per key.
//!
//! ## Architecture
//!
//! - `store.rs` - the two-tier store (cache + files) and payload encoding
//! - `service.rs` - MCP resource protocol surface over the store
//! - `error.rs` - resource-specific error types

mod error;
mod service;
mod store;

pub use error::ResourceError;
pub use service::ResourceService;
pub use store::{stringify, ResourceStore};
