//! Shared application state handed to every tool.
//!
//! One instance exists per server: the mutable document handle plus the two
//! persistent stores. Tool routes clone the surrounding `Arc` and operate on
//! the same underlying document and stores.

use std::sync::Arc;

use super::config::Config;
use super::error::Result;
use crate::domains::document::DocumentHandle;
use crate::domains::prompts::PromptStore;
use crate::domains::resources::ResourceStore;

/// Shared state for all tools: the document and the stores.
pub struct AppState {
    /// Server configuration.
    pub config: Arc<Config>,

    /// The single shared document instance.
    pub document: DocumentHandle,

    /// Durable resource store (cache + files).
    pub resources: Arc<ResourceStore>,

    /// Durable prompt store.
    pub prompts: Arc<PromptStore>,
}

impl AppState {
    /// Build the state, creating the store directories if absent.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let resources = Arc::new(ResourceStore::new(&config.stores.resources_dir)?);
        let prompts = Arc::new(PromptStore::new(&config.stores.prompts_dir)?);
        Ok(Self {
            config,
            document: DocumentHandle::new(),
            resources,
            prompts,
        })
    }
}
