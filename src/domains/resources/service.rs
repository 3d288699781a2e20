//! Resource service implementation.
//!
//! Bridges the durable resource store to the MCP resource protocol: every
//! stored resource is listed as `resource://{id}` and readable as JSON text.

use std::sync::Arc;

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::store::ResourceStore;

/// URI scheme under which stored resources are exposed.
const URI_PREFIX: &str = "resource://";

/// Service exposing the resource store over the MCP resource surface.
pub struct ResourceService {
    store: Arc<ResourceStore>,
}

impl ResourceService {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        info!("Initializing ResourceService over {:?}", store.dir());
        Self { store }
    }

    /// List all stored resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.store
            .list()
            .into_iter()
            .map(|id| {
                let mut raw = RawResource::new(format!("{}{}", URI_PREFIX, id), id.clone());
                raw.description = Some(format!("Stored resource '{}'", id));
                raw.mime_type = Some("application/json".to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Read one stored resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let id = uri
            .strip_prefix(URI_PREFIX)
            .ok_or_else(|| ResourceError::invalid_uri(uri))?;
        let value = self.store.get(id)?;
        let text = serde_json::to_string_pretty(&value)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_service() -> (TempDir, ResourceService) {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(ResourceStore::new(tmp.path().join("resources")).unwrap());
        (tmp, ResourceService::new(store))
    }

    #[tokio::test]
    async fn test_list_reflects_store() {
        let (_tmp, service) = test_service();
        service.store.save("report", &json!({ "n": 1 })).unwrap();

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "resource://report");
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let (_tmp, service) = test_service();
        service.store.save("report", &json!({ "n": 1 })).unwrap();

        let result = service.read_resource("resource://report").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_missing_resource() {
        let (_tmp, service) = test_service();
        let result = service.read_resource("resource://absent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_foreign_scheme_is_invalid() {
        let (_tmp, service) = test_service();
        let result = service.read_resource("file:///etc/passwd").await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }
}
