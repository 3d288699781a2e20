//! Prompt service implementation.
//!
//! Bridges the durable prompt store to the MCP prompt protocol: stored
//! templates are listed by id and instantiated with request arguments.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use serde_json::{Map, Value};
use tracing::info;

use super::error::PromptError;
use super::store::{render_template, PromptStore};

/// Service exposing the prompt store over the MCP prompt surface.
pub struct PromptService {
    store: Arc<PromptStore>,
}

impl PromptService {
    pub fn new(store: Arc<PromptStore>) -> Self {
        info!("Initializing PromptService over {:?}", store.dir());
        Self { store }
    }

    /// List all stored prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.store
            .list()
            .into_iter()
            .filter_map(|id| {
                let record = self.store.get(&id).ok()?;
                let description =
                    (!record.description.is_empty()).then_some(record.description);
                Some(Prompt {
                    name: id,
                    title: None,
                    description,
                    arguments: None,
                    icons: None,
                    meta: None,
                })
            })
            .collect()
    }

    /// Render a stored prompt with the given arguments into a user message.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let record = self.store.get(name)?;

        let mut variables = Map::new();
        for (key, value) in arguments.unwrap_or_default() {
            variables.insert(key, Value::String(value));
        }
        let content = render_template(&record.template, &variables);

        let description = (!record.description.is_empty()).then_some(record.description);
        Ok(GetPromptResult {
            description,
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_service() -> (TempDir, PromptService) {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(PromptStore::new(tmp.path().join("prompts")).unwrap());
        (tmp, PromptService::new(store))
    }

    #[tokio::test]
    async fn test_list_reflects_store() {
        let (_tmp, service) = test_service();
        service
            .store
            .save("greet", "Hi {name}", "a greeting", Map::new())
            .unwrap();

        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "greet");
        assert_eq!(prompts[0].description.as_deref(), Some("a greeting"));
    }

    #[tokio::test]
    async fn test_get_prompt_renders_arguments() {
        let (_tmp, service) = test_service();
        service
            .store
            .save("greet", "Hi {name}", "", Map::new())
            .unwrap();

        let mut args = HashMap::new();
        args.insert("name".to_string(), "Ann".to_string());

        let result = service.get_prompt("greet", Some(args)).await.unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let (_tmp, service) = test_service();
        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
