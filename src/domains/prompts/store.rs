//! Durable prompt template store and placeholder rendering.
//!
//! One pretty-printed JSON record per prompt at `<dir>/<id>.json`. There is
//! no cache layer: every `get` re-reads the file. A save replaces the record
//! wholesale, `created_at` included.
//!
//! Rendering is literal, iterative substitution: for each variable in caller
//! order, every `{name}` occurrence in the template is replaced with the
//! stringified value. Unmatched placeholders are left untouched; replacement
//! text is never rescanned within its own pass.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::PromptError;
use crate::domains::resources::stringify;

/// File extension for prompt records.
const STORE_EXT: &str = "json";

/// A stored prompt template record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PromptRecord {
    /// Template text with `{name}` placeholders.
    pub template: String,

    /// Free-text description of the prompt's purpose.
    #[serde(default)]
    pub description: String,

    /// Open metadata mapping (tags, author, ...).
    #[serde(default)]
    pub metadata: Map<String, Value>,

    /// Set at save time; a re-save resets it.
    #[serde(default)]
    pub created_at: String,
}

/// Durable prompt store. No cache: disk is the only source of truth.
#[derive(Debug)]
pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    /// Open a store rooted at `dir`, creating the directory if absent.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, STORE_EXT))
    }

    /// Save a prompt, replacing any prior record wholesale.
    pub fn save(
        &self,
        id: &str,
        template: &str,
        description: &str,
        metadata: Map<String, Value>,
    ) -> Result<PromptRecord, PromptError> {
        let record = PromptRecord {
            template: template.to_string(),
            description: description.to_string(),
            metadata,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        let text = serde_json::to_string_pretty(&record)?;
        fs::write(self.path_for(id), text)?;
        debug!("Saved prompt '{}'", id);
        Ok(record)
    }

    /// Load a prompt record from disk.
    pub fn get(&self, id: &str) -> Result<PromptRecord, PromptError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(PromptError::not_found(id));
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Enumerate stored ids in directory order.
    pub fn list(&self) -> Vec<String> {
        let mut ids = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some(STORE_EXT) {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        ids.push(stem.to_string());
                    }
                }
            }
        }
        ids
    }

    /// Delete a prompt. A missing record reports not-found.
    pub fn delete(&self, id: &str) -> Result<(), PromptError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(PromptError::not_found(id));
        }
        fs::remove_file(path)?;
        debug!("Deleted prompt '{}'", id);
        Ok(())
    }

    /// Load a prompt and substitute the given variables into its template.
    pub fn render(
        &self,
        id: &str,
        variables: &Map<String, Value>,
    ) -> Result<String, PromptError> {
        let record = self.get(id)?;
        Ok(render_template(&record.template, variables))
    }
}

/// Substitute `{name}` placeholders, one variable at a time in map order.
pub fn render_template(template: &str, variables: &Map<String, Value>) -> String {
    let mut rendered = template.to_string();
    for (name, value) in variables {
        let placeholder = format!("{{{}}}", name);
        rendered = rendered.replace(&placeholder, &stringify(value));
    }
    rendered
}
