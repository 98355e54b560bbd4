//! Document store for prompt definitions.
//!
//! A prompt document is a YAML mapping keyed by prompt name. The store owns
//! the translation between `PromptDefinition` and its persisted form; it
//! performs no validation; the quality gate is solely `validate`'s job, so
//! the same store serves both the unvalidated pull result and the
//! pre-publish artifact.

use crate::types::PromptDefinition;
use promptsync_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// An in-memory prompt document: an insertion-ordered mapping of entry
/// name to prompt definition.
///
/// Entries the caller never touches pass through load/save byte-for-byte
/// equivalent, keeping their relative order and any fields the core does
/// not model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptDocument {
    entries: Mapping,
}

impl PromptDocument {
    /// Look up one named entry.
    ///
    /// Fails with `AppError::NotFound` if the name is absent.
    pub fn get(&self, name: &str) -> AppResult<PromptDefinition> {
        let key = Value::String(name.to_string());
        let value = self
            .entries
            .get(&key)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        let mut definition: PromptDefinition = serde_yaml::from_value(value.clone())?;
        definition.name = name.to_string();
        Ok(definition)
    }

    /// Insert or overwrite one named entry.
    ///
    /// All other entries and their relative order are preserved.
    pub fn insert(&mut self, name: &str, definition: &PromptDefinition) -> AppResult<()> {
        let value = serde_yaml::to_value(definition)?;
        self.entries.insert(Value::String(name.to_string()), value);
        Ok(())
    }

    /// Entry names in document order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect()
    }

    /// Whether the document holds an entry with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Value::String(name.to_string()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a prompt document from a YAML file.
///
/// An empty file is a valid empty document; a missing file is an error
/// (callers that want create-on-write check existence first).
pub fn load_document(path: &Path) -> AppResult<PromptDocument> {
    tracing::debug!("Loading prompt document from: {:?}", path);

    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "prompt document {}",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(PromptDocument::default());
    }

    let document: PromptDocument = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Serialization(format!(
            "Failed to parse prompt document {}: {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!("Loaded prompt document with {} entries", document.len());

    Ok(document)
}

/// Save a prompt document to a YAML file, creating parent directories as
/// needed.
pub fn save_document(path: &Path, document: &PromptDocument) -> AppResult<()> {
    tracing::debug!("Saving prompt document to: {:?}", path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_yaml::to_string(document)?;
    std::fs::write(path, contents)?;

    tracing::info!("Saved prompt document with {} entries", document.len());

    Ok(())
}
