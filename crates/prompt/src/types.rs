//! Prompt types for the promptsync CLI.
//!
//! This module defines the domain entities for the prompt system.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A versioned prompt definition, stored as one named entry in a YAML
/// document.
///
/// The entry name is the document key, not a serialized field; the store
/// fills it in on load. Every serialized field has a default so a
/// half-authored entry still loads; missing text behaves as empty and
/// simply fails the relevant validation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptDefinition {
    /// Entry name (document key)
    #[serde(skip)]
    pub name: String,

    /// Free-text description of the prompt
    #[serde(default)]
    pub description: String,

    /// Instruction text defining the agent persona and behavior
    #[serde(default)]
    pub system_prompt: String,

    /// Parameterized user-input template (expects at least one placeholder)
    #[serde(default)]
    pub user_prompt: String,

    /// Revision tag (e.g., "v2")
    #[serde(default)]
    pub version: String,

    /// Opaque creation date string; never semantically validated
    #[serde(default)]
    pub created_at: String,

    /// Short descriptive labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Prompting techniques applied while authoring (e.g., few-shot,
    /// chain-of-thought), each as a free-text description
    #[serde(default)]
    pub techniques: Vec<String>,

    /// Unknown fields from the document, preserved across load/save and
    /// ignored by the core
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Result of running the quality gate over a prompt definition.
///
/// Produced fresh per validation call; never persisted. `errors` holds one
/// diagnostic per failed rule, in rule-table order, so an author can fix
/// every issue in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True iff every rule passed
    pub is_valid: bool,

    /// One human-readable diagnostic per failing rule
    pub errors: Vec<String>,
}
