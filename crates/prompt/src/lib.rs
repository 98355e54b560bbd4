//! Prompt system for the promptsync CLI.
//!
//! This crate provides structured prompt management with:
//! - YAML-based prompt documents (one named entry per prompt definition)
//! - A heuristic quality gate run before any publish
//! - Conversion between the local definition and the catalog's
//!   ordered-message representation

pub mod convert;
pub mod store;
pub mod types;
pub mod validate;

// Re-export main types
pub use convert::{
    from_messages, to_messages, MessageRole, MessageTemplate, PromptFields, RemoteTemplate,
};
pub use store::{load_document, save_document, PromptDocument};
pub use types::{PromptDefinition, ValidationReport};
pub use validate::validate;
