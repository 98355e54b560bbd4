//! Remote template catalog integration for the promptsync CLI.
//!
//! This crate provides a provider-agnostic abstraction for the remote
//! template catalog plus the lifecycle operations built on top of it:
//! pulling a baseline template into the local document, and publishing a
//! validated revision back.
//!
//! # Providers
//! - **Hub**: HTTP catalog API (default)
//! - **Mock**: in-memory catalog for tests and offline development

pub mod client;
pub mod lifecycle;
pub mod providers;

// Re-export main types
pub use client::{CatalogClient, Visibility};
pub use lifecycle::LifecycleController;
pub use providers::{HubClient, MockCatalogClient};
