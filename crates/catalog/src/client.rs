//! Catalog client abstraction.
//!
//! The remote catalog is an external collaborator: the rest of the system
//! only sees this trait. Both operations may fail with `AppError::Catalog`,
//! whose message passes through from the collaborator unmodified; the
//! caller does not classify sub-causes and never retries internally.

use promptsync_core::AppResult;
use promptsync_prompt::RemoteTemplate;

/// Visibility of a published template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// Trait for remote template catalog providers.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Get the provider name (e.g., "hub", "mock").
    fn provider_name(&self) -> &str;

    /// Fetch a template by its catalog name.
    async fn retrieve(&self, name: &str) -> AppResult<RemoteTemplate>;

    /// Publish a template under the given catalog name.
    async fn publish(
        &self,
        name: &str,
        template: &RemoteTemplate,
        visibility: Visibility,
    ) -> AppResult<()>;
}
