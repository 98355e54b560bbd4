//! Mock catalog provider for tests and offline development.

use crate::client::{CatalogClient, Visibility};
use promptsync_core::{AppError, AppResult};
use promptsync_prompt::RemoteTemplate;
use std::sync::Mutex;

/// One recorded publish call.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedTemplate {
    pub name: String,
    pub template: RemoteTemplate,
    pub visibility: Visibility,
}

/// In-memory catalog client.
///
/// Serves a preconfigured template on `retrieve` and records every
/// `publish` call for later inspection. Either operation can be primed to
/// fail, which makes the controller's failure paths testable without a
/// network.
#[derive(Debug, Default)]
pub struct MockCatalogClient {
    template: Option<RemoteTemplate>,
    fail_with: Option<String>,
    published: Mutex<Vec<PublishedTemplate>>,
}

impl MockCatalogClient {
    /// Create a mock that serves the given template.
    pub fn serving(template: RemoteTemplate) -> Self {
        Self {
            template: Some(template),
            ..Default::default()
        }
    }

    /// Create a mock whose operations all fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Default::default()
        }
    }

    /// Publish calls recorded so far, in order.
    pub fn published(&self) -> Vec<PublishedTemplate> {
        self.published
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Number of publish calls recorded so far.
    pub fn publish_count(&self) -> usize {
        self.published().len()
    }
}

#[async_trait::async_trait]
impl CatalogClient for MockCatalogClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn retrieve(&self, name: &str) -> AppResult<RemoteTemplate> {
        if let Some(ref message) = self.fail_with {
            return Err(AppError::Catalog(message.clone()));
        }

        self.template
            .clone()
            .ok_or_else(|| AppError::Catalog(format!("Template not found: {}", name)))
    }

    async fn publish(
        &self,
        name: &str,
        template: &RemoteTemplate,
        visibility: Visibility,
    ) -> AppResult<()> {
        if let Some(ref message) = self.fail_with {
            return Err(AppError::Catalog(message.clone()));
        }

        if let Ok(mut calls) = self.published.lock() {
            calls.push(PublishedTemplate {
                name: name.to_string(),
                template: template.clone(),
                visibility,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsync_prompt::{MessageRole, MessageTemplate};

    fn chat_template() -> RemoteTemplate {
        RemoteTemplate::Chat(vec![MessageTemplate {
            role: MessageRole::System,
            template: "You are a PM.".to_string(),
        }])
    }

    #[tokio::test]
    async fn test_mock_serves_configured_template() {
        let mock = MockCatalogClient::serving(chat_template());
        let retrieved = mock.retrieve("any/name").await.unwrap();
        assert_eq!(retrieved, chat_template());
    }

    #[tokio::test]
    async fn test_mock_records_publish_calls() {
        let mock = MockCatalogClient::default();
        mock.publish("acme/story", &chat_template(), Visibility::Public)
            .await
            .unwrap();

        let published = mock.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].name, "acme/story");
        assert_eq!(published[0].visibility, Visibility::Public);
    }

    #[tokio::test]
    async fn test_failing_mock_surfaces_message_verbatim() {
        let mock = MockCatalogClient::failing("hub unreachable");
        match mock.retrieve("any").await {
            Err(AppError::Catalog(message)) => assert_eq!(message, "hub unreachable"),
            other => panic!("Expected Catalog error, got {:?}", other),
        }
        assert_eq!(mock.publish_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_mock_reports_not_found() {
        let mock = MockCatalogClient::default();
        let result = mock.retrieve("missing/template").await;
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
