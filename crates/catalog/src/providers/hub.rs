//! HTTP template hub provider.
//!
//! Talks to a template catalog over a small JSON API:
//! `GET  {base}/api/templates/{name}` returns the template manifest,
//! `POST {base}/api/templates/{name}` publishes one. The API key travels
//! in the `x-api-key` header on every request.

use crate::client::{CatalogClient, Visibility};
use promptsync_core::{AppError, AppResult};
use promptsync_prompt::{MessageRole, MessageTemplate, RemoteTemplate};
use serde::{Deserialize, Serialize};

/// Template manifest as the hub API represents it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireManifest {
    Chat { messages: Vec<WireMessage> },
    Completion { template: String },
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    template: String,
}

/// Hub API retrieve response.
#[derive(Debug, Deserialize)]
struct RetrieveResponse {
    manifest: WireManifest,
}

/// Hub API publish request.
#[derive(Debug, Serialize)]
struct PublishRequest {
    manifest: WireManifest,
    visibility: String,
}

/// HTTP catalog client.
pub struct HubClient {
    /// Base URL for the hub API
    base_url: String,

    /// API key sent with every request
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HubClient {
    /// Create a new hub client.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn template_url(&self, name: &str) -> String {
        format!("{}/api/templates/{}", self.base_url, name)
    }

    /// Convert the domain template to hub wire format.
    fn to_wire(template: &RemoteTemplate) -> WireManifest {
        match template {
            RemoteTemplate::Chat(messages) => WireManifest::Chat {
                messages: messages
                    .iter()
                    .map(|m| WireMessage {
                        role: m.role.as_str().to_string(),
                        template: m.template.clone(),
                    })
                    .collect(),
            },
            RemoteTemplate::Completion(body) => WireManifest::Completion {
                template: body.clone(),
            },
        }
    }

    /// Convert a hub manifest to the domain template.
    ///
    /// Messages with a role this system does not model are dropped with a
    /// warning; reconstruction is best-effort by contract.
    fn from_wire(manifest: WireManifest) -> RemoteTemplate {
        match manifest {
            WireManifest::Chat { messages } => {
                let converted = messages
                    .into_iter()
                    .filter_map(|m| match MessageRole::parse(&m.role) {
                        Some(role) => Some(MessageTemplate {
                            role,
                            template: m.template,
                        }),
                        None => {
                            tracing::warn!("Dropping message with unsupported role: {}", m.role);
                            None
                        }
                    })
                    .collect();
                RemoteTemplate::Chat(converted)
            }
            WireManifest::Completion { template } => RemoteTemplate::Completion(template),
        }
    }
}

#[async_trait::async_trait]
impl CatalogClient for HubClient {
    fn provider_name(&self) -> &str {
        "hub"
    }

    async fn retrieve(&self, name: &str) -> AppResult<RemoteTemplate> {
        tracing::info!("Retrieving template from hub: {}", name);

        let response = self
            .client
            .get(self.template_url(name))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("Failed to send request to hub: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Catalog(format!(
                "Hub API error ({}): {}",
                status, error_text
            )));
        }

        let retrieved: RetrieveResponse = response
            .json()
            .await
            .map_err(|e| AppError::Catalog(format!("Failed to parse hub response: {}", e)))?;

        tracing::info!("Retrieved template: {}", name);

        Ok(Self::from_wire(retrieved.manifest))
    }

    async fn publish(
        &self,
        name: &str,
        template: &RemoteTemplate,
        visibility: Visibility,
    ) -> AppResult<()> {
        tracing::info!("Publishing template to hub: {}", name);

        let request = PublishRequest {
            manifest: Self::to_wire(template),
            visibility: visibility.as_str().to_string(),
        };

        let response = self
            .client
            .post(self.template_url(name))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("Failed to send request to hub: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Catalog(format!(
                "Hub API error ({}): {}",
                status, error_text
            )));
        }

        tracing::info!("Published template: {}", name);

        Ok(())
    }
}
