//! Lifecycle operations over the local document and the remote catalog.
//!
//! Two linear operations, each a short sequence with explicit failure
//! propagation and no internal retries:
//!
//! - **pull**: catalog → converter → fresh baseline entry → document
//! - **push**: document → quality gate → converter → catalog
//!
//! The catalog client and the publish namespace are injected at
//! construction; nothing here reads process state.

use crate::client::{CatalogClient, Visibility};
use promptsync_core::{AppError, AppResult};
use promptsync_prompt::{
    convert::DEFAULT_USER_TEMPLATE, from_messages, load_document, save_document, to_messages,
    validate, PromptDefinition, PromptDocument,
};
use std::path::Path;
use std::sync::Arc;

/// Orchestrates pull and push against one document and one catalog client.
pub struct LifecycleController {
    client: Arc<dyn CatalogClient>,
    namespace: Option<String>,
}

impl LifecycleController {
    /// Create a controller with an injected catalog client and optional
    /// publish namespace.
    pub fn new(client: Arc<dyn CatalogClient>, namespace: Option<String>) -> Self {
        Self { client, namespace }
    }

    /// Pull a baseline template from the catalog into the local document.
    ///
    /// The fetched template becomes a fresh `v1` entry with empty
    /// techniques and a stamped creation date, the starting point for the
    /// author's improved revision. An existing entry with the same name is
    /// overwritten; all other entries are preserved.
    pub async fn pull(
        &self,
        catalog_name: &str,
        document_path: &Path,
        entry_name: &str,
    ) -> AppResult<PromptDefinition> {
        tracing::info!("Pulling template '{}' from catalog", catalog_name);

        let template = self.client.retrieve(catalog_name).await?;
        let fields = from_messages(&template);

        // A baseline without a user template still needs a usable one
        let user_prompt = if fields.user_prompt.is_empty() {
            DEFAULT_USER_TEMPLATE.to_string()
        } else {
            fields.user_prompt
        };

        let definition = PromptDefinition {
            name: entry_name.to_string(),
            description: format!("Baseline template pulled from the catalog: {}", catalog_name),
            system_prompt: fields.system_prompt,
            user_prompt,
            version: "v1".to_string(),
            created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
            tags: vec!["baseline".to_string()],
            techniques: Vec::new(),
            ..Default::default()
        };

        let mut document = if document_path.exists() {
            load_document(document_path)?
        } else {
            PromptDocument::default()
        };
        document.insert(entry_name, &definition)?;
        save_document(document_path, &document)?;

        tracing::info!(
            "Saved baseline entry '{}' to {}",
            entry_name,
            document_path.display()
        );

        Ok(definition)
    }

    /// Publish a validated entry from the local document to the catalog.
    ///
    /// The quality gate runs first; on any failure the operation aborts
    /// with the full diagnostic list and the catalog is never contacted.
    /// Returns the full published name.
    pub async fn push(
        &self,
        document_path: &Path,
        entry_name: &str,
        visibility: Visibility,
    ) -> AppResult<String> {
        tracing::info!("Pushing entry '{}' to catalog", entry_name);

        let document = load_document(document_path)?;
        let definition = document.get(entry_name)?;

        let report = validate(&definition);
        if !report.is_valid {
            tracing::warn!(
                "Entry '{}' failed validation with {} error(s)",
                entry_name,
                report.errors.len()
            );
            return Err(AppError::Validation(report.errors));
        }

        let template = to_messages(&definition);
        let full_name = self.full_name(entry_name);
        self.client
            .publish(&full_name, &template, visibility)
            .await?;

        tracing::info!("Published '{}'", full_name);

        Ok(full_name)
    }

    /// Full catalog name for an entry: `{namespace}/{name}` when a
    /// namespace is configured, the bare name otherwise.
    pub fn full_name(&self, name: &str) -> String {
        match self.namespace {
            Some(ref namespace) => format!("{}/{}", namespace, name),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockCatalogClient;
    use promptsync_prompt::{MessageRole, MessageTemplate, RemoteTemplate};
    use tempfile::TempDir;

    fn baseline_template() -> RemoteTemplate {
        RemoteTemplate::Chat(vec![
            MessageTemplate {
                role: MessageRole::System,
                template: "You are a helpful assistant.".to_string(),
            },
            MessageTemplate {
                role: MessageRole::Human,
                template: "{input}".to_string(),
            },
        ])
    }

    /// An entry that clears every validation rule.
    fn publishable_definition() -> PromptDefinition {
        PromptDefinition {
            description: "Turns raw bug reports into well-formed user stories".to_string(),
            system_prompt: "Você é um Product Manager experiente. Gere user stories em Markdown.\n\
                            ## Exemplo 1: Input: relatório de bug. Output: user story.\n\
                            ## Exemplo 2: Input: erro de login. Output: história de usuário."
                .to_string(),
            user_prompt: "{input}".to_string(),
            version: "v2".to_string(),
            created_at: "2025-01-15".to_string(),
            tags: vec!["bug-analysis".to_string()],
            techniques: vec![
                "Few-shot learning with two examples".to_string(),
                "Role prompting with explicit persona".to_string(),
            ],
            ..Default::default()
        }
    }

    fn document_with(entry_name: &str, definition: &PromptDefinition, dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("prompts.yml");
        let mut document = PromptDocument::default();
        document.insert(entry_name, definition).unwrap();
        save_document(&path, &document).unwrap();
        path
    }

    #[tokio::test]
    async fn test_pull_writes_baseline_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompts/story.yml");
        let mock = Arc::new(MockCatalogClient::serving(baseline_template()));
        let controller = LifecycleController::new(mock, None);

        let pulled = controller
            .pull("acme/bug_to_user_story", &path, "bug_to_user_story_v1")
            .await
            .unwrap();

        assert_eq!(pulled.version, "v1");
        assert!(pulled.techniques.is_empty());
        assert!(!pulled.created_at.is_empty());
        assert_eq!(pulled.system_prompt, "You are a helpful assistant.");
        assert_eq!(pulled.user_prompt, "{input}");

        let document = load_document(&path).unwrap();
        let stored = document.get("bug_to_user_story_v1").unwrap();
        assert_eq!(stored.system_prompt, pulled.system_prompt);
        assert!(stored.description.contains("acme/bug_to_user_story"));
    }

    #[tokio::test]
    async fn test_pull_defaults_missing_user_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("story.yml");
        let template = RemoteTemplate::Completion("Plain instruction body.".to_string());
        let mock = Arc::new(MockCatalogClient::serving(template));
        let controller = LifecycleController::new(mock, None);

        let pulled = controller.pull("acme/plain", &path, "plain_v1").await.unwrap();

        assert_eq!(pulled.system_prompt, "Plain instruction body.");
        assert_eq!(pulled.user_prompt, DEFAULT_USER_TEMPLATE);
    }

    #[tokio::test]
    async fn test_pull_preserves_existing_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = document_with("existing", &publishable_definition(), &temp_dir);
        let mock = Arc::new(MockCatalogClient::serving(baseline_template()));
        let controller = LifecycleController::new(mock, None);

        controller.pull("acme/new", &path, "fresh_v1").await.unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.names(), vec!["existing", "fresh_v1"]);
    }

    #[tokio::test]
    async fn test_pull_catalog_failure_leaves_no_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("story.yml");
        let mock = Arc::new(MockCatalogClient::failing("hub unreachable"));
        let controller = LifecycleController::new(mock, None);

        let result = controller.pull("acme/story", &path, "story_v1").await;

        match result {
            Err(AppError::Catalog(message)) => assert_eq!(message, "hub unreachable"),
            other => panic!("Expected Catalog error, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_push_publishes_validated_entry_under_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let path = document_with("bug_to_user_story_v2", &publishable_definition(), &temp_dir);
        let mock = Arc::new(MockCatalogClient::default());
        let controller = LifecycleController::new(mock.clone(), Some("acme".to_string()));

        let full_name = controller
            .push(&path, "bug_to_user_story_v2", Visibility::Public)
            .await
            .unwrap();

        assert_eq!(full_name, "acme/bug_to_user_story_v2");

        let published = mock.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].name, "acme/bug_to_user_story_v2");
        assert_eq!(published[0].visibility, Visibility::Public);
        match &published[0].template {
            RemoteTemplate::Chat(messages) => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0].role, MessageRole::System);
                assert_eq!(messages[1].role, MessageRole::Human);
            }
            RemoteTemplate::Completion(_) => panic!("expected a chat template"),
        }
    }

    #[tokio::test]
    async fn test_push_without_namespace_uses_bare_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = document_with("story_v2", &publishable_definition(), &temp_dir);
        let mock = Arc::new(MockCatalogClient::default());
        let controller = LifecycleController::new(mock.clone(), None);

        let full_name = controller
            .push(&path, "story_v2", Visibility::Private)
            .await
            .unwrap();

        assert_eq!(full_name, "story_v2");
        assert_eq!(mock.published()[0].visibility, Visibility::Private);
    }

    #[tokio::test]
    async fn test_push_rejected_by_gate_never_contacts_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let mut unfinished = publishable_definition();
        unfinished.system_prompt = "[TODO] write the real instruction".to_string();
        let path = document_with("draft_v2", &unfinished, &temp_dir);
        let mock = Arc::new(MockCatalogClient::default());
        let controller = LifecycleController::new(mock.clone(), Some("acme".to_string()));

        let result = controller.push(&path, "draft_v2", Visibility::Public).await;

        match result {
            Err(AppError::Validation(errors)) => assert!(!errors.is_empty()),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert_eq!(mock.publish_count(), 0);
    }

    #[tokio::test]
    async fn test_push_missing_entry_never_contacts_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = document_with("present", &publishable_definition(), &temp_dir);
        let mock = Arc::new(MockCatalogClient::default());
        let controller = LifecycleController::new(mock.clone(), None);

        let result = controller.push(&path, "absent", Visibility::Public).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(mock.publish_count(), 0);
    }
}
