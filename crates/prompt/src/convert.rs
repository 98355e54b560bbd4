//! Conversion between prompt definitions and the catalog's ordered-message
//! representation.
//!
//! The catalog stores a template as a sequence of role-tagged messages (or,
//! for older entries, one plain text body). Locally a prompt is a pair of
//! named fields. `to_messages` and `from_messages` translate between the
//! two; both are pure and stateless.

use crate::types::PromptDefinition;
use serde::{Deserialize, Serialize};

/// Canonical single-placeholder user template, substituted when a
/// definition has no user prompt. `{input}` stands for the raw input text.
pub const DEFAULT_USER_TEMPLATE: &str = "{input}";

/// Role tag carried by each message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Human,
}

impl MessageRole {
    /// Parse a wire role string. "user" is an accepted alias for human.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(Self::System),
            "human" | "user" => Some(Self::Human),
            _ => None,
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Human => "human",
        }
    }
}

/// One role-tagged message template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub role: MessageRole,
    pub template: String,
}

/// A template as the catalog represents it: an ordered message sequence,
/// or a single unstructured text body for non-chat entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RemoteTemplate {
    Chat(Vec<MessageTemplate>),
    Completion(String),
}

/// The two fields `from_messages` can reconstruct from a remote template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptFields {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Convert a definition into the catalog representation.
///
/// Emits exactly two messages, system first. A definition with no user
/// prompt gets the canonical `{input}` placeholder template so the
/// published entry always accepts raw input.
pub fn to_messages(definition: &PromptDefinition) -> RemoteTemplate {
    let user_template = if definition.user_prompt.is_empty() {
        DEFAULT_USER_TEMPLATE.to_string()
    } else {
        definition.user_prompt.clone()
    };

    RemoteTemplate::Chat(vec![
        MessageTemplate {
            role: MessageRole::System,
            template: definition.system_prompt.clone(),
        },
        MessageTemplate {
            role: MessageRole::Human,
            template: user_template,
        },
    ])
}

/// Reconstruct prompt fields from a remote template.
///
/// The first system message populates `system_prompt` and the first human
/// message populates `user_prompt`; a plain completion body becomes the
/// system prompt. Fields with no matching message stay empty. This is a
/// best-effort reconstruction: templates with several messages per role
/// lose everything after the first.
pub fn from_messages(template: &RemoteTemplate) -> PromptFields {
    match template {
        RemoteTemplate::Chat(messages) => {
            let mut system = None;
            let mut user = None;

            for message in messages {
                match message.role {
                    MessageRole::System => {
                        if system.is_none() {
                            system = Some(message.template.clone());
                        }
                    }
                    MessageRole::Human => {
                        if user.is_none() {
                            user = Some(message.template.clone());
                        }
                    }
                }
            }

            PromptFields {
                system_prompt: system.unwrap_or_default(),
                user_prompt: user.unwrap_or_default(),
            }
        }
        RemoteTemplate::Completion(body) => PromptFields {
            system_prompt: body.clone(),
            user_prompt: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(system_prompt: &str, user_prompt: &str) -> PromptDefinition {
        PromptDefinition {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_messages_emits_system_then_human() {
        let def = definition("You are a PM.", "Bug: {input}");
        let template = to_messages(&def);

        match template {
            RemoteTemplate::Chat(messages) => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0].role, MessageRole::System);
                assert_eq!(messages[0].template, "You are a PM.");
                assert_eq!(messages[1].role, MessageRole::Human);
                assert_eq!(messages[1].template, "Bug: {input}");
            }
            RemoteTemplate::Completion(_) => panic!("expected a chat template"),
        }
    }

    #[test]
    fn test_to_messages_substitutes_default_placeholder() {
        let def = definition("You are a PM.", "");
        let template = to_messages(&def);

        match template {
            RemoteTemplate::Chat(messages) => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[1].template, DEFAULT_USER_TEMPLATE);
                assert!(messages[1].template.contains("{input}"));
            }
            RemoteTemplate::Completion(_) => panic!("expected a chat template"),
        }
    }

    #[test]
    fn test_round_trip_identity_on_canonical_fields() {
        let def = definition("You are a seasoned reviewer.", "Review this: {input}");
        let fields = from_messages(&to_messages(&def));

        assert_eq!(fields.system_prompt, def.system_prompt);
        assert_eq!(fields.user_prompt, def.user_prompt);
    }

    #[test]
    fn test_from_messages_keeps_first_of_each_role() {
        let template = RemoteTemplate::Chat(vec![
            MessageTemplate {
                role: MessageRole::System,
                template: "first system".to_string(),
            },
            MessageTemplate {
                role: MessageRole::Human,
                template: "first human".to_string(),
            },
            MessageTemplate {
                role: MessageRole::System,
                template: "second system".to_string(),
            },
            MessageTemplate {
                role: MessageRole::Human,
                template: "second human".to_string(),
            },
        ]);

        let fields = from_messages(&template);
        assert_eq!(fields.system_prompt, "first system");
        assert_eq!(fields.user_prompt, "first human");
    }

    #[test]
    fn test_from_messages_defaults_missing_roles_to_empty() {
        let template = RemoteTemplate::Chat(vec![MessageTemplate {
            role: MessageRole::Human,
            template: "{input}".to_string(),
        }]);

        let fields = from_messages(&template);
        assert_eq!(fields.system_prompt, "");
        assert_eq!(fields.user_prompt, "{input}");
    }

    #[test]
    fn test_completion_body_becomes_system_prompt() {
        let template = RemoteTemplate::Completion("Plain template body.".to_string());
        let fields = from_messages(&template);

        assert_eq!(fields.system_prompt, "Plain template body.");
        assert_eq!(fields.user_prompt, "");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(MessageRole::parse("system"), Some(MessageRole::System));
        assert_eq!(MessageRole::parse("Human"), Some(MessageRole::Human));
        assert_eq!(MessageRole::parse("user"), Some(MessageRole::Human));
        assert_eq!(MessageRole::parse("assistant"), None);
    }
}
