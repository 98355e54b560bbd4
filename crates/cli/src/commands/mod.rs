//! Command handlers for the promptsync CLI.

pub mod pull;
pub mod push;

// Re-export command types for convenience
pub use pull::PullCommand;
pub use push::PushCommand;
