//! Error types for the bot core.
//!
//! [`BotError`] is the single crate-wide taxonomy. Every variant is fatal at
//! the point raised; the core never retries internally. The deliberate no-op
//! branches of message handling (own message, wrong channel, plain chat) are
//! not errors.

use thiserror::Error;

/// Top-level error for the bot core.
#[derive(Error, Debug)]
pub enum BotError {
    /// Message catalog miss: the key is not in the catalog.
    #[error("Failed to get message with key '{key}'")]
    MessageLookup { key: String },

    /// Preference catalog miss: the key is not in the catalog.
    #[error("Failed to get preference with key '{key}'")]
    PreferenceLookup { key: String },

    /// `message_handler` was given a key it does not recognize, or its
    /// catalog lookups failed underneath it.
    #[error("Failed to handle message with key '{key}'")]
    MessageHandler { key: String },

    /// `command_handler` was given a canonical key with no registered command.
    #[error("Failed to handle command with key '{key}'")]
    CommandHandler { key: String },

    /// The configured server id could not be resolved on `ready`.
    #[error("Failed to connect to serverId '{server_id}'")]
    Connection { server_id: String },

    /// The configured text channel id is not among the resolved server's
    /// text channels.
    #[error("Failed to find textChannelId '{channel_id}'")]
    ChannelLookup { channel_id: String },

    /// The platform reported a disconnect. Terminal; the process is expected
    /// to exit or be restarted externally.
    #[error("Bot was disconnected from server.")]
    Disconnected,

    /// A required config field was missing at `init`.
    #[error("Failed to initialise: a '{field}' was not provided in the config!")]
    Config { field: &'static str },

    /// Transport-level failure surfaced by a platform client implementation.
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
