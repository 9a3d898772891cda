//! Contract required of the external messaging-platform client, plus the
//! event and data types that cross it.
//!
//! The transport itself (wire protocol, login flow, voice playback) lives
//! outside this crate; [`PlatformClient`] is the seam an adapter implements.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Result;

/// Event kinds the facade subscribes to. Registration order is observable
/// and must be preserved by implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Ready,
    Message,
    Disconnect,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Ready => "ready",
            EventKind::Message => "message",
            EventKind::Disconnect => "disconnect",
        };
        f.write_str(name)
    }
}

/// A delivered platform event, dispatched through
/// [`crate::MusicBot::handle_event`].
#[derive(Debug, Clone)]
pub enum Event {
    Ready,
    Message(IncomingMessage),
    Disconnect(DisconnectEvent),
}

/// User identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    /// The platform's mention rendering of this user.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// Channel type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Text,
    Voice,
    Other,
}

/// A channel within a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub id: String,
    pub name: String,
    pub kind: ChannelKind,
}

impl ChannelInfo {
    /// JSON form stored in session state.
    pub fn to_state_value(&self) -> Value {
        json!({ "id": self.id, "name": self.name, "kind": self.kind })
    }

    /// Parses a state value written by [`ChannelInfo::to_state_value`].
    pub fn from_state_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// A resolved server: id, display name, channel list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub channels: Vec<ChannelInfo>,
}

/// One incoming chat message.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub author: User,
    pub channel: ChannelInfo,
    pub content: String,
    /// Whether the platform reports the bot was mentioned in the message.
    pub mentions_bot: bool,
    pub received_at: DateTime<Utc>,
}

impl IncomingMessage {
    /// Message with `mentions_bot = false`, received now.
    pub fn new(author: User, channel: ChannelInfo, content: impl Into<String>) -> Self {
        Self {
            author,
            channel,
            content: content.into(),
            mentions_bot: false,
            received_at: Utc::now(),
        }
    }
}

/// Disconnect notice from the platform.
#[derive(Debug, Clone)]
pub struct DisconnectEvent {
    pub reason: String,
    pub code: i64,
}

/// The opaque messaging-platform client the facade drives.
///
/// Implementations deliver subscribed events one at a time (single logical
/// thread of control); the core assumes no concurrent access to its state.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Registers interest in an event kind. Called once per kind by `init`,
    /// in the order ready, message, disconnect.
    fn on(&self, event: EventKind);

    /// Begins the session with the given token.
    async fn login(&self, token: &str) -> Result<()>;

    /// Resolves a server by id.
    fn find_guild(&self, id: &str) -> Option<Guild>;

    /// Sends text to a channel.
    async fn send_message(&self, channel: &ChannelInfo, text: &str) -> Result<()>;

    /// The bot's own identity, used to ignore its own messages.
    fn current_user(&self) -> User;
}
