//! # musicbot
//!
//! Core of a Discord-style music bot: message and preference catalogs,
//! command registry, session state, and the event-dispatch facade
//! [`MusicBot`]. The messaging transport is an external collaborator behind
//! [`PlatformClient`]; this crate owns only routing, state, and reply text.

pub mod bot;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod messages;
pub mod platform;
pub mod preferences;
pub mod state;

pub use bot::{state_keys, MusicBot, Phase};
pub use commands::{Command, CommandRegistry};
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use logger::{init_tracing, LogLevel, LogSink, Logger, TracingSink};
pub use messages::MessageCatalog;
pub use platform::{
    ChannelInfo, ChannelKind, DisconnectEvent, Event, EventKind, Guild, IncomingMessage,
    PlatformClient, User,
};
pub use preferences::PreferenceCatalog;
pub use state::BotState;
