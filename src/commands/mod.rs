//! Command registry and built-in commands.
//!
//! Each command is a [`Command`]: a canonical key, an ordered alias list, a
//! one-line description for `help`, and an async `run` that receives the
//! facade, the parsed args, and the originating message.

mod help;
mod join;
mod leave;
mod ping;

pub use help::HelpCommand;
pub use join::JoinCommand;
pub use leave::LeaveCommand;
pub use ping::PingCommand;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::bot::MusicBot;
use crate::error::Result;
use crate::platform::IncomingMessage;

/// Canonical command keys.
pub const HELP_COMMAND: &str = "help";
pub const PING_COMMAND: &str = "ping";
pub const JOIN_COMMAND: &str = "join";
pub const LEAVE_COMMAND: &str = "leave";

/// A dispatchable chat command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Canonical key used for direct dispatch.
    fn key(&self) -> &'static str;

    /// Aliases matched (exact string) against the first token of a prefixed
    /// message.
    fn aliases(&self) -> &'static [&'static str];

    /// One-line description shown by `help`.
    fn description(&self) -> &'static str;

    /// Executes the command. May mutate session state and send replies via
    /// the message's channel.
    async fn run(&self, bot: &mut MusicBot, args: &[&str], message: &IncomingMessage)
        -> Result<()>;
}

/// Canonical key to descriptor mapping; read-only after load apart from
/// explicit overrides.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registry with the built-in commands.
    pub fn defaults() -> Self {
        Self::new()
            .register(Arc::new(HelpCommand))
            .register(Arc::new(PingCommand))
            .register(Arc::new(JoinCommand))
            .register(Arc::new(LeaveCommand))
    }

    /// Adds or replaces a command under its canonical key.
    pub fn register(mut self, command: Arc<dyn Command>) -> Self {
        self.insert(command);
        self
    }

    /// Non-consuming form of [`CommandRegistry::register`].
    pub fn insert(&mut self, command: Arc<dyn Command>) {
        self.commands.insert(command.key(), command);
    }

    /// Direct lookup by canonical key.
    pub fn get(&self, key: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(key).cloned()
    }

    /// Alias match for user text. `None` degrades to the unknown-command
    /// reply rather than an error.
    pub fn find_by_alias(&self, token: &str) -> Option<&'static str> {
        self.commands
            .values()
            .find(|c| c.aliases().contains(&token))
            .map(|c| c.key())
    }

    /// Commands ordered by canonical key, for help output.
    pub fn iter_sorted(&self) -> Vec<Arc<dyn Command>> {
        let mut all: Vec<_> = self.commands.values().cloned().collect();
        all.sort_by_key(|c| c.key());
        all
    }
}
