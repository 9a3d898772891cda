//! The bot facade: configuration, session state, catalogs, command registry,
//! and the event dispatch logic driven by the platform client.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::commands::{Command, CommandRegistry};
use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::logger::{LogLevel, LogSink, Logger};
use crate::messages::{self, MessageCatalog};
use crate::platform::{
    ChannelInfo, ChannelKind, DisconnectEvent, Event, EventKind, IncomingMessage, PlatformClient,
};
use crate::preferences::PreferenceCatalog;
use crate::state::BotState;

/// State keys written by the core handlers.
pub mod state_keys {
    /// The resolved text channel the bot listens to; written by `on_ready`.
    pub const ACTIVE_TEXT_CHANNEL: &str = "active_text_channel";
    /// The voice channel marked active by the `join` command.
    pub const ACTIVE_VOICE_CHANNEL: &str = "active_voice_channel";
}

/// Facade lifecycle phases. `Disconnected` is terminal; there is no recovery
/// inside the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    AwaitingReady,
    Active,
    Disconnected,
}

/// The orchestrating object: holds config, catalogs, registry, state and the
/// platform client, and turns platform events into command dispatch.
pub struct MusicBot {
    config: BotConfig,
    client: Arc<dyn PlatformClient>,
    logger: Logger,
    messages: MessageCatalog,
    preferences: PreferenceCatalog,
    commands: CommandRegistry,
    state: BotState,
    phase: Phase,
}

impl MusicBot {
    /// Facade with the built-in catalogs and commands. `init` must be called
    /// before events are delivered.
    pub fn new(config: BotConfig, client: Arc<dyn PlatformClient>) -> Self {
        let logger = Logger::new(config.debug);
        Self {
            logger,
            config,
            client,
            messages: MessageCatalog::new(),
            preferences: PreferenceCatalog::new(),
            commands: CommandRegistry::defaults(),
            state: BotState::new(),
            phase: Phase::Uninitialized,
        }
    }

    /// Replaces the log sink (tests use a recording sink).
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.logger = Logger::with_sink(self.config.debug, sink);
        self
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn client(&self) -> &dyn PlatformClient {
        self.client.as_ref()
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    // --- catalogs ---

    /// The unfilled template for a message key.
    pub fn get_message(&self, key: &str) -> Result<&str> {
        self.messages.get(key)
    }

    /// The scalar value for a preference key.
    pub fn get_preference(&self, key: &str) -> Result<&Value> {
        self.preferences.get(key)
    }

    /// The configured command prefix.
    pub fn command_prefix(&self) -> Result<String> {
        self.preferences.command_prefix()
    }

    /// Fetches a template and fills its `{}` placeholders positionally.
    pub fn format_message(&self, key: &str, args: &[String]) -> Result<String> {
        let template = self.messages.get(key)?;
        Ok(messages::fill_template(template, args))
    }

    /// Overrides a message template.
    pub fn set_message(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.set(key, template);
    }

    /// Overrides a preference value.
    pub fn set_preference(&mut self, key: impl Into<String>, value: Value) {
        self.preferences.set(key, value);
    }

    /// Adds or replaces a command descriptor.
    pub fn register_command(&mut self, command: Arc<dyn Command>) {
        self.commands.insert(command);
    }

    // --- state ---

    /// Current session state. Read-only view contract: callers must not
    /// expect isolation from subsequent mutation.
    pub fn state(&self) -> &Map<String, Value> {
        self.state.get()
    }

    /// Shallow-merges `patch` into session state.
    pub fn set_state(&mut self, patch: Map<String, Value>) {
        self.state.set(patch);
    }

    /// Restores the construction-time state snapshot.
    pub fn reset_state(&mut self) {
        self.state.reset();
    }

    /// The resolved text channel stored by `on_ready`, if any.
    pub fn active_text_channel(&self) -> Option<ChannelInfo> {
        self.state
            .get()
            .get(state_keys::ACTIVE_TEXT_CHANNEL)
            .and_then(ChannelInfo::from_state_value)
    }

    /// The voice channel stored by the `join` command, if any.
    pub fn active_voice_channel(&self) -> Option<ChannelInfo> {
        self.state
            .get()
            .get(state_keys::ACTIVE_VOICE_CHANNEL)
            .and_then(ChannelInfo::from_state_value)
    }

    // --- logging ---

    /// Logs through the severity-routing logger with a timestamp label.
    pub fn log(&self, level: LogLevel, message: &str) {
        self.logger.log(level, message, || {
            format!("[{}]", Utc::now().format("%Y-%m-%d %H:%M:%S"))
        });
    }

    // --- handlers ---

    /// Builds the reply text for a recognized message key.
    ///
    /// Catalog or preference misses underneath a recognized key are wrapped
    /// into the same handler-level error as an unrecognized key.
    pub fn message_handler(&self, key: &str, message: &IncomingMessage) -> Result<String> {
        let build = || -> Result<String> {
            match key {
                messages::BOT_MENTIONED => {
                    let prefix = self.command_prefix()?;
                    self.format_message(key, &[message.author.mention(), prefix])
                }
                messages::UNKNOWN_COMMAND => {
                    let prefix = self.command_prefix()?;
                    self.format_message(key, &[prefix])
                }
                _ => Err(BotError::MessageHandler {
                    key: key.to_string(),
                }),
            }
        };

        build().map_err(|_| BotError::MessageHandler {
            key: key.to_string(),
        })
    }

    /// Direct dispatch by canonical command key. Distinct from alias
    /// matching: an unknown key here is a wiring error, not user input.
    pub async fn command_handler(
        &mut self,
        key: &str,
        args: &[&str],
        message: &IncomingMessage,
    ) -> Result<()> {
        let command = self
            .commands
            .get(key)
            .ok_or_else(|| BotError::CommandHandler {
                key: key.to_string(),
            })?;
        command.run(self, args, message).await
    }

    /// Sends `text` to the message's channel.
    pub async fn reply(&self, message: &IncomingMessage, text: &str) -> Result<()> {
        self.client.send_message(&message.channel, text).await
    }

    // --- events ---

    /// Dispatches one delivered platform event to its handler.
    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Ready => self.on_ready(),
            Event::Message(message) => self.on_message(&message).await,
            Event::Disconnect(event) => self.on_disconnect(&event),
        }
    }

    /// Resolves the configured server and text channel, stores the channel
    /// in state and moves to `Active`. The only transition into the
    /// operative phase.
    pub fn on_ready(&mut self) -> Result<()> {
        let server_id = self.config.server_id.clone().unwrap_or_default();
        let guild = self
            .client
            .find_guild(&server_id)
            .ok_or_else(|| BotError::Connection {
                server_id: server_id.clone(),
            })?;

        let channel_id = self.config.text_channel_id.clone().unwrap_or_default();
        let channel = guild
            .channels
            .iter()
            .find(|c| c.kind == ChannelKind::Text && c.id == channel_id)
            .cloned()
            .ok_or(BotError::ChannelLookup { channel_id })?;

        let mut patch = Map::new();
        patch.insert(
            state_keys::ACTIVE_TEXT_CHANNEL.to_string(),
            channel.to_state_value(),
        );
        self.set_state(patch);
        self.phase = Phase::Active;

        self.log(
            LogLevel::Info,
            &format!(
                "Connected to server '{}', listening in '#{}'.",
                guild.name, channel.name
            ),
        );
        Ok(())
    }

    /// Routes one incoming message: ignore, reply to a mention, dispatch a
    /// prefixed command, or do nothing for plain chat.
    pub async fn on_message(&mut self, message: &IncomingMessage) -> Result<()> {
        if message.author.id == self.client.current_user().id {
            self.log(LogLevel::Debug, "Ignoring own message.");
            return Ok(());
        }

        let active = match self.active_text_channel() {
            Some(active) => active,
            // No ready yet; nothing is active, so nothing to route.
            None => return Ok(()),
        };
        if message.channel.name != active.name {
            return Ok(());
        }

        if message.mentions_bot {
            let text = self.message_handler(messages::BOT_MENTIONED, message)?;
            return self.reply(message, &text).await;
        }

        let prefix = self.command_prefix()?;
        if let Some(rest) = message.content.strip_prefix(&prefix) {
            let mut tokens = rest.split_whitespace();
            let alias = tokens.next().unwrap_or("");
            let args: Vec<&str> = tokens.collect();

            match self.commands.find_by_alias(alias) {
                Some(key) => self.command_handler(key, &args, message).await?,
                None => {
                    let text = self.message_handler(messages::UNKNOWN_COMMAND, message)?;
                    self.reply(message, &text).await?;
                }
            }
        }

        Ok(())
    }

    /// Logs the disconnect reason and code, then fails. Terminal.
    pub fn on_disconnect(&mut self, event: &DisconnectEvent) -> Result<()> {
        self.log(
            LogLevel::Error,
            &format!(
                "Bot was disconnected from server.\nReason: {}\nCode: {}",
                event.reason, event.code
            ),
        );
        self.phase = Phase::Disconnected;
        Err(BotError::Disconnected)
    }

    /// Validates required config, registers the event subscriptions in the
    /// order ready, message, disconnect, then logs in.
    pub async fn init(&mut self) -> Result<()> {
        let token = self
            .config
            .token
            .clone()
            .ok_or(BotError::Config { field: "token" })?;
        if self.config.server_id.is_none() {
            return Err(BotError::Config { field: "serverId" });
        }
        if self.config.text_channel_id.is_none() {
            return Err(BotError::Config {
                field: "textChannelId",
            });
        }

        self.client.on(EventKind::Ready);
        self.client.on(EventKind::Message);
        self.client.on(EventKind::Disconnect);
        self.phase = Phase::AwaitingReady;

        self.client.login(&token).await
    }
}
