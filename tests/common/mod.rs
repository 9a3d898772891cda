//! Test doubles shared by the integration tests: a recording
//! [`PlatformClient`] and a recording [`LogSink`], plus fixture builders.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use musicbot::{
    BotConfig, ChannelInfo, ChannelKind, EventKind, Guild, IncomingMessage, LogSink, MusicBot,
    PlatformClient, Result, User,
};

/// The bot's own user id served by [`MockClient::current_user`].
pub const BOT_USER_ID: &str = "bot-1";

/// Mock platform client: records every `on`, `login` and `send_message`
/// call; guild lookups are served from a fixed list set up by the test.
pub struct MockClient {
    bot_user: User,
    guilds: Vec<Guild>,
    subscriptions: Mutex<Vec<EventKind>>,
    logins: Mutex<Vec<String>>,
    sent: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)] // not every test file uses every accessor
impl MockClient {
    pub fn new() -> Arc<Self> {
        Self::with_guilds(Vec::new())
    }

    pub fn with_guild(guild: Guild) -> Arc<Self> {
        Self::with_guilds(vec![guild])
    }

    pub fn with_guilds(guilds: Vec<Guild>) -> Arc<Self> {
        Arc::new(Self {
            bot_user: User {
                id: BOT_USER_ID.to_string(),
                name: "MusicBot".to_string(),
            },
            guilds,
            subscriptions: Mutex::new(Vec::new()),
            logins: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// Event kinds registered via `on`, in registration order.
    pub fn subscriptions(&self) -> Vec<EventKind> {
        self.subscriptions.lock().unwrap().clone()
    }

    /// Tokens passed to `login`, in call order.
    pub fn logins(&self) -> Vec<String> {
        self.logins.lock().unwrap().clone()
    }

    /// Messages sent, as (channel name, text) pairs.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformClient for MockClient {
    fn on(&self, event: EventKind) {
        self.subscriptions.lock().unwrap().push(event);
    }

    async fn login(&self, token: &str) -> Result<()> {
        self.logins.lock().unwrap().push(token.to_string());
        Ok(())
    }

    fn find_guild(&self, id: &str) -> Option<Guild> {
        self.guilds.iter().find(|g| g.id == id).cloned()
    }

    async fn send_message(&self, channel: &ChannelInfo, text: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((channel.name.clone(), text.to_string()));
        Ok(())
    }

    fn current_user(&self) -> User {
        self.bot_user.clone()
    }
}

/// Records every sink call as (sink name, label, message).
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<(&'static str, String, String)>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<(&'static str, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sink: &'static str, label: &str, message: &str) {
        self.calls
            .lock()
            .unwrap()
            .push((sink, label.to_string(), message.to_string()));
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, label: &str, message: &str) {
        self.record("debug", label, message);
    }
    fn info(&self, label: &str, message: &str) {
        self.record("info", label, message);
    }
    fn warn(&self, label: &str, message: &str) {
        self.record("warn", label, message);
    }
    fn error(&self, label: &str, message: &str) {
        self.record("error", label, message);
    }
    fn log(&self, label: &str, message: &str) {
        self.record("log", label, message);
    }
}

#[allow(dead_code)]
pub fn text_channel(id: &str, name: &str) -> ChannelInfo {
    ChannelInfo {
        id: id.to_string(),
        name: name.to_string(),
        kind: ChannelKind::Text,
    }
}

#[allow(dead_code)]
pub fn voice_channel(id: &str, name: &str) -> ChannelInfo {
    ChannelInfo {
        id: id.to_string(),
        name: name.to_string(),
        kind: ChannelKind::Voice,
    }
}

/// The fixture guild: one text channel the bot listens to and two voice
/// channels for `join`.
#[allow(dead_code)]
pub fn test_guild() -> Guild {
    Guild {
        id: "server-1".to_string(),
        name: "Test Server".to_string(),
        channels: vec![
            text_channel("chan-1", "test-channel"),
            voice_channel("chan-2", "General"),
            voice_channel("chan-3", "Music Room"),
        ],
    }
}

/// Config matching [`test_guild`].
#[allow(dead_code)]
pub fn test_config() -> BotConfig {
    BotConfig {
        token: Some("abc".to_string()),
        server_id: Some("server-1".to_string()),
        text_channel_id: Some("chan-1".to_string()),
        debug: false,
    }
}

#[allow(dead_code)]
pub fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("user-{}", id),
    }
}

/// Message from `author_id` in `channel`.
#[allow(dead_code)]
pub fn message_in(author_id: &str, channel: ChannelInfo, content: &str) -> IncomingMessage {
    IncomingMessage::new(user(author_id), channel, content)
}

/// Facade wired to a mock client that knows [`test_guild`].
#[allow(dead_code)]
pub fn bot_with_client() -> (MusicBot, Arc<MockClient>) {
    let client = MockClient::with_guild(test_guild());
    let bot = MusicBot::new(test_config(), client.clone());
    (bot, client)
}

/// Facade that has already gone through a successful `on_ready`.
#[allow(dead_code)]
pub fn active_bot() -> (MusicBot, Arc<MockClient>) {
    let (mut bot, client) = bot_with_client();
    bot.on_ready().expect("on_ready must succeed in fixture");
    (bot, client)
}
