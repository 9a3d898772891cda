//! Bot configuration. Loaded from env; required fields are checked at
//! `init` time, not here, so construction never fails.

use std::env;

/// Immutable construction-time configuration.
///
/// No defaults are invented for `token`, `server_id` or `text_channel_id`;
/// their absence is a fatal precondition reported by [`crate::MusicBot::init`].
#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    /// Platform login token (`BOT_TOKEN`).
    pub token: Option<String>,
    /// Id of the single server the bot operates in (`SERVER_ID`).
    pub server_id: Option<String>,
    /// Id of the text channel the bot listens to (`TEXT_CHANNEL_ID`).
    pub text_channel_id: Option<String>,
    /// Enables debug-level log output (`DEBUG`, default false).
    pub debug: bool,
}

impl BotConfig {
    /// Loads from environment variables: `BOT_TOKEN`, `SERVER_ID`,
    /// `TEXT_CHANNEL_ID`, `DEBUG` (`1` or `true`). Load `.env` before
    /// calling if you use one.
    pub fn from_env() -> Self {
        Self {
            token: env::var("BOT_TOKEN").ok(),
            server_id: env::var("SERVER_ID").ok(),
            text_channel_id: env::var("TEXT_CHANNEL_ID").ok(),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
