//! Message catalog: symbolic keys to reply templates with positional `{}`
//! placeholders. Read-only after load, apart from explicit overrides.

use std::collections::HashMap;

use crate::error::{BotError, Result};

pub const BOT_MENTIONED: &str = "BOT_MENTIONED";
pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
pub const PING_RESPONSE: &str = "PING_RESPONSE";
pub const HELP_INTRO: &str = "HELP_INTRO";
pub const VOICE_CHANNEL_JOINED: &str = "VOICE_CHANNEL_JOINED";
pub const VOICE_CHANNEL_NOT_FOUND: &str = "VOICE_CHANNEL_NOT_FOUND";
pub const JOIN_NO_CHANNEL: &str = "JOIN_NO_CHANNEL";
pub const VOICE_CHANNEL_LEFT: &str = "VOICE_CHANNEL_LEFT";
pub const NOT_IN_VOICE_CHANNEL: &str = "NOT_IN_VOICE_CHANNEL";

/// Key to template mapping; lookup of an unknown key is fatal, not a silent
/// default.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Catalog with the built-in reply templates.
    pub fn new() -> Self {
        let defaults: &[(&str, &str)] = &[
            (
                BOT_MENTIONED,
                "Hey {}, you should try `{}` for a list of commands. :thumbsup:",
            ),
            (
                UNKNOWN_COMMAND,
                "Sorry, I don't know that one. Try `{}help` for a list of commands.",
            ),
            (PING_RESPONSE, "Pong! :ping_pong:"),
            (HELP_INTRO, "Here's what I can do:\n{}"),
            (VOICE_CHANNEL_JOINED, "Joined '{}'! :loud_sound:"),
            (
                VOICE_CHANNEL_NOT_FOUND,
                "I couldn't find a voice channel called '{}'.",
            ),
            (
                JOIN_NO_CHANNEL,
                "You need to tell me which voice channel to join, e.g. `{}join General`.",
            ),
            (VOICE_CHANNEL_LEFT, "Left '{}'. :wave:"),
            (NOT_IN_VOICE_CHANNEL, "I'm not in a voice channel right now."),
        ];

        let entries = defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// The unfilled template for `key`.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| BotError::MessageLookup {
                key: key.to_string(),
            })
    }

    /// Inserts or replaces a template (catalog override surface).
    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills each `{}` occurrence left-to-right with the corresponding
/// positional argument. Surplus placeholders are left as-is; surplus
/// arguments are ignored. Substituted text is never re-scanned.
pub fn fill_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
