//! `join`: marks a voice channel as active in session state.
//!
//! Actual audio connection is the platform client's business; the core only
//! tracks which channel the bot should be in.

use async_trait::async_trait;
use serde_json::Map;

use super::{Command, JOIN_COMMAND};
use crate::bot::{state_keys, MusicBot};
use crate::error::Result;
use crate::messages;
use crate::platform::{ChannelKind, IncomingMessage};

pub struct JoinCommand;

#[async_trait]
impl Command for JoinCommand {
    fn key(&self) -> &'static str {
        JOIN_COMMAND
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["join", "summon"]
    }

    fn description(&self) -> &'static str {
        "Join a voice channel by name"
    }

    async fn run(&self, bot: &mut MusicBot, args: &[&str], message: &IncomingMessage) -> Result<()> {
        if args.is_empty() {
            let prefix = bot.command_prefix()?;
            let text = bot.format_message(messages::JOIN_NO_CHANNEL, &[prefix])?;
            return bot.reply(message, &text).await;
        }

        let wanted = args.join(" ");
        let server_id = bot.config().server_id.clone().unwrap_or_default();
        let channel = bot.client().find_guild(&server_id).and_then(|guild| {
            guild
                .channels
                .into_iter()
                .find(|c| c.kind == ChannelKind::Voice && c.name == wanted)
        });

        match channel {
            Some(channel) => {
                let text =
                    bot.format_message(messages::VOICE_CHANNEL_JOINED, &[channel.name.clone()])?;

                let mut patch = Map::new();
                patch.insert(
                    state_keys::ACTIVE_VOICE_CHANNEL.to_string(),
                    channel.to_state_value(),
                );
                bot.set_state(patch);

                bot.reply(message, &text).await
            }
            None => {
                let text = bot.format_message(messages::VOICE_CHANNEL_NOT_FOUND, &[wanted])?;
                bot.reply(message, &text).await
            }
        }
    }
}
