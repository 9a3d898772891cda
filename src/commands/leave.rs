//! `leave`: clears the active voice channel from session state.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Command, LEAVE_COMMAND};
use crate::bot::{state_keys, MusicBot};
use crate::error::Result;
use crate::messages;
use crate::platform::IncomingMessage;

pub struct LeaveCommand;

#[async_trait]
impl Command for LeaveCommand {
    fn key(&self) -> &'static str {
        LEAVE_COMMAND
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["leave", "part"]
    }

    fn description(&self) -> &'static str {
        "Leave the active voice channel"
    }

    async fn run(
        &self,
        bot: &mut MusicBot,
        _args: &[&str],
        message: &IncomingMessage,
    ) -> Result<()> {
        match bot.active_voice_channel() {
            Some(channel) => {
                let text =
                    bot.format_message(messages::VOICE_CHANNEL_LEFT, &[channel.name.clone()])?;

                // Shallow merge cannot remove a key; null it out instead.
                let mut patch = Map::new();
                patch.insert(state_keys::ACTIVE_VOICE_CHANNEL.to_string(), Value::Null);
                bot.set_state(patch);

                bot.reply(message, &text).await
            }
            None => {
                let text = bot.get_message(messages::NOT_IN_VOICE_CHANNEL)?.to_string();
                bot.reply(message, &text).await
            }
        }
    }
}
