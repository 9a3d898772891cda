//! `ping`: liveness check.

use async_trait::async_trait;

use super::{Command, PING_COMMAND};
use crate::bot::MusicBot;
use crate::error::Result;
use crate::messages;
use crate::platform::IncomingMessage;

pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn key(&self) -> &'static str {
        PING_COMMAND
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ping"]
    }

    fn description(&self) -> &'static str {
        "Check that I'm alive"
    }

    async fn run(
        &self,
        bot: &mut MusicBot,
        _args: &[&str],
        message: &IncomingMessage,
    ) -> Result<()> {
        let text = bot.get_message(messages::PING_RESPONSE)?.to_string();
        bot.reply(message, &text).await
    }
}
