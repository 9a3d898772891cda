//! `help`: lists every registered command.

use async_trait::async_trait;

use super::{Command, HELP_COMMAND};
use crate::bot::MusicBot;
use crate::error::Result;
use crate::messages;
use crate::platform::IncomingMessage;
use crate::preferences;

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn key(&self) -> &'static str {
        HELP_COMMAND
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["help", "h"]
    }

    fn description(&self) -> &'static str {
        "Show this list of commands"
    }

    async fn run(
        &self,
        bot: &mut MusicBot,
        _args: &[&str],
        message: &IncomingMessage,
    ) -> Result<()> {
        let prefix = bot.command_prefix()?;
        let separator = bot
            .get_preference(preferences::HELP_ENTRY_SEPARATOR)?
            .as_str()
            .unwrap_or("\n")
            .to_string();

        let entries: Vec<String> = bot
            .commands()
            .iter_sorted()
            .iter()
            .map(|c| format!("`{}{}`: {}", prefix, c.key(), c.description()))
            .collect();

        let text = bot.format_message(messages::HELP_INTRO, &[entries.join(&separator)])?;
        bot.reply(message, &text).await
    }
}
