pub mod pages;
pub mod utility;

use tracing::debug;
use twilight_model::gateway::payload::incoming::{InteractionCreate, MessageCreate};

use rusty_core::Context;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::pagetest::META,
    // Add new commands here
];

/// Split a prefix command into its lowercase name and first argument.
fn parse_command(content: &str) -> Option<(String, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();
    let mut parts = content.split_whitespace();
    let cmd = parts.next()?.to_ascii_lowercase();
    Some((cmd, parts.next()))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, arg1)) = parse_command(&content) else {
        return Ok(());
    };

    match cmd.as_str() {
        "help" => utility::help::run(ctx, msg, arg1).await?,
        "pagetest" => utility::pagetest::run(ctx, msg, arg1).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

/// Forward component interactions to the paginator.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let outcome = ctx
        .paginator
        .handle_interaction(&ctx.http, &interaction)
        .await?;
    debug!(?outcome, "paginator interaction handled");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_first_argument() {
        assert_eq!(
            parse_command("!PageTest 3 extra"),
            Some(("pagetest".to_owned(), Some("3")))
        );
        assert_eq!(parse_command("  !help  "), Some(("help".to_owned(), None)));
    }

    #[test]
    fn ignores_plain_messages() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command("!"), None);
    }
}
