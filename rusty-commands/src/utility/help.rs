use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::pages::send_list_paginator;
use crate::{COMMANDS, CommandMeta};
use rusty_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 10;

/// Open a paginator over the command catalog, optionally filtered by category.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let category = arg1.map(str::to_ascii_lowercase);

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted) = category.as_deref()
        && !categories.contains(&wanted)
    {
        let out = format!(
            "Unknown category `{}`. Available categories: {}.",
            wanted,
            categories.join(", ")
        );
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    }

    let lines = help_lines(category.as_deref());

    send_list_paginator(
        &ctx,
        &msg,
        "Available Commands",
        lines,
        HELP_COMMANDS_PER_PAGE,
        0,
    )
    .await
}

fn help_lines(category: Option<&str>) -> Vec<String> {
    sorted_commands(category)
        .into_iter()
        .map(|cmd| format!("**{}** `{}` {}", cmd.category, cmd.usage, cmd.desc))
        .collect()
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| category.is_none_or(|wanted| cmd.category == wanted))
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}
