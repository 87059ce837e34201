use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::pages::{parse_one_based_page, send_list_paginator, total_pages};
use rusty_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "pagetest",
    desc: "Open a sample button paginator.",
    category: "utility",
    usage: "!pagetest [page]",
};

const ITEMS_PER_PAGE: usize = 5;

/// Open a paginator over generated sample items.
///
/// Inputs:
/// - optional page number: `!pagetest [page]`.
///
/// Error behavior:
/// - returns usage text on invalid page input.
/// - returns bounds text when the requested page is out of range.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let items = build_test_items();
    let total = total_pages(items.len(), ITEMS_PER_PAGE);

    let Some(requested_page) = parse_one_based_page(arg1) else {
        let usage = format!("Usage: `{}` (page starts at 1)", META.usage);
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    if requested_page >= total {
        let out = format!(
            "Page {} does not exist. Available pages: 1-{}.",
            requested_page + 1,
            total
        );
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    }

    send_list_paginator(
        &ctx,
        &msg,
        "Pagination Test",
        items,
        ITEMS_PER_PAGE,
        requested_page,
    )
    .await
}

fn build_test_items() -> Vec<String> {
    (1..=24)
        .map(|index| format!("Sample pagination item #{index}"))
        .collect()
}
