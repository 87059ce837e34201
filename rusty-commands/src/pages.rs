//! Page math and list paginators shared by commands.

use std::sync::Arc;

use rusty_core::Context;
use rusty_paginator::{ChannelResponder, NewSession};
use twilight_model::gateway::payload::incoming::MessageCreate;

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Return start/end indices for a zero-based page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_mul(safe_per_page).min(total_items);
    let end = (start + safe_per_page).min(total_items);
    (start, end)
}

/// Parse a one-based page argument into a zero-based index.
///
/// A missing argument means the first page; `0` and non-numbers are rejected.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)
            .map(|page| page - 1),
        None => Some(0),
    }
}

/// Bullet list for one page of `items`.
pub fn bulleted_page(items: &[String], per_page: usize, page: usize) -> String {
    let (start, end) = page_window(items.len(), per_page, page);
    format!("- {}", items[start..end].join("\n- "))
}

/// Open a paginator over `items`, owned by the message author, as a reply
/// to `msg`.
///
/// `items` must not be empty.
pub async fn send_list_paginator(
    ctx: &Context,
    msg: &MessageCreate,
    title: &str,
    items: Vec<String>,
    per_page: usize,
    start_page: usize,
) -> anyhow::Result<()> {
    let page_count = total_pages(items.len(), per_page);
    let items = Arc::new(items);
    let title = title.to_owned();

    let session = NewSession::new(page_count, move |page, embed| {
        Ok(embed
            .title(title.clone())
            .description(bulleted_page(&items, per_page, page))
            .validate()?
            .build())
    })
    .owner(msg.author.id)
    .expire_after_last_use(true)
    .start_page(start_page);

    let responder = ChannelResponder::new(&ctx.http, msg.channel_id, msg.id);
    ctx.paginator.create(&responder, session).await?;

    Ok(())
}
