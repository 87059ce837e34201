//! Environment configuration for the bot process.

use std::env;
use std::time::Duration;

use anyhow::Context as _;
use rusty_paginator::PaginatorConfig;

/// Settings read from the process environment.
pub struct BotConfig {
    pub token: String,
    pub paginator: PaginatorConfig,
}

impl BotConfig {
    /// Read configuration from the environment (after `.env` is loaded).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN").context("DISCORD_TOKEN is not set")?;
        let mut paginator = PaginatorConfig::default();

        if let Some(prefix) = lookup("PAGINATOR_CUSTOM_ID_PREFIX") {
            anyhow::ensure!(
                !prefix.is_empty(),
                "PAGINATOR_CUSTOM_ID_PREFIX must not be empty"
            );
            paginator = paginator.with_custom_id_prefix(prefix);
        }

        if let Some(raw) = lookup("PAGINATOR_TIMEOUT_SECS") {
            paginator = paginator.with_timeout(parse_secs("PAGINATOR_TIMEOUT_SECS", &raw)?);
        }

        if let Some(raw) = lookup("PAGINATOR_CLEANUP_INTERVAL_SECS") {
            paginator = paginator
                .with_cleanup_interval(parse_secs("PAGINATOR_CLEANUP_INTERVAL_SECS", &raw)?);
        }

        if let Some(raw) = lookup("PAGINATOR_EMBED_COLOR") {
            let color = parse_color(&raw)
                .with_context(|| format!("PAGINATOR_EMBED_COLOR is not a hex color: {raw}"))?;
            paginator = paginator.with_embed_color(color);
        }

        Ok(Self { token, paginator })
    }
}

fn parse_secs(key: &str, raw: &str) -> anyhow::Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds"))?;
    anyhow::ensure!(secs > 0, "{key} must be greater than zero");
    Ok(Duration::from_secs(secs))
}

/// Parse `4c50c1`, `0x4c50c1` or `#4c50c1`.
fn parse_color(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix('#'))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16)
        .ok()
        .filter(|color| *color <= 0xff_ff_ff)
}
