#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use rusty_paginator::{MessageUpdate, NewSession, OutboundMessage, Responder};
use twilight_model::channel::message::{
    component::{Button, Component},
    embed::Embed,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Send(OutboundMessage),
    Update(MessageUpdate),
}

/// Records every outbound operation instead of talking to Discord.
pub struct RecordingResponder {
    default_id: String,
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingResponder {
    pub fn new(default_id: &str) -> Self {
        Self {
            default_id: default_id.to_owned(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(default_id: &str) -> Self {
        Self {
            fail: true,
            ..Self::new(default_id)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Call {
        self.calls().pop().expect("no outbound call recorded")
    }

    fn record(&self, call: Call) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            anyhow::bail!("transport down");
        }
        Ok(())
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    fn default_session_id(&self) -> String {
        self.default_id.clone()
    }

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        self.record(Call::Send(message))
    }

    async fn update(&self, update: MessageUpdate) -> anyhow::Result<()> {
        self.record(Call::Update(update))
    }
}

pub fn numbered_pages(page_count: usize) -> NewSession {
    NewSession::new(page_count, |page, embed| {
        Ok(embed.description(format!("entry {page}")).build())
    })
}

pub fn footer(embeds: &[Embed]) -> String {
    embeds
        .first()
        .and_then(|embed| embed.footer.as_ref())
        .map(|footer| footer.text.clone())
        .expect("embed footer")
}

pub fn buttons(components: &[Component]) -> Vec<Button> {
    components
        .iter()
        .flat_map(|component| match component {
            Component::ActionRow(row) => row.components.clone(),
            other => vec![other.clone()],
        })
        .filter_map(|component| match component {
            Component::Button(button) => Some(button),
            _ => None,
        })
        .collect()
}

/// Disabled flags in row order: first, back, stop, next, last.
pub fn disabled(components: &[Component]) -> Vec<bool> {
    buttons(components).iter().map(|b| b.disabled).collect()
}
