//! Outbound message operations and their twilight implementations.

use async_trait::async_trait;
use tracing::debug;
use twilight_http::Client;
use twilight_model::{
    channel::message::{MessageFlags, component::Component, embed::Embed},
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};
use twilight_util::builder::InteractionResponseDataBuilder;

/// A new message: a paginator page or a plain notice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutboundMessage {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub components: Vec<Component>,
    /// Only visible to the user who triggered the interaction.
    pub ephemeral: bool,
}

impl OutboundMessage {
    /// Paginator page with its control row.
    pub fn page(embed: Embed, components: Vec<Component>, ephemeral: bool) -> Self {
        Self {
            content: None,
            embeds: vec![embed],
            components,
            ephemeral,
        }
    }

    /// Text-only message visible to the acting user alone.
    pub fn ephemeral_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: true,
            ..Self::default()
        }
    }
}

/// In-place edit of an existing message. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageUpdate {
    pub embeds: Option<Vec<Embed>>,
    pub components: Option<Vec<Component>>,
}

impl MessageUpdate {
    /// Replace the page and its control row.
    pub fn page(embed: Embed, components: Vec<Component>) -> Self {
        Self {
            embeds: Some(vec![embed]),
            components: Some(components),
        }
    }

    /// Strip every component while keeping the current page.
    pub fn clear_components() -> Self {
        Self {
            embeds: None,
            components: Some(Vec::new()),
        }
    }
}

/// Sends and edits messages for one triggering event.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Session ID used when the caller does not supply one.
    fn default_session_id(&self) -> String;

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()>;

    async fn update(&self, update: MessageUpdate) -> anyhow::Result<()>;
}

/// Where an interaction reply is delivered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ReplyTarget {
    /// Create the interaction response with this callback type.
    NewResponse(InteractionResponseType),
    /// Edit the response of an interaction that was already acknowledged.
    OriginalResponse,
}

fn reply_target(acknowledged: bool, kind: InteractionResponseType) -> ReplyTarget {
    if acknowledged {
        ReplyTarget::OriginalResponse
    } else {
        ReplyTarget::NewResponse(kind)
    }
}

fn send_data(message: OutboundMessage) -> InteractionResponseDataBuilder {
    let mut data = InteractionResponseDataBuilder::new()
        .embeds(message.embeds)
        .components(message.components);
    if let Some(content) = message.content {
        data = data.content(content);
    }
    if message.ephemeral {
        data = data.flags(MessageFlags::EPHEMERAL);
    }
    data
}

fn update_data(update: MessageUpdate) -> InteractionResponseDataBuilder {
    let mut data = InteractionResponseDataBuilder::new();
    if let Some(embeds) = update.embeds {
        data = data.embeds(embeds);
    }
    if let Some(components) = update.components {
        data = data.components(components);
    }
    data
}

/// Responds through the interaction endpoint of a single interaction.
///
/// The bot's component presses always arrive unacknowledged. The
/// [`acknowledged`](Self::acknowledged) mode is for library callers that
/// defer a slash command before opening a paginator.
pub struct InteractionResponder<'a> {
    http: &'a Client,
    interaction: &'a InteractionCreate,
    acknowledged: bool,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(http: &'a Client, interaction: &'a InteractionCreate) -> Self {
        Self {
            http,
            interaction,
            acknowledged: false,
        }
    }

    /// Mark the interaction as already acknowledged (deferred).
    ///
    /// Sends and updates then edit the original response instead of creating one.
    pub fn acknowledged(mut self, acknowledged: bool) -> Self {
        self.acknowledged = acknowledged;
        self
    }

    async fn create_response(
        &self,
        kind: InteractionResponseType,
        data: InteractionResponseDataBuilder,
    ) -> anyhow::Result<()> {
        let response = InteractionResponse {
            kind,
            data: Some(data.build()),
        };

        self.http
            .interaction(self.interaction.application_id)
            .create_response(self.interaction.id, &self.interaction.token, &response)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    fn default_session_id(&self) -> String {
        self.interaction.id.get().to_string()
    }

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        match reply_target(
            self.acknowledged,
            InteractionResponseType::ChannelMessageWithSource,
        ) {
            ReplyTarget::OriginalResponse => {
                let client = self.http.interaction(self.interaction.application_id);
                let mut request = client
                    .update_response(&self.interaction.token)
                    .embeds(Some(message.embeds.as_slice()))
                    .components(Some(message.components.as_slice()));
                if let Some(content) = message.content.as_deref() {
                    request = request.content(Some(content));
                }
                request.await?;
                Ok(())
            }
            ReplyTarget::NewResponse(kind) => {
                self.create_response(kind, send_data(message)).await
            }
        }
    }

    async fn update(&self, update: MessageUpdate) -> anyhow::Result<()> {
        match reply_target(self.acknowledged, InteractionResponseType::UpdateMessage) {
            ReplyTarget::OriginalResponse => {
                self.http
                    .interaction(self.interaction.application_id)
                    .update_response(&self.interaction.token)
                    .embeds(update.embeds.as_deref())
                    .components(update.components.as_deref())
                    .await?;
                Ok(())
            }
            ReplyTarget::NewResponse(kind) => {
                self.create_response(kind, update_data(update)).await
            }
        }
    }
}

/// Responds in a channel to a prefix command message.
///
/// Channel messages cannot be ephemeral and can only be edited later through
/// the component interactions they receive.
pub struct ChannelResponder<'a> {
    http: &'a Client,
    channel_id: Id<ChannelMarker>,
    origin_id: Id<MessageMarker>,
}

impl<'a> ChannelResponder<'a> {
    pub fn new(
        http: &'a Client,
        channel_id: Id<ChannelMarker>,
        origin_id: Id<MessageMarker>,
    ) -> Self {
        Self {
            http,
            channel_id,
            origin_id,
        }
    }
}

#[async_trait]
impl Responder for ChannelResponder<'_> {
    fn default_session_id(&self) -> String {
        self.origin_id.get().to_string()
    }

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        if message.ephemeral {
            debug!(
                channel_id = self.channel_id.get(),
                "ephemeral flag ignored for channel message"
            );
        }

        let mut request = self
            .http
            .create_message(self.channel_id)
            .reply(self.origin_id)
            .embeds(&message.embeds)
            .components(&message.components);
        if let Some(content) = message.content.as_deref() {
            request = request.content(content);
        }
        request.await?;

        Ok(())
    }

    async fn update(&self, _update: MessageUpdate) -> anyhow::Result<()> {
        anyhow::bail!("channel messages are only updated through component interactions")
    }
}
