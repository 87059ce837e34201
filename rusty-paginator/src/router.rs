//! Routes paginator button presses to their sessions.

use tokio::time::Instant;
use tracing::{debug, error};
use twilight_http::Client;
use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::InteractionCreate,
    id::{Id, marker::UserMarker},
};

use crate::custom_id::{Action, parse_custom_id};
use crate::error::PaginatorError;
use crate::manager::PaginatorManager;
use crate::render::{build_nav_components, render_session};
use crate::respond::{InteractionResponder, MessageUpdate, OutboundMessage, Responder};
use crate::session::Session;

/// What the router did with a component interaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouteOutcome {
    /// The custom ID belongs to another handler.
    Ignored,
    /// No session was registered under the ID; the buttons were cleared.
    Expired,
    /// The actor does not own the session; a denial was sent.
    Denied,
    /// The cursor moved (or stayed at an edge) and the page was re-rendered.
    Navigated { page: usize },
    /// The session was removed and the buttons were cleared.
    Stopped,
}

enum Step {
    Expired,
    Denied,
    Stopped,
    Render(Session),
}

impl PaginatorManager {
    /// Handle a twilight interaction if it is a press on one of this
    /// manager's buttons.
    pub async fn handle_interaction(
        &self,
        http: &Client,
        interaction: &InteractionCreate,
    ) -> Result<RouteOutcome, PaginatorError> {
        let Some(InteractionData::MessageComponent(component)) = interaction.data.as_ref() else {
            return Ok(RouteOutcome::Ignored);
        };

        let Some(actor) = interaction.author_id() else {
            debug!(
                custom_id = %component.custom_id,
                "component interaction without an author"
            );
            return Ok(RouteOutcome::Ignored);
        };

        let responder = InteractionResponder::new(http, interaction);
        self.handle_component(&component.custom_id, actor, &responder)
            .await
    }

    /// Apply a button press identified by `custom_id` on behalf of `actor`.
    ///
    /// Exactly one outbound operation is issued for every press that is not
    /// ignored. Delivery and rendering failures are logged and do not undo
    /// the committed transition. Only a malformed custom ID under this
    /// manager's prefix is returned as an error.
    pub async fn handle_component<R>(
        &self,
        custom_id: &str,
        actor: Id<UserMarker>,
        responder: &R,
    ) -> Result<RouteOutcome, PaginatorError>
    where
        R: Responder + ?Sized,
    {
        let parsed = match parse_custom_id(custom_id, &self.config.custom_id_prefix) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Ok(RouteOutcome::Ignored),
            Err(source) => {
                error!(%source, custom_id, "rejected paginator custom ID");
                return Err(source);
            }
        };
        let session_id = parsed.session_id.as_str();

        let step = self.transition(session_id, parsed.action, actor).await;

        match step {
            Step::Expired => {
                debug!(session_id, "press on expired paginator");
                self.clear_components(session_id, responder).await;
                Ok(RouteOutcome::Expired)
            }
            Step::Denied => {
                let denial = OutboundMessage::ephemeral_text(self.config.not_owner_message.clone());
                if let Err(source) = responder.send(denial).await {
                    error!(?source, session_id, "failed to send paginator denial");
                }
                Ok(RouteOutcome::Denied)
            }
            Step::Stopped => {
                debug!(session_id, "paginator stopped");
                self.clear_components(session_id, responder).await;
                Ok(RouteOutcome::Stopped)
            }
            Step::Render(session) => {
                let page = session.current_page();
                let update = match render_session(&session, &self.config) {
                    Ok((embed, components)) => MessageUpdate::page(embed, components),
                    Err(source) => {
                        error!(%source, session_id, page, "failed to render paginator page");
                        // Keep the old page but still acknowledge the press.
                        MessageUpdate {
                            embeds: None,
                            components: Some(build_nav_components(&session, &self.config)),
                        }
                    }
                };
                if let Err(source) = responder.update(update).await {
                    error!(?source, session_id, "failed to update paginator message");
                }
                Ok(RouteOutcome::Navigated { page })
            }
        }
    }

    /// Authorize and apply `action` under the registry lock.
    async fn transition(&self, session_id: &str, action: Action, actor: Id<UserMarker>) -> Step {
        let mut sessions = self.registry.lock().await;

        let Some(session) = sessions.get_mut(session_id) else {
            return Step::Expired;
        };

        if !session.authorizes(actor) {
            return Step::Denied;
        }

        if action == Action::Stop {
            sessions.remove(session_id);
            return Step::Stopped;
        }

        session.apply(action);
        if session.expires_after_last_use() {
            session.touch(Instant::now());
        }

        Step::Render(session.clone())
    }

    async fn clear_components<R>(&self, session_id: &str, responder: &R)
    where
        R: Responder + ?Sized,
    {
        if let Err(source) = responder.update(MessageUpdate::clear_components()).await {
            error!(?source, session_id, "failed to clear paginator buttons");
        }
    }
}
