//! Entry points for opening paginator sessions.

use std::sync::Arc;

use tokio::time::Instant;
use tracing::debug;
use twilight_model::channel::message::{component::Component, embed::Embed};

use crate::config::PaginatorConfig;
use crate::custom_id::max_session_id_len;
use crate::error::PaginatorError;
use crate::registry::Registry;
use crate::render::render_session;
use crate::respond::{MessageUpdate, OutboundMessage, Responder};
use crate::session::{NewSession, Session};
use crate::sweeper::{SweeperHandle, spawn_sweeper};

/// Owns the paginator configuration and the registry of active sessions.
///
/// Cheap to clone; clones share configuration and sessions.
#[derive(Clone)]
pub struct PaginatorManager {
    pub(crate) config: Arc<PaginatorConfig>,
    pub(crate) registry: Registry,
}

impl PaginatorManager {
    /// Manager with its own empty registry.
    pub fn new(config: PaginatorConfig) -> Self {
        Self::with_registry(config, Registry::new())
    }

    /// Manager over an existing registry.
    pub fn with_registry(config: PaginatorConfig, registry: Registry) -> Self {
        Self {
            config: Arc::new(config),
            registry,
        }
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Start evicting idle sessions on the configured interval.
    pub fn start_sweeper(&self) -> SweeperHandle {
        spawn_sweeper(
            self.registry.clone(),
            self.config.timeout,
            self.config.cleanup_interval,
        )
    }

    /// Register a session and send its first page as a new message.
    ///
    /// Returns the session ID. If the message cannot be sent the session is
    /// discarded and any session it replaced is put back.
    pub async fn create<R>(&self, responder: &R, new: NewSession) -> Result<String, PaginatorError>
    where
        R: Responder + ?Sized,
    {
        let (session, embed, components) = self.open(responder, new)?;
        let message = OutboundMessage::page(embed, components, session.is_ephemeral());

        self.deliver(session, responder.send(message)).await
    }

    /// Register a session and show its first page by editing the message the
    /// responder is bound to.
    pub async fn update<R>(&self, responder: &R, new: NewSession) -> Result<String, PaginatorError>
    where
        R: Responder + ?Sized,
    {
        let (session, embed, components) = self.open(responder, new)?;
        let update = MessageUpdate::page(embed, components);

        self.deliver(session, responder.update(update)).await
    }

    fn open<R>(
        &self,
        responder: &R,
        new: NewSession,
    ) -> Result<(Session, Embed, Vec<Component>), PaginatorError>
    where
        R: Responder + ?Sized,
    {
        let session = new.into_session(|| responder.default_session_id(), Instant::now())?;
        if session.id().len() > max_session_id_len(&self.config.custom_id_prefix) {
            return Err(PaginatorError::InvalidSessionId(session.id().to_owned()));
        }
        let (embed, components) = render_session(&session, &self.config)?;
        Ok((session, embed, components))
    }

    /// Register `session` before `outbound` runs so presses on the new
    /// message always find it.
    async fn deliver(
        &self,
        session: Session,
        outbound: impl Future<Output = anyhow::Result<()>>,
    ) -> Result<String, PaginatorError> {
        let session_id = session.id().to_owned();
        let generation = session.generation();
        let replaced = self.registry.insert(session).await;
        if replaced.is_some() {
            debug!(%session_id, "replaced existing paginator session");
        }

        if let Err(source) = outbound.await {
            self.registry
                .rollback(&session_id, generation, replaced)
                .await;
            return Err(PaginatorError::Transport(source));
        }

        debug!(%session_id, "paginator session opened");
        Ok(session_id)
    }
}
