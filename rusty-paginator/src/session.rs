//! Paginator session state and the page cursor transitions.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;
use twilight_model::{
    channel::message::embed::Embed,
    id::{Id, marker::UserMarker},
};
use twilight_util::builder::embed::EmbedBuilder;

use crate::custom_id::{Action, is_valid_session_id};
use crate::error::PaginatorError;

/// Caller-supplied page renderer.
///
/// Receives the zero-based page index and a builder already carrying the
/// paginator color and page footer.
pub type PageRenderer = Arc<dyn Fn(usize, EmbedBuilder) -> anyhow::Result<Embed> + Send + Sync>;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Parameters for opening a paginator session.
pub struct NewSession {
    renderer: PageRenderer,
    page_count: usize,
    id: Option<String>,
    owner: Option<Id<UserMarker>>,
    expire_after_last_use: bool,
    ephemeral: bool,
    start_page: usize,
}

impl NewSession {
    pub fn new<F>(page_count: usize, renderer: F) -> Self
    where
        F: Fn(usize, EmbedBuilder) -> anyhow::Result<Embed> + Send + Sync + 'static,
    {
        Self {
            renderer: Arc::new(renderer),
            page_count,
            id: None,
            owner: None,
            expire_after_last_use: false,
            ephemeral: false,
            start_page: 0,
        }
    }

    /// Use an explicit session ID instead of the responder's default.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Restrict interaction to a single user.
    pub fn owner(mut self, owner: Id<UserMarker>) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Measure the idle timeout from the last accepted press instead of creation.
    pub fn expire_after_last_use(mut self, enabled: bool) -> Self {
        self.expire_after_last_use = enabled;
        self
    }

    /// Send the first message so only the invoking user sees it.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Zero-based page shown first. Clamped into range.
    pub fn start_page(mut self, page: usize) -> Self {
        self.start_page = page;
        self
    }

    pub(crate) fn into_session(
        self,
        default_id: impl FnOnce() -> String,
        now: Instant,
    ) -> Result<Session, PaginatorError> {
        if self.page_count == 0 {
            return Err(PaginatorError::NoPages);
        }

        let id = self.id.unwrap_or_else(default_id);
        if !is_valid_session_id(&id) {
            return Err(PaginatorError::InvalidSessionId(id));
        }

        Ok(Session {
            id,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            renderer: self.renderer,
            page_count: self.page_count,
            current_page: self.start_page.min(self.page_count - 1),
            owner: self.owner,
            created_at: now,
            last_activity_at: now,
            expire_after_last_use: self.expire_after_last_use,
            ephemeral: self.ephemeral,
        })
    }
}

/// One active paginator.
///
/// `current_page` is always below `page_count`; `back` and `next` clamp at
/// the edges so a stale message cannot move the cursor out of range.
#[derive(Clone)]
pub struct Session {
    id: String,
    /// Distinguishes sessions that reuse the same ID.
    generation: u64,
    renderer: PageRenderer,
    page_count: usize,
    current_page: usize,
    owner: Option<Id<UserMarker>>,
    created_at: Instant,
    last_activity_at: Instant,
    expire_after_last_use: bool,
    ephemeral: bool,
}

impl Session {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn owner(&self) -> Option<Id<UserMarker>> {
        self.owner
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn last_activity_at(&self) -> Instant {
        self.last_activity_at
    }

    pub fn expires_after_last_use(&self) -> bool {
        self.expire_after_last_use
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 >= self.page_count
    }

    /// Whether `actor` may press this paginator's buttons.
    pub fn authorizes(&self, actor: Id<UserMarker>) -> bool {
        self.owner.is_none_or(|owner| owner == actor)
    }

    /// Timestamp the idle timeout is measured from.
    pub fn activity_reference(&self) -> Instant {
        if self.expire_after_last_use {
            self.last_activity_at
        } else {
            self.created_at
        }
    }

    /// Whether the session has been idle for longer than `timeout` at `now`.
    pub fn is_idle(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.activity_reference()) > timeout
    }

    /// Run the page renderer for the current page.
    pub fn render_page(&self, embed: EmbedBuilder) -> anyhow::Result<Embed> {
        (self.renderer)(self.current_page, embed)
    }

    /// Move the cursor for a navigation action and return the new page.
    ///
    /// `Stop` leaves the cursor untouched; removal is the router's job.
    pub(crate) fn apply(&mut self, action: Action) -> usize {
        let last = self.page_count - 1;
        self.current_page = match action {
            Action::First => 0,
            Action::Back => self.current_page.saturating_sub(1),
            Action::Next => (self.current_page + 1).min(last),
            Action::Last => last,
            Action::Stop => self.current_page,
        };
        self.current_page
    }

    pub(crate) fn touch(&mut self, now: Instant) {
        self.last_activity_at = now;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("page_count", &self.page_count)
            .field("current_page", &self.current_page)
            .field("owner", &self.owner)
            .field("created_at", &self.created_at)
            .field("last_activity_at", &self.last_activity_at)
            .field("expire_after_last_use", &self.expire_after_last_use)
            .field("ephemeral", &self.ephemeral)
            .finish_non_exhaustive()
    }
}
