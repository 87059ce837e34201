//! Shared store of active paginator sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::session::Session;

type SessionMap = HashMap<String, Session>;

/// Concurrency-safe map from session ID to [`Session`].
///
/// Cheap to clone; clones share the same sessions. Every operation holds the
/// lock for a bounded, non-awaiting critical section.
#[derive(Clone, Default)]
pub struct Registry {
    sessions: Arc<Mutex<SessionMap>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session, replacing and returning any session with the same ID.
    pub async fn insert(&self, session: Session) -> Option<Session> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.id().to_owned(), session)
    }

    /// Snapshot of the session stored under `id`.
    pub async fn lookup(&self, id: &str) -> Option<Session> {
        self.sessions.lock().await.get(id).cloned()
    }

    /// Remove the session stored under `id`, if any.
    pub async fn remove(&self, id: &str) -> Option<Session> {
        self.sessions.lock().await.remove(id)
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.sessions.lock().await.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Keep only sessions for which `keep` returns `true`.
    ///
    /// Returns the IDs of the removed sessions. Removal happens through
    /// `HashMap::retain`, so nothing is deleted from under a live iterator.
    pub async fn retain<F>(&self, mut keep: F) -> Vec<String>
    where
        F: FnMut(&Session) -> bool,
    {
        let mut removed = Vec::new();
        self.sessions.lock().await.retain(|id, session| {
            let kept = keep(session);
            if !kept {
                removed.push(id.clone());
            }
            kept
        });
        removed
    }

    /// Undo the insert of the session `id` with `generation`, putting back
    /// `replaced`. Does nothing if the entry has been replaced since.
    pub(crate) async fn rollback(&self, id: &str, generation: u64, replaced: Option<Session>) {
        let mut sessions = self.sessions.lock().await;
        if !sessions
            .get(id)
            .is_some_and(|current| current.generation() == generation)
        {
            return;
        }

        match replaced {
            Some(previous) => {
                sessions.insert(id.to_owned(), previous);
            }
            None => {
                sessions.remove(id);
            }
        }
    }

    /// Exclusive access for read-modify-write transitions.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, SessionMap> {
        self.sessions.lock().await
    }
}
