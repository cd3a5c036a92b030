//! In-memory session repository with LRU eviction.

use std::num::NonZeroUsize;
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use chrono::Utc;
use lru::LruCache;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::config::RepositoryConfig;
use crate::error::Result;
use crate::repository::SessionRepository;
use crate::session::Session;

type Store = LruCache<String, Session>;

/// In-memory session repository.
///
/// Sessions are held in an LRU map bounded by
/// [`RepositoryConfig::max_sessions`]; once full, saving a new session evicts
/// the least recently used one. Expired sessions are removed when they are
/// looked up, by [`cleanup_expired`](Self::cleanup_expired), or by the
/// background task from [`spawn_cleanup_task`](Self::spawn_cleanup_task).
///
/// Clones share the same store.
#[derive(Clone)]
pub struct InMemorySessionRepository {
    inner: Arc<RwLock<Store>>,
    config: RepositoryConfig,
}

impl InMemorySessionRepository {
    pub fn new(config: RepositoryConfig) -> Self {
        let cap = NonZeroUsize::new(config.max_sessions).unwrap_or(NonZeroUsize::MIN);

        Self {
            inner: Arc::new(RwLock::new(LruCache::new(cap))),
            config,
        }
    }

    /// Get the repository configuration.
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Number of stored sessions, expired ones included until they are swept.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Check if a live session is stored, without touching LRU order.
    pub async fn contains(&self, id: &str) -> bool {
        let store = self.inner.read().await;
        store.peek(id).is_some_and(|s| !s.is_expired())
    }

    /// Remove all expired sessions and return how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        sweep(&self.inner).await
    }

    /// Start the periodic sweep if the config enables it.
    ///
    /// The task stops on its own once every clone of the repository is dropped.
    /// A zero interval is refused; sessions are then only removed on access.
    pub fn spawn_cleanup_task(&self) -> Option<JoinHandle<()>> {
        if !self.config.enable_cleanup_task {
            return None;
        }
        if self.config.cleanup_interval.is_zero() {
            warn!("Session cleanup interval is zero, not starting cleanup task");
            return None;
        }

        let store = Arc::downgrade(&self.inner);
        let period = self.config.cleanup_interval;
        Some(tokio::spawn(cleanup_loop(store, period)))
    }

    /// Get repository statistics.
    pub async fn stats(&self) -> RepositoryStats {
        let store = self.inner.read().await;
        let now = Utc::now();
        RepositoryStats {
            size: store.len(),
            capacity: store.cap().get(),
            expired: store.iter().filter(|(_, s)| s.is_expired_at(now)).count(),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new(RepositoryConfig::default())
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self) -> Result<Session> {
        Ok(Session::new().with_max_inactive_interval(self.config.default_max_inactive_interval))
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let mut store = self.inner.write().await;

        if let Some((evicted_id, _)) = store.push(session.id().to_string(), session.clone())
            && evicted_id != session.id()
        {
            debug!(session_id = %evicted_id, "Evicted LRU session to make room");
        }

        trace!(
            session_id = %session.id(),
            max_inactive_secs = session.max_inactive_interval().as_secs(),
            store_size = store.len(),
            "Session saved"
        );

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Session>> {
        let mut store = self.inner.write().await;
        let now = Utc::now();

        let expired = match store.peek(id) {
            None => {
                trace!(session_id = %id, "Session not found");
                return Ok(None);
            }
            Some(session) => session.is_expired_at(now),
        };

        if expired {
            debug!(session_id = %id, "Session expired, removing");
            store.pop(id);
            return Ok(None);
        }

        Ok(store.get_mut(id).map(|session| {
            session.set_last_accessed_time(now);
            session.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        if self.inner.write().await.pop(id).is_some() {
            debug!(session_id = %id, "Session deleted");
        }
        Ok(())
    }
}

async fn sweep(store: &RwLock<Store>) -> usize {
    let mut store = store.write().await;
    let now = Utc::now();

    let expired: Vec<String> = store
        .iter()
        .filter(|(_, s)| s.is_expired_at(now))
        .map(|(id, _)| id.clone())
        .collect();

    for id in &expired {
        store.pop(id);
    }

    if !expired.is_empty() {
        debug!(count = expired.len(), "Cleaned up expired sessions");
    }

    expired.len()
}

async fn cleanup_loop(store: Weak<RwLock<Store>>, period: std::time::Duration) {
    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let Some(strong) = store.upgrade() else {
            debug!("Session repository dropped, stopping cleanup task");
            break;
        };
        sweep(&strong).await;
    }
}

/// Repository statistics.
#[derive(Debug, Clone)]
pub struct RepositoryStats {
    /// Current number of stored sessions.
    pub size: usize,

    /// Maximum capacity.
    pub capacity: usize,

    /// Stored sessions that have expired but not yet been swept.
    pub expired: usize,
}
