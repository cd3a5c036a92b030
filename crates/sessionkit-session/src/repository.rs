//! Session repository trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::session::Session;

/// Storage for sessions keyed by id.
///
/// Implementations provide different storage backends; the crate ships
/// [`InMemorySessionRepository`](crate::InMemorySessionRepository) and the
/// [`FixedDurationExpirationSessionRepository`](crate::FixedDurationExpirationSessionRepository)
/// decorator.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a new session. The session is not stored until it is saved.
    async fn create_session(&self) -> Result<Session>;

    /// Store a session, replacing any previous version with the same id.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Find a session by id. Expired sessions are reported as `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Session>>;

    /// Delete a session by id. Unknown ids are not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Find a session by id, failing with [`Error::NotFound`] when absent.
    async fn get(&self, id: &str) -> Result<Session> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

/// A repository that can be shared across threads.
pub type SharedRepository = Arc<dyn SessionRepository>;
