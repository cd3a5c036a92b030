//! Fixed-duration expiration for any session repository.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::error::Result;
use crate::repository::{SessionRepository, SharedRepository};
use crate::session::Session;

/// Wraps a repository so every session it creates or saves carries the same
/// max-inactive interval, whatever the caller set on it.
///
/// Lookups and deletes go straight to the delegate with the same arguments
/// and come back unchanged. The delegate's own state is only ever touched
/// through its [`SessionRepository`] methods.
pub struct FixedDurationExpirationSessionRepository {
    delegate: SharedRepository,
    expiration_duration: Duration,
}

impl FixedDurationExpirationSessionRepository {
    pub fn new(delegate: SharedRepository, expiration_duration: Duration) -> Self {
        Self {
            delegate,
            expiration_duration,
        }
    }

    /// The wrapped repository.
    pub fn delegate(&self) -> &SharedRepository {
        &self.delegate
    }

    pub fn expiration_duration(&self) -> Duration {
        self.expiration_duration
    }
}

#[async_trait]
impl SessionRepository for FixedDurationExpirationSessionRepository {
    async fn create_session(&self) -> Result<Session> {
        let mut session = self.delegate.create_session().await?;
        session.set_max_inactive_interval(self.expiration_duration);
        Ok(session)
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let mut session = session.clone();
        if session.max_inactive_interval() != self.expiration_duration {
            trace!(
                session_id = %session.id(),
                requested_secs = session.max_inactive_interval().as_secs(),
                expiration_secs = self.expiration_duration.as_secs(),
                "Overriding session expiration"
            );
        }
        session.set_max_inactive_interval(self.expiration_duration);
        self.delegate.save(&session).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Session>> {
        self.delegate.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.delegate.delete_by_id(id).await
    }
}
