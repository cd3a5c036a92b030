//! Configuration for the in-memory session repository.

use std::time::Duration;

use sessionkit_config::SessionConfig;

/// Default maximum number of sessions to hold.
pub const DEFAULT_MAX_SESSIONS: usize = sessionkit_config::DEFAULT_MAX_SESSIONS;

/// Default max-inactive interval for new sessions (30 minutes).
pub const DEFAULT_MAX_INACTIVE_INTERVAL: Duration =
    Duration::from_secs(sessionkit_config::DEFAULT_MAX_INACTIVE_SECS);

/// Configuration for [`InMemorySessionRepository`](crate::InMemorySessionRepository).
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Maximum number of sessions to hold before LRU eviction.
    pub max_sessions: usize,

    /// Max-inactive interval given to sessions created by the repository.
    pub default_max_inactive_interval: Duration,

    /// Whether to run periodic cleanup of expired sessions.
    /// If false, expired sessions are only removed on access.
    pub enable_cleanup_task: bool,

    /// Interval for the cleanup task (if enabled).
    pub cleanup_interval: Duration,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            default_max_inactive_interval: DEFAULT_MAX_INACTIVE_INTERVAL,
            enable_cleanup_task: true,
            cleanup_interval: Duration::from_secs(60),
        }
    }
}

impl RepositoryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of sessions to hold.
    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = max;
        self
    }

    /// Set the max-inactive interval for newly created sessions.
    pub fn with_default_max_inactive_interval(mut self, interval: Duration) -> Self {
        self.default_max_inactive_interval = interval;
        self
    }

    /// Enable or disable the background cleanup task.
    pub fn with_cleanup_task(mut self, enabled: bool) -> Self {
        self.enable_cleanup_task = enabled;
        self
    }

    /// Set the cleanup interval.
    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }
}

impl From<&SessionConfig> for RepositoryConfig {
    fn from(config: &SessionConfig) -> Self {
        Self {
            max_sessions: config.max_sessions,
            default_max_inactive_interval: config.default_max_inactive(),
            enable_cleanup_task: config.enable_cleanup_task,
            cleanup_interval: config.cleanup_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RepositoryConfig::new()
            .with_max_sessions(5)
            .with_default_max_inactive_interval(Duration::from_secs(10))
            .with_cleanup_task(false)
            .with_cleanup_interval(Duration::from_secs(2));

        assert_eq!(config.max_sessions, 5);
        assert_eq!(config.default_max_inactive_interval, Duration::from_secs(10));
        assert!(!config.enable_cleanup_task);
        assert_eq!(config.cleanup_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_from_session_config() {
        let session = SessionConfig {
            fixed_expiration_secs: Some(60),
            default_max_inactive_secs: 120,
            max_sessions: 7,
            enable_cleanup_task: false,
            cleanup_interval_secs: 30,
        };

        let config = RepositoryConfig::from(&session);
        assert_eq!(config.max_sessions, 7);
        assert_eq!(config.default_max_inactive_interval, Duration::from_secs(120));
        assert!(!config.enable_cleanup_task);
        assert_eq!(config.cleanup_interval, Duration::from_secs(30));
    }
}
