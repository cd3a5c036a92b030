//! Configuration types mapping to the TOML schema.
//!
//! Top-level config:
//! ```toml
//! [session]                # session repository settings
//! fixed_expiration_secs = 1800
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Top-level Config
// ─────────────────────────────────────────────────────────────────────────────

/// Root configuration structure.
///
/// All sections are optional so that partial configs (e.g., project-local
/// overrides) can be loaded and merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionkitConfig {
    /// Session repository configuration.
    pub session: Option<SessionConfig>,
}

impl SessionkitConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: SessionkitConfig = toml::from_str(toml_str)?;
        if let Some(ref session) = config.session {
            session.validate()?;
        }
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge another config on top of this one (other takes priority).
    pub fn merge(&mut self, other: SessionkitConfig) {
        if other.session.is_some() {
            self.session = other.session;
        }
    }

    /// The session section, or defaults when absent.
    pub fn session_or_default(&self) -> SessionConfig {
        self.session.clone().unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Default lifetime of a session that sees no activity (30 minutes).
pub const DEFAULT_MAX_INACTIVE_SECS: u64 = 1800;

/// Default maximum number of sessions held by the in-memory repository.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Default interval between expired-session sweeps.
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Session repository configuration.
///
/// ```toml
/// [session]
/// fixed_expiration_secs = 1800
/// default_max_inactive_secs = 1800
/// max_sessions = 10000
/// enable_cleanup_task = true
/// cleanup_interval_secs = 60
/// ```
///
/// Setting `fixed_expiration_secs` turns on fixed-duration expiration: every
/// session repository is wrapped so that saved sessions carry exactly that
/// lifetime, whatever they were created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed expiration applied to every saved session, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_expiration_secs: Option<u64>,
    /// Max-inactive interval given to newly created sessions, in seconds.
    pub default_max_inactive_secs: u64,
    /// Maximum number of sessions to keep in memory before LRU eviction.
    pub max_sessions: usize,
    /// Whether to sweep expired sessions periodically.
    pub enable_cleanup_task: bool,
    /// Interval in seconds between sweeps.
    pub cleanup_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fixed_expiration_secs: None,
            default_max_inactive_secs: DEFAULT_MAX_INACTIVE_SECS,
            max_sessions: DEFAULT_MAX_SESSIONS,
            enable_cleanup_task: true,
            cleanup_interval_secs: DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}

impl SessionConfig {
    /// The fixed expiration duration, if one is configured.
    pub fn fixed_expiration(&self) -> Option<Duration> {
        self.fixed_expiration_secs.map(Duration::from_secs)
    }

    /// Max-inactive interval for new sessions.
    pub fn default_max_inactive(&self) -> Duration {
        Duration::from_secs(self.default_max_inactive_secs)
    }

    /// Interval between expired-session sweeps.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }

    /// Reject values the repository cannot run with.
    ///
    /// A zero fixed expiration is allowed: it makes every saved session
    /// expire immediately.
    pub fn validate(&self) -> Result<()> {
        if self.max_sessions == 0 {
            return Err(ConfigError::Invalid {
                field: "session.max_sessions".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.enable_cleanup_task && self.cleanup_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "session.cleanup_interval_secs".to_string(),
                reason: "must be non-zero when the cleanup task is enabled".to_string(),
            });
        }
        Ok(())
    }
}
