//! Session records.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_INACTIVE_INTERVAL;

/// A session record keyed by id.
///
/// A session expires once `max_inactive_interval` has passed since it was
/// last accessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: String,
    creation_time: DateTime<Utc>,
    last_accessed_time: DateTime<Utc>,
    max_inactive_interval: Duration,
    attributes: HashMap<String, serde_json::Value>,
}

impl Session {
    /// Create a session with a random id and the default max-inactive interval.
    pub fn new() -> Self {
        Self::with_id(generate_id())
    }

    /// Create a session with a specific id.
    pub fn with_id(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            creation_time: now,
            last_accessed_time: now,
            max_inactive_interval: DEFAULT_MAX_INACTIVE_INTERVAL,
            attributes: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the id with a freshly generated one and return it.
    pub fn change_session_id(&mut self) -> String {
        self.id = generate_id();
        self.id.clone()
    }

    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    pub fn last_accessed_time(&self) -> DateTime<Utc> {
        self.last_accessed_time
    }

    pub fn set_last_accessed_time(&mut self, at: DateTime<Utc>) {
        self.last_accessed_time = at;
    }

    pub fn max_inactive_interval(&self) -> Duration {
        self.max_inactive_interval
    }

    pub fn set_max_inactive_interval(&mut self, interval: Duration) {
        self.max_inactive_interval = interval;
    }

    /// Builder form of [`set_max_inactive_interval`](Self::set_max_inactive_interval).
    pub fn with_max_inactive_interval(mut self, interval: Duration) -> Self {
        self.max_inactive_interval = interval;
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.attributes.insert(name.into(), value);
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<serde_json::Value> {
        self.attributes.remove(name)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// When the session expires, or `None` if the interval is too large to represent.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let interval = TimeDelta::from_std(self.max_inactive_interval).ok()?;
        self.last_accessed_time.checked_add_signed(interval)
    }

    /// Whether the session is expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
