//! Component post-processing hook and the fixed-duration expiration installer.
//!
//! A host that manages components hands each one to its registered
//! [`ComponentPostProcessor`]s once it has been initialized, and keeps
//! whatever comes back in place of the original.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use sessionkit_config::SessionConfig;
use tracing::debug;

use crate::fixed_duration::FixedDurationExpirationSessionRepository;
use crate::repository::{SessionRepository, SharedRepository};

/// A managed component as seen by post-processors.
///
/// Whether a component offers the session repository capability is decided
/// when it is registered, so processors can `match` on it instead of probing
/// types at runtime.
#[derive(Clone)]
pub enum Component {
    /// A component that stores sessions.
    SessionRepository(SharedRepository),
    /// Anything else.
    Other(Arc<dyn Any + Send + Sync>),
}

impl Component {
    /// Register a session repository.
    pub fn repository(repo: impl SessionRepository + 'static) -> Self {
        Component::SessionRepository(Arc::new(repo))
    }

    /// Register any other value.
    pub fn other<T: Any + Send + Sync>(value: T) -> Self {
        Component::Other(Arc::new(value))
    }

    pub fn as_session_repository(&self) -> Option<&SharedRepository> {
        match self {
            Component::SessionRepository(repo) => Some(repo),
            Component::Other(_) => None,
        }
    }

    pub fn into_session_repository(self) -> Option<SharedRepository> {
        match self {
            Component::SessionRepository(repo) => Some(repo),
            Component::Other(_) => None,
        }
    }

    /// Borrow a non-repository component as its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Component::Other(value) => value.downcast_ref(),
            Component::SessionRepository(_) => None,
        }
    }

    /// Whether both handles point at the same component instance.
    pub fn ptr_eq(&self, other: &Component) -> bool {
        match (self, other) {
            (Component::SessionRepository(a), Component::SessionRepository(b)) => {
                Arc::ptr_eq(a, b)
            }
            (Component::Other(a), Component::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::SessionRepository(_) => f.write_str("Component::SessionRepository(..)"),
            Component::Other(_) => f.write_str("Component::Other(..)"),
        }
    }
}

/// Hook invoked for every component after it has been initialized.
///
/// The returned component replaces the one passed in. Returning the input
/// untouched is the usual answer for components a processor does not care
/// about.
pub trait ComponentPostProcessor: Send + Sync {
    fn process(&self, component: Component, name: &str) -> Component;
}

/// Run a component through each processor in order.
pub fn apply_post_processors(
    processors: &[Arc<dyn ComponentPostProcessor>],
    component: Component,
    name: &str,
) -> Component {
    processors
        .iter()
        .fold(component, |component, processor| processor.process(component, name))
}

/// Wraps every session repository component in a
/// [`FixedDurationExpirationSessionRepository`] and passes all other
/// components through unchanged.
///
/// Processing the same repository twice wraps it twice; hosts run each
/// component through post-processing once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDurationExpirationInstaller {
    expiration_duration: Duration,
}

impl FixedDurationExpirationInstaller {
    pub fn new(expiration_duration: Duration) -> Self {
        Self {
            expiration_duration,
        }
    }

    /// Build an installer from the `[session]` config section.
    ///
    /// Returns `None` when `fixed_expiration_secs` is not set.
    pub fn from_config(config: &SessionConfig) -> Option<Self> {
        config.fixed_expiration().map(Self::new)
    }

    pub fn expiration_duration(&self) -> Duration {
        self.expiration_duration
    }
}

impl ComponentPostProcessor for FixedDurationExpirationInstaller {
    fn process(&self, component: Component, name: &str) -> Component {
        match component {
            Component::SessionRepository(repo) => {
                debug!(
                    component = %name,
                    expiration_secs = self.expiration_duration.as_secs(),
                    "Applying fixed-duration expiration to session repository"
                );
                Component::SessionRepository(Arc::new(
                    FixedDurationExpirationSessionRepository::new(repo, self.expiration_duration),
                ))
            }
            other => other,
        }
    }
}
