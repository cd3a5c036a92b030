//! Session repositories with fixed-duration expiration.
//!
//! This crate provides:
//! - A [`SessionRepository`] trait and the [`Session`] record it stores
//! - An LRU-bounded [`InMemorySessionRepository`] that expires sessions on access
//! - [`FixedDurationExpirationSessionRepository`], a decorator that gives every
//!   saved session the same lifetime
//! - [`FixedDurationExpirationInstaller`], a [`ComponentPostProcessor`] that
//!   applies that decorator to each session repository component a host registers
//!
//! # Example
//!
//! ```rust,ignore
//! use sessionkit_session::{Component, ComponentPostProcessor, FixedDurationExpirationInstaller};
//!
//! let installer = FixedDurationExpirationInstaller::new(Duration::from_secs(1800));
//! let component = Component::repository(InMemorySessionRepository::default());
//! let repo = installer
//!     .process(component, "sessionRepository")
//!     .into_session_repository()
//!     .unwrap();
//! ```

mod config;
mod error;
mod fixed_duration;
mod memory;
mod processor;
mod repository;
mod session;

pub use config::RepositoryConfig;
pub use error::{Error, Result};
pub use fixed_duration::FixedDurationExpirationSessionRepository;
pub use memory::{InMemorySessionRepository, RepositoryStats};
pub use processor::{
    Component, ComponentPostProcessor, FixedDurationExpirationInstaller, apply_post_processors,
};
pub use repository::{SessionRepository, SharedRepository};
pub use session::Session;
