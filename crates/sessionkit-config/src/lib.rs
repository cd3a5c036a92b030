//! Configuration system for sessionkit.
//!
//! Provides TOML-based configuration with:
//! - A `[session]` section driving the session repository and fixed-duration expiration
//! - Config file layering (user config dir + project-local overrides)

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{config_layers, load_config, load_config_file};
pub use error::{ConfigError, Result};
pub use types::*;
