//! Configuration for pdfstudy.
//!
//! Loaded from `~/.config/pdfstudy/config.toml` (or `--config <path>`),
//! with defaults for everything except the API credential.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use types::{Config, GenerationConfig, UiConfig};
