//! Credential resolution from configuration.
//!
//! The API key comes either from the config file or from the environment
//! variable named by `generation.api_key_env`.

use super::loader::ConfigError;
use super::types::GenerationConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl GenerationConfig {
    /// Resolve the API key from the environment.
    pub fn resolve_api_key(&self) -> Result<SecureString, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key with a custom environment lookup.
    ///
    /// Inline `api_key` wins; empty values count as missing.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<SecureString, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Ok(SecureString::new(key.clone()));
        }

        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(SecureString::new(key)),
            _ => Err(ConfigError::MissingCredential {
                env_var: self.api_key_env.clone(),
            }),
        }
    }
}
