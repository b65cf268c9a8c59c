//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate to prevent accidental logging of sensitive values.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;
use std::path::PathBuf;

/// A secret string that won't be logged or displayed.
///
/// Uses `secrecy::SecretBox` to ensure API keys are never accidentally
/// exposed in logs, debug output, or error messages.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Create a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this when actually using the secret (e.g., in an API request).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Credentials for the external services one run talks to.
#[derive(Clone)]
pub struct Credentials {
    /// Search API key (secret)
    pub serp_api_key: SecretString,

    /// Model API key (secret)
    pub groq_api_key: SecretString,

    /// Path to the Google service-account key file, when spreadsheet
    /// access is wanted
    pub service_account_file: Option<PathBuf>,
}

impl Credentials {
    /// Create credentials for the two always-required services.
    pub fn new(serp_api_key: impl Into<String>, groq_api_key: impl Into<String>) -> Self {
        Self {
            serp_api_key: SecretString::new(serp_api_key),
            groq_api_key: SecretString::new(groq_api_key),
            service_account_file: None,
        }
    }

    /// Attach a service-account key file for spreadsheet access.
    pub fn with_service_account_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.service_account_file = Some(path.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("serp_api_key", &"[REDACTED]")
            .field("groq_api_key", &"[REDACTED]")
            .field("service_account_file", &self.service_account_file)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_not_in_debug() {
        let secret = SecretString::new("sk-super-secret-key");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("sk-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn secret_not_in_display() {
        let secret = SecretString::new("sk-super-secret-key");
        let display = format!("{}", secret);
        assert!(!display.contains("sk-super"));
        assert!(display.contains("[REDACTED]"));
    }

    #[test]
    fn expose_returns_the_value() {
        let secret = SecretString::new("sk-super-secret-key");
        assert_eq!(secret.expose(), "sk-super-secret-key");
    }

    #[test]
    fn credentials_debug_shows_only_the_key_path() {
        let creds =
            Credentials::new("serp-secret", "gsk-secret").with_service_account_file("/tmp/sa.json");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("serp-secret"));
        assert!(!debug.contains("gsk-secret"));
        assert!(debug.contains("/tmp/sa.json"));
    }
}
