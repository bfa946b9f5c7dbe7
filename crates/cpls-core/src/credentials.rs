//! Platform API credentials and the Basic authorization header built from them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use crate::error::ConfigError;

/// User name and password for the Platform API. Resolved once, never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Both fields must be non-empty.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let user = user.into();
        let password = password.into();
        if user.is_empty() {
            return Err(ConfigError::MissingUser);
        }
        if password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }
        Ok(Self { user, password })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// `Basic base64(user:password)`.
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
