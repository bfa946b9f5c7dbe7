//! Error types surfaced by the core: configuration problems and Platform API failures.

use thiserror::Error;

/// Resolved configuration is unusable; detected before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("User name Required")]
    MissingUser,
    #[error("Password Required")]
    MissingPassword,
}

/// A Platform API request failed. Every variant is fatal for the run.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered 401.
    #[error("401: HTTP Authorization Failed")]
    Unauthorized { path: String },

    /// The API answered with any other non-200 status.
    #[error("HTTP GET Failed on {path}\nResponse Status: {status}\nResponse Reason: {reason}")]
    RequestFailed {
        path: String,
        status: u32,
        reason: String,
    },

    /// Curl could not complete the exchange (connect, TLS, read).
    #[error("HTTP GET {path} failed")]
    Transport {
        path: String,
        #[source]
        source: curl::Error,
    },

    /// The body was not the JSON shape we expected.
    #[error("invalid JSON from {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Request path the error belongs to.
    pub fn path(&self) -> &str {
        match self {
            ApiError::Unauthorized { path }
            | ApiError::RequestFailed { path, .. }
            | ApiError::Transport { path, .. }
            | ApiError::Decode { path, .. } => path,
        }
    }
}

/// Failure of a whole report run: bad target, API failure, or output write.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid Platform API address {target}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("writing output")]
    Output(#[from] std::io::Error),
}
