//! Error kinds for config loading, API calls, response decoding, and output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarvestError {
    /// Missing or malformed configuration. Never swallowed by the pipeline.
    #[error("config error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The request never produced a response (DNS, connect, timeout, TLS, body read).
    #[error("transport error on {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status (bad key, quota, comments disabled, ...).
    #[error("{endpoint} returned HTTP {status}: {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("malformed {endpoint} response: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    pub fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        HarvestError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(endpoint: &'static str, reason: impl ToString) -> Self {
        HarvestError::MalformedResponse {
            endpoint,
            reason: reason.to_string(),
        }
    }
}
