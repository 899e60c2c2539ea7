//! Error types for the download module.
//!
//! Every failure kind is distinguished here so logs and tests can tell them
//! apart, even though the process collapses all of them to the same failure
//! exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while downloading the media file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network-level error (DNS resolution, connection refused, TLS errors,
    /// request-phase timeouts, mid-stream transport failures).
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// File system error during download (create directory, create file, write).
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The provided URL is malformed or invalid.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The global wall-clock budget was exceeded while streaming.
    #[error("timeout downloading {url}: {elapsed_secs}s elapsed exceeds {budget_secs}s budget")]
    Timeout {
        /// The URL whose download ran over budget.
        url: String,
        /// Wall-clock seconds elapsed when the budget check fired.
        elapsed_secs: u64,
        /// The configured budget in seconds.
        budget_secs: u64,
    },
}

impl DownloadError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a global-budget timeout error.
    pub fn timeout(url: impl Into<String>, elapsed_secs: u64, budget_secs: u64) -> Self {
        Self::Timeout {
            url: url.into(),
            elapsed_secs,
            budget_secs,
        }
    }

    /// Returns true if this is the global-budget timeout variant.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` or `From<std::io::Error>`
// because our error variants require context (url, path) that the source errors
// don't provide. The helper constructor methods (network(), io(), etc.) are the
// correct pattern here as they allow callers to provide necessary context.
