//! HTTP client wrapper for the streaming download.
//!
//! This module provides the `HttpClient` struct which handles the single
//! streamed GET with proper timeout configuration and error handling.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::deadline::Deadline;
use super::error::DownloadError;

/// HTTP client for downloading a file with streaming support.
///
/// # Example
///
/// ```no_run
/// use grokdl::download::{Deadline, HttpClient};
/// use std::path::Path;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let deadline = Deadline::after(Duration::from_secs(600));
/// let result = client
///     .download_to_file("https://example.com/clip.mp4", Path::new("./grok_t1.mp4"), deadline)
///     .await?;
/// println!("Downloaded to: {}", result.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

/// Outcome of a completed download.
#[derive(Debug, Clone)]
pub struct DownloadFileResult {
    /// Final output path.
    pub path: PathBuf,
    /// Number of body bytes written to disk.
    pub bytes_downloaded: u64,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Read timeout: 30 seconds per chunk
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        // A read timeout (not a total-request timeout) caps each blocked
        // chunk read; the overall transfer is bounded by the caller's
        // wall-clock deadline instead.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .read_timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads `url` to `dest_path`, streaming the body to disk.
    ///
    /// The destination file is truncate-created, so re-running the same task
    /// overwrites the previous output. The deadline is polled between chunks;
    /// when it fires, the partial file is left in place and a timeout error
    /// is returned (the supervising orchestrator owns cleanup policy).
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid
    /// - The request fails (network error, request-phase timeout)
    /// - The server returns an error status (4xx, 5xx)
    /// - Writing to disk fails
    /// - The global wall-clock budget is exceeded while streaming
    #[must_use = "download result contains the path to the downloaded file"]
    pub async fn download_to_file(
        &self,
        url: &str,
        dest_path: &Path,
        deadline: Deadline,
    ) -> Result<DownloadFileResult, DownloadError> {
        debug!(url, "starting download");

        // Validate URL
        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        // Truncate-create: a rerun of the same task replaces the old file.
        let mut file = File::create(dest_path)
            .await
            .map_err(|e| DownloadError::io(dest_path, e))?;

        let bytes_downloaded = stream_to_file(&mut file, response, url, dest_path, deadline).await?;

        info!(
            path = %dest_path.display(),
            bytes = bytes_downloaded,
            "download complete"
        );

        Ok(DownloadFileResult {
            path: dest_path.to_path_buf(),
            bytes_downloaded,
        })
    }

    /// Returns a reference to the underlying reqwest client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Streams the response body to the file, returning bytes written.
///
/// Polls the deadline before writing each chunk. The file handle is closed
/// on every exit path when the `BufWriter` and `File` go out of scope.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
    deadline: Deadline,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        if deadline.exceeded() {
            return Err(DownloadError::timeout(
                url,
                deadline.elapsed_secs(),
                deadline.budget_secs(),
            ));
        }

        if chunk.is_empty() {
            continue;
        }

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

    Ok(bytes_written)
}
