//! HTTP download of a single media file, streamed to disk.
//!
//! This module covers the whole lifecycle of one download task:
//!
//! - Resolving the destination path from the task id and the URL
//!   (extension inference with an `mp4` default)
//! - Streaming the response body to a truncate-created file while polling
//!   a wall-clock deadline between chunks
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use grokdl::download::{Deadline, HttpClient, resolve_target};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let target = resolve_target(Path::new("./media"), "abc123", "https://example.com/clip.mp4");
//! let deadline = Deadline::after(Duration::from_secs(600));
//! let client = HttpClient::new();
//! let result = client
//!     .download_to_file("https://example.com/clip.mp4", &target.path, deadline)
//!     .await?;
//! println!("Downloaded {} bytes", result.bytes_downloaded);
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod deadline;
mod error;
mod target;

pub use client::{DownloadFileResult, HttpClient};
pub use constants::{CONNECT_TIMEOUT_SECS, DEFAULT_GLOBAL_TIMEOUT_SECS, READ_TIMEOUT_SECS};
pub use deadline::Deadline;
pub use error::DownloadError;
pub use target::{
    DEFAULT_EXTENSION, RECOGNIZED_EXTENSIONS, ResolvedTarget, default_media_dir,
    resolve_extension, resolve_target,
};
