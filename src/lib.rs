//! grokdl library
//!
//! Core functionality for the single-shot media downloader. One process
//! invocation downloads exactly one remote media file (video or image) to a
//! deterministic path derived from a task identifier, under a global
//! wall-clock budget polled once per streamed chunk.
//!
//! # Architecture
//!
//! - [`download`] - target path resolution and the streaming HTTP download
//! - [`exit`] - mapping of the run outcome to the process exit code
//!
//! The binary in `src/main.rs` wires these together; retries, concurrency
//! across tasks, and result reporting belong to the supervising orchestrator
//! that spawns this process.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod exit;

// Re-export commonly used types
pub use download::{
    DEFAULT_EXTENSION, DEFAULT_GLOBAL_TIMEOUT_SECS, Deadline, DownloadError, DownloadFileResult,
    HttpClient, RECOGNIZED_EXTENSIONS, ResolvedTarget, default_media_dir, resolve_extension,
    resolve_target,
};
pub use exit::ProcessExit;
