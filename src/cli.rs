//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use grokdl::download::DEFAULT_GLOBAL_TIMEOUT_SECS;

/// Download a single remote media file for one task.
///
/// One invocation downloads one URL to `file/video/grok_<TASK_ID>.<ext>`
/// (two levels above the binary by default), streaming the body to disk
/// under a global wall-clock budget. Retries, concurrency across tasks, and
/// result reporting belong to the supervising orchestrator.
#[derive(Parser, Debug)]
#[command(name = "grokdl")]
#[command(author, version, about)]
#[command(after_help = "Exit codes:
  0 = download succeeded
  1 = any failure (bad arguments, network error, disk error, timeout)")]
pub struct Args {
    /// URL of the media file to download
    pub url: String,

    /// Task identifier; names the output file grok_<TASK_ID>.<ext>
    pub task_id: String,

    /// Output directory (defaults to file/video two levels above the binary)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Global wall-clock budget for the whole download, in seconds
    #[arg(long, default_value_t = DEFAULT_GLOBAL_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
