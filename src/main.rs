//! CLI entry point for the grokdl media downloader.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use grokdl::download::{Deadline, HttpClient, default_media_dir, resolve_target};
use grokdl::exit::{ProcessExit, determine_exit_outcome};
use tracing::{debug, error, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs).
    // The orchestrator contract wants usage on stdout and exit code 1 for
    // missing arguments, so clap's default error path (stderr, exit 2) is
    // mapped by hand here. No network or file I/O happens on this path.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            println!("{err}");
            let outcome = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ProcessExit::Success,
                _ => ProcessExit::Failure,
            };
            return outcome.into();
        }
    };

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let result = run(&args).await;
    if let Err(e) = &result {
        error!(task_id = %args.task_id, error = %format!("{e:#}"), "download failed");
    }
    determine_exit_outcome(&result).into()
}

/// Runs one download task end to end: resolve the target path, create the
/// directory, stream the body under the wall-clock budget.
async fn run(args: &Args) -> anyhow::Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => default_media_dir().context("cannot locate program directory")?,
    };

    let target = resolve_target(&output_dir, &args.task_id, &args.url);

    tokio::fs::create_dir_all(&target.directory)
        .await
        .with_context(|| {
            format!(
                "cannot create output directory {}",
                target.directory.display()
            )
        })?;

    info!(
        task_id = %args.task_id,
        url = %args.url,
        path = %target.path.display(),
        "starting download"
    );

    // Budget clock starts here, before the request is issued.
    let deadline = Deadline::after(Duration::from_secs(args.timeout_secs));
    let client = HttpClient::new();
    let result = client
        .download_to_file(&args.url, &target.path, deadline)
        .await?;

    info!(
        task_id = %args.task_id,
        path = %result.path.display(),
        bytes = result.bytes_downloaded,
        "successfully downloaded"
    );

    Ok(())
}
