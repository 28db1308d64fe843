//! # Article Client
//!
//! Fetches news-article data from a local file or a remote URL, in one of two
//! JSON shapes (the NewsAPI envelope or a bare "simple" article/array), drops
//! records missing required fields, and prints a fixed 4-line summary per
//! surviving article.
//!
//! ## Usage
//!
//! ```sh
//! article_client file ./data/newsapi.json newsapi
//! article_client file ./data/simple.json simple
//! article_client url https://example.com/data/newsapi.json
//! ```
//!
//! The format argument is optional; when omitted it is guessed from the
//! path/URL. URL sources only support the NewsAPI format.
//!
//! ## Pipeline
//!
//! 1. **Dispatch**: narrow (source type, format) into a supported pairing
//! 2. **Fetch**: read the whole payload from the file or one GET request
//! 3. **Parse & validate**: deserialize, drop invalid records with a warning
//! 4. **Print**: one 4-line block per article on stdout
//!
//! Warnings and errors go to an append-only log file (`--log-file`,
//! default `parser_errors.log`), never to stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod client;
mod dispatch;
mod errors;
mod models;
mod output;
mod parsers;
mod sources;
mod validate;

use cli::Cli;
use errors::{error_chain, ClientError};

/// Initialize tracing with an append-only file sink.
///
/// The returned guard must stay alive until the process is about to exit:
/// dropping it flushes and closes the sink, which is why `main` returns an
/// [`ExitCode`] instead of calling `process::exit`. If the log file cannot
/// be opened the subscriber falls back to stderr.
fn init_logging(log_file: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            tfmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                .init();
            Some(guard)
        }
        Err(e) => {
            tfmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                .init();
            tracing::warn!(path = %log_file, error = %e, "Failed to open log file; logging to stderr");
            None
        }
    }
}

async fn run(args: &Cli) -> Result<(), ClientError> {
    let selection = client::configure(&args.source_type, &args.path_or_url, args.format.as_deref())?;
    let articles = client::fetch_and_parse(&selection).await?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = output::print_all(&mut stdout, &articles) {
        error!(error = %e, "Failed writing to stdout");
    }
    info!(count = articles.len(), "Printed articles");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    let _log_guard = init_logging(&args.log_file);
    info!(
        source_type = %args.source_type,
        location = %args.path_or_url,
        format = ?args.format,
        "article_client starting"
    );

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %error_chain(&e), "Run failed");
            eprintln!("Error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
