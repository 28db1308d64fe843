//! Error taxonomy for the article client.
//!
//! Three layers, matching the pipeline stages:
//! - [`ConfigError`]: a bad source-type/format combination from the CLI
//! - [`FetchError`]: the data source could not be read
//! - [`ParseError`]: the fetched text was not a recognizable article payload
//!
//! [`ClientError`] is the top-level wrapper returned to `main`. Per-record
//! validation failures are never errors; invalid records are dropped with a
//! warning during parsing.

use std::error::Error;
use thiserror::Error;

/// An invalid CLI source-type/format combination.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source type other than `file` or `url`.
    #[error("invalid source type '{0}' (expected 'file' or 'url')")]
    InvalidSourceType(String),

    /// Format other than `newsapi` or `simple`.
    #[error("invalid format '{0}' (expected 'newsapi' or 'simple')")]
    InvalidFormat(String),

    /// A source/format pair the client does not serve.
    #[error("URL sources only support the newsapi format")]
    UnsupportedCombination,
}

/// Failure to read raw text from a data source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The input file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The input file exists but could not be read.
    #[error("failed to read file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The location string is not a well-formed URL.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request or body read failed.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure to turn fetched text into articles.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The data source failed before parsing could start.
    #[error("failed to read source data")]
    SourceRead(#[from] FetchError),

    /// The text was not a NewsAPI envelope.
    #[error("failed to parse NewsAPI envelope")]
    Envelope(#[source] serde_json::Error),

    /// The text was neither a single simple article nor an array of them.
    /// Both attempts are kept so the log can show why each shape was rejected.
    #[error("input is neither a single article nor an article array")]
    Simple {
        #[source]
        single: serde_json::Error,
        array: serde_json::Error,
    },
}

/// Top-level failure of one client run.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("failed to parse articles")]
    Parse(#[from] ParseError),
}

/// Render an error and its sources as a single `a: b: c` line for logging.
pub fn error_chain(err: &dyn Error) -> String {
    let mut line = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        line.push_str(": ");
        line.push_str(&e.to_string());
        cause = e.source();
    }
    line
}
