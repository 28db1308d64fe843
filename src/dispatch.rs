//! Source/format dispatch: which data source and which parser serve a run.
//!
//! The CLI hands over two free-form strings; [`resolve`] narrows them into a
//! [`ParserSelection`], the closed set of combinations the client serves.
//! `(url, simple)` is deliberately unsupported. When the caller omits the
//! format, [`detect_format`] guesses it from the location string.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::errors::ConfigError;
use crate::sources::DataSource;

/// Where the article data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Url,
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(SourceKind::File),
            "url" => Ok(SourceKind::Url),
            _ => Err(ConfigError::InvalidSourceType(s.to_string())),
        }
    }
}

/// Which JSON shape the payload is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    NewsApi,
    Simple,
}

impl FromStr for FormatKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newsapi" => Ok(FormatKind::NewsApi),
            "simple" => Ok(FormatKind::Simple),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::NewsApi => write!(f, "newsapi"),
            FormatKind::Simple => write!(f, "simple"),
        }
    }
}

/// A resolved (data source, parser variant) pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserSelection {
    FileNewsApi { path: String },
    FileSimple { path: String },
    UrlNewsApi { url: String },
}

impl ParserSelection {
    /// The data source this selection reads from.
    pub fn data_source(&self) -> DataSource {
        match self {
            ParserSelection::FileNewsApi { path } | ParserSelection::FileSimple { path } => {
                DataSource::File(path.clone())
            }
            ParserSelection::UrlNewsApi { url } => DataSource::Url(url.clone()),
        }
    }

    /// The format the fetched payload will be parsed as.
    pub fn format(&self) -> FormatKind {
        match self {
            ParserSelection::FileNewsApi { .. } | ParserSelection::UrlNewsApi { .. } => {
                FormatKind::NewsApi
            }
            ParserSelection::FileSimple { .. } => FormatKind::Simple,
        }
    }
}

/// Resolve raw source-type and format strings into a [`ParserSelection`].
///
/// Kinds are matched case-insensitively. The source type is checked first,
/// so an unknown source type wins over an unknown format.
pub fn resolve(
    source_type: &str,
    format: &str,
    path_or_url: &str,
) -> Result<ParserSelection, ConfigError> {
    let source_kind = SourceKind::from_str(source_type)?;
    let format_kind = FormatKind::from_str(format)?;

    match (source_kind, format_kind) {
        (SourceKind::File, FormatKind::NewsApi) => Ok(ParserSelection::FileNewsApi {
            path: path_or_url.to_string(),
        }),
        (SourceKind::File, FormatKind::Simple) => Ok(ParserSelection::FileSimple {
            path: path_or_url.to_string(),
        }),
        (SourceKind::Url, FormatKind::NewsApi) => Ok(ParserSelection::UrlNewsApi {
            url: path_or_url.to_string(),
        }),
        (SourceKind::Url, FormatKind::Simple) => Err(ConfigError::UnsupportedCombination),
    }
}

/// Guess the payload format from the location string.
///
/// A substring heuristic, not content sniffing: "newsapi" anywhere in the
/// path or URL wins, then "simple"; otherwise NewsAPI is assumed with a
/// warning.
pub fn detect_format(path_or_url: &str) -> FormatKind {
    let lower = path_or_url.to_lowercase();
    if lower.contains("newsapi") {
        FormatKind::NewsApi
    } else if lower.contains("simple") {
        FormatKind::Simple
    } else {
        warn!(
            location = %path_or_url,
            "Could not determine format from path/url; defaulting to newsapi"
        );
        FormatKind::NewsApi
    }
}
