//! Run orchestration: resolve the configuration, fetch, and parse.
//!
//! A run has no partial-success mode: either the whole source parses
//! (individual invalid records having been dropped with warnings) or the run
//! fails with a [`ClientError`]. Fetch failures are folded into the parse
//! stage as [`ParseError::SourceRead`] so the caller sees one error surface.

use tracing::{error, info, instrument};

use crate::dispatch::{detect_format, resolve, FormatKind, ParserSelection};
use crate::errors::{error_chain, ClientError, ParseError};
use crate::models::Article;
use crate::parsers;

/// Resolve CLI arguments into a parser selection, auto-detecting the format
/// when the caller omitted it.
pub fn configure(
    source_type: &str,
    path_or_url: &str,
    format: Option<&str>,
) -> Result<ParserSelection, ClientError> {
    let format = match format {
        Some(f) => f.to_string(),
        None => detect_format(path_or_url).to_string(),
    };
    let selection = resolve(source_type, &format, path_or_url)?;
    info!(?selection, "Resolved parser configuration");
    Ok(selection)
}

/// Fetch the selected source and parse it with the selected format.
///
/// Returns validated articles in input order.
#[instrument(level = "info", skip_all, fields(selection = ?selection))]
pub async fn fetch_and_parse(selection: &ParserSelection) -> Result<Vec<Article>, ClientError> {
    let source = selection.data_source();
    let data = match source.fetch().await {
        Ok(data) => data,
        Err(e) => {
            error!(error = %error_chain(&e), "Error reading data from source");
            return Err(ParseError::SourceRead(e).into());
        }
    };

    let articles = match selection.format() {
        FormatKind::NewsApi => parsers::newsapi::parse(&data),
        FormatKind::Simple => parsers::simple::parse(&data),
    }
    .map_err(|e| {
        error!(error = %error_chain(&e), "Error parsing source data");
        e
    })?;

    info!(count = articles.len(), "Run produced validated articles");
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConfigError, FetchError};
    use std::io::Write;

    fn temp_json(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_configure_uses_explicit_format() {
        let selection = configure("file", "./data/feed.json", Some("simple")).unwrap();
        assert_eq!(selection.format(), FormatKind::Simple);
    }

    #[test]
    fn test_configure_detects_format_from_location() {
        let selection = configure("file", "./data/simple_feed.json", None).unwrap();
        assert_eq!(selection.format(), FormatKind::Simple);

        let selection = configure("file", "./data/feed.json", None).unwrap();
        assert_eq!(selection.format(), FormatKind::NewsApi);
    }

    #[test]
    fn test_configure_rejects_url_simple() {
        match configure("url", "https://x", Some("simple")) {
            Err(ClientError::Config(ConfigError::UnsupportedCombination)) => {}
            other => panic!("expected UnsupportedCombination, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_newsapi_end_to_end() {
        let file = temp_json(
            r#"{"status":"ok","articles":[{"title":"T","description":"D","publishedAt":"2024-01-01","url":"https://x","source":{"id":"s","name":"S"}}]}"#,
        );
        let selection = configure("file", &file.path().to_string_lossy(), Some("newsapi")).unwrap();

        let articles = fetch_and_parse(&selection).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn test_file_simple_end_to_end() {
        let file = temp_json(
            r#"{"title":"T","description":"D","publishedAt":"2024-01-01","url":"https://x"}"#,
        );
        let selection = configure("file", &file.path().to_string_lossy(), Some("simple")).unwrap();

        let articles = fetch_and_parse(&selection).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(
            articles[0].source.as_ref().unwrap().name.as_deref(),
            Some("Simple")
        );
    }

    #[tokio::test]
    async fn test_empty_simple_file_fails_closed() {
        let file = temp_json("");
        let selection = configure("file", &file.path().to_string_lossy(), Some("simple")).unwrap();

        match fetch_and_parse(&selection).await {
            Err(ClientError::Parse(ParseError::Simple { .. })) => {}
            other => panic!("expected Simple parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_as_source_read() {
        let selection = configure("file", "/nonexistent/newsapi.json", None).unwrap();
        match fetch_and_parse(&selection).await {
            Err(ClientError::Parse(ParseError::SourceRead(FetchError::NotFound(_)))) => {}
            other => panic!("expected SourceRead(NotFound), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_records_dropped_but_run_succeeds() {
        let file = temp_json(
            r#"{"status":"ok","articles":[
                {"title":"Keep","description":"D","publishedAt":"2024-01-01","url":"https://a","source":{"id":null,"name":"S"}},
                {"title":"Drop","description":null,"publishedAt":"2024-01-01","url":"https://b","source":{"id":null,"name":"S"}}
            ]}"#,
        );
        let selection = configure("file", &file.path().to_string_lossy(), Some("newsapi")).unwrap();

        let articles = fetch_and_parse(&selection).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_deref(), Some("Keep"));
    }
}
