//! Data sources: where raw article text comes from.
//!
//! A [`DataSource`] yields the entire payload as one string. There are two
//! variants: a local file read in full, and a single HTTP GET. No retries,
//! no explicit timeout; redirects are left to reqwest's defaults.

use std::io::ErrorKind;

use tokio::fs;
use tracing::{debug, info, instrument};
use url::Url;

use crate::errors::FetchError;

/// A source of raw article data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A local file, read as UTF-8 text.
    File(String),
    /// A remote resource fetched with one GET request.
    Url(String),
}

impl DataSource {
    /// Fetch the full payload as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] / [`FetchError::Io`] for file sources
    /// - [`FetchError::InvalidUrl`] when the URL does not parse; the request
    ///   is never issued in that case
    /// - [`FetchError::Network`] on transport or body-read failure
    #[instrument(level = "info", skip_all, fields(source = ?self))]
    pub async fn fetch(&self) -> Result<String, FetchError> {
        match self {
            DataSource::File(path) => {
                let data = fs::read_to_string(path).await.map_err(|e| {
                    if e.kind() == ErrorKind::NotFound {
                        FetchError::NotFound(path.clone())
                    } else {
                        FetchError::Io {
                            path: path.clone(),
                            source: e,
                        }
                    }
                })?;
                info!(path = %path, bytes = data.len(), "Read article data from file");
                Ok(data)
            }
            DataSource::Url(location) => {
                let parsed = Url::parse(location).map_err(|e| FetchError::InvalidUrl {
                    url: location.clone(),
                    source: e,
                })?;
                debug!(url = %parsed, "Issuing GET request");

                let response =
                    reqwest::get(parsed.clone())
                        .await
                        .map_err(|e| FetchError::Network {
                            url: location.clone(),
                            source: e,
                        })?;
                // An empty body is a valid (empty) payload, not an error.
                let body = response.text().await.map_err(|e| FetchError::Network {
                    url: location.clone(),
                    source: e,
                })?;
                info!(url = %parsed, bytes = body.len(), "Fetched article data from URL");
                Ok(body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"status":"ok"}}"#).unwrap();

        let source = DataSource::File(file.path().to_string_lossy().into_owned());
        let data = source.fetch().await.unwrap();
        assert_eq!(data, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let source = DataSource::File("/nonexistent/articles.json".to_string());
        match source.fetch().await {
            Err(FetchError::NotFound(path)) => assert_eq!(path, "/nonexistent/articles.json"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_url_fails_before_request() {
        let source = DataSource::Url("not a url".to_string());
        match source.fetch().await {
            Err(FetchError::InvalidUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Reserved TLD per RFC 2606; resolution is expected to fail.
        let source = DataSource::Url("http://articles.invalid/feed.json".to_string());
        match source.fetch().await {
            Err(FetchError::Network { url, .. }) => {
                assert_eq!(url, "http://articles.invalid/feed.json")
            }
            other => panic!("expected Network, got {other:?}"),
        }
    }
}
