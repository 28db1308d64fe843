//! Data models for news articles and the two supported input shapes.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: the normalized article record, also the raw shape inside a
//!   NewsAPI envelope
//! - [`SourceRef`]: the publication an article came from
//! - [`NewsApiEnvelope`]: the NewsAPI response wrapper
//! - [`SimpleArticle`]: the reduced "simple" input shape
//!
//! Every field is optional at the model level; required-field rules live in
//! [`crate::validate`] so that malformed records can be deserialized, logged,
//! and dropped instead of failing the whole batch.

use serde::Deserialize;

/// A normalized news article.
///
/// In the NewsAPI envelope this shape is deserialized directly from each
/// element of the `articles` array. For the simple format it is built via
/// [`From<SimpleArticle>`]. Records are immutable after construction: they
/// flow from a parser through validation to the printer and are then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    /// The article headline.
    pub title: Option<String>,
    /// A short summary of the article.
    pub description: Option<String>,
    /// Publication timestamp, kept as an opaque string (never parsed as a date).
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Canonical URL of the article.
    pub url: Option<String>,
    /// URL of the article's lead image.
    #[serde(rename = "urlToImage")]
    pub image_url: Option<String>,
    /// Full or truncated article body.
    pub content: Option<String>,
    /// The publication this article came from.
    pub source: Option<SourceRef>,
    /// Article byline.
    pub author: Option<String>,
}

/// The publication a news article came from.
///
/// `id` carries no validity constraint; only `name` is required for an
/// article to pass validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRef {
    /// Machine identifier of the source, often null in NewsAPI data.
    pub id: Option<String>,
    /// Human-readable name of the source.
    pub name: Option<String>,
}

/// The NewsAPI response envelope: a status line, a result count, and the
/// article list. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct NewsApiEnvelope {
    /// Response status reported by the API, e.g. `"ok"`.
    pub status: Option<String>,
    /// Total matches reported by the API (may exceed `articles.len()`).
    #[serde(rename = "totalResults")]
    pub total_results: Option<i64>,
    /// The articles themselves; `None` when absent or JSON `null`.
    pub articles: Option<Vec<Article>>,
}

/// An article in the simple input format: either one of these objects on its
/// own, or an array of them. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct SimpleArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub url: Option<String>,
}

impl From<SimpleArticle> for Article {
    /// Normalize a simple-format record. The simple shape carries no source,
    /// image, content, or author; a synthetic source named "Simple" is
    /// substituted so the record can satisfy the source-name validity rule.
    fn from(simple: SimpleArticle) -> Self {
        Article {
            title: simple.title,
            description: simple.description,
            published_at: simple.published_at,
            url: simple.url,
            image_url: None,
            content: None,
            source: Some(SourceRef {
                id: None,
                name: Some("Simple".to_string()),
            }),
            author: None,
        }
    }
}
