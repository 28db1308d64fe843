//! Parser for the NewsAPI envelope format.
//!
//! Expected shape:
//!
//! ```text
//! {"status": "ok", "totalResults": 2, "articles": [ {..}, {..} ]}
//! ```
//!
//! A structurally valid envelope with a missing or null `articles` array is an
//! empty success, not an error. Text that does not deserialize as an envelope
//! at all fails with [`ParseError::Envelope`].

use tracing::{error, info, instrument, warn};

use crate::errors::ParseError;
use crate::models::{Article, NewsApiEnvelope};
use crate::validate;

/// Parse a NewsAPI envelope into validated articles, in input order.
#[instrument(level = "info", skip_all)]
pub fn parse(data: &str) -> Result<Vec<Article>, ParseError> {
    // Option covers a literal JSON `null` payload.
    let envelope: Option<NewsApiEnvelope> =
        serde_json::from_str(data).map_err(ParseError::Envelope)?;

    let Some(envelope) = envelope else {
        error!("NewsAPI payload deserialized to null; returning no articles");
        return Ok(Vec::new());
    };
    let Some(raw_articles) = envelope.articles else {
        error!(
            status = ?envelope.status,
            "NewsAPI envelope has no articles array; returning no articles"
        );
        return Ok(Vec::new());
    };

    let total = raw_articles.len();
    let articles: Vec<Article> = raw_articles
        .into_iter()
        .filter(|article| {
            let valid = validate::is_valid(article);
            if !valid {
                warn!(
                    title = article.title.as_deref().unwrap_or("<none>"),
                    "Article is missing required fields and will be skipped"
                );
            }
            valid
        })
        .collect();

    info!(
        total,
        kept = articles.len(),
        skipped = total - articles.len(),
        "Parsed NewsAPI envelope"
    );
    Ok(articles)
}
