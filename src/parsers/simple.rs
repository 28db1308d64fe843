//! Parser for the simple article format.
//!
//! The payload is either one bare article object or an array of them:
//!
//! ```text
//! {"title": "...", "description": "...", "publishedAt": "...", "url": "..."}
//! [ {..}, {..} ]
//! ```
//!
//! The single-object shape is tried first; only if that fails to deserialize
//! is the array shape attempted. When both fail the parse fails closed with
//! [`ParseError::Simple`] carrying both rejection reasons. In particular,
//! empty or whitespace-only input is an error here, unlike the envelope
//! parser's empty-articles success.

use tracing::{error, info, instrument, warn};

use crate::errors::ParseError;
use crate::models::{Article, SimpleArticle};
use crate::validate;

/// Parse simple-format text into validated articles, in input order.
#[instrument(level = "info", skip_all)]
pub fn parse(data: &str) -> Result<Vec<Article>, ParseError> {
    let single_err = match parse_single(data) {
        Ok(articles) => return Ok(articles),
        Err(e) => e,
    };

    parse_array(data).map_err(|array_err| {
        error!(
            single_error = %single_err,
            array_error = %array_err,
            "Input matches neither simple-article shape"
        );
        ParseError::Simple {
            single: single_err,
            array: array_err,
        }
    })
}

/// Try the single-object shape. A JSON `null` payload or an invalid record
/// yields an empty success; only a deserialization failure falls through to
/// the array attempt.
fn parse_single(data: &str) -> Result<Vec<Article>, serde_json::Error> {
    let raw: Option<SimpleArticle> = serde_json::from_str(data)?;
    let Some(raw) = raw else {
        warn!("Simple payload deserialized to null; returning no articles");
        return Ok(Vec::new());
    };

    let article = Article::from(raw);
    if validate::is_valid(&article) {
        info!("Parsed one simple-format article");
        Ok(vec![article])
    } else {
        warn!(
            title = article.title.as_deref().unwrap_or("<none>"),
            "Article is missing required fields and will be skipped"
        );
        Ok(Vec::new())
    }
}

/// Try the array shape. Null elements are dropped, the rest validated.
fn parse_array(data: &str) -> Result<Vec<Article>, serde_json::Error> {
    let raw: Vec<Option<SimpleArticle>> = serde_json::from_str(data)?;

    let total = raw.len();
    let articles: Vec<Article> = raw
        .into_iter()
        .flatten()
        .map(Article::from)
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
        "Parsed simple-format article array"
    );
    Ok(articles)
}
