//! Required-field validation for article records.
//!
//! A record is valid when title, description, publication timestamp, and URL
//! are all present and non-blank, and its source has a non-blank name. The
//! source id is never consulted. Validation is a pure filter: invalid records
//! are dropped by the parsers, never raised as errors.

use crate::models::{Article, SourceRef};

/// Check whether an article carries every required field.
pub fn is_valid(article: &Article) -> bool {
    is_present(&article.title)
        && is_present(&article.description)
        && is_present(&article.published_at)
        && is_present(&article.url)
        && has_valid_source(article.source.as_ref())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn has_valid_source(source: Option<&SourceRef>) -> bool {
    source.is_some_and(|s| is_present(&s.name))
}
