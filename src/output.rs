//! Fixed-layout text rendering for article records.
//!
//! One article renders as four lines, each absent field substituted with
//! `N/A`:
//!
//! ```text
//! title: <title>
//! at: <publishedAt>
//! url: <url>
//! <description>
//! ```
//!
//! Sequential console output adds one blank line between articles.

use std::io::{self, Write};

use crate::models::Article;

/// Render one article in the fixed 4-line layout.
pub fn render(article: &Article) -> String {
    format!(
        "title: {}\nat: {}\nurl: {}\n{}\n",
        or_na(&article.title),
        or_na(&article.published_at),
        or_na(&article.url),
        or_na(&article.description),
    )
}

/// Write each article to `out` as a 4-line block followed by a blank line.
pub fn print_all<W: Write>(out: &mut W, articles: &[Article]) -> io::Result<()> {
    for article in articles {
        out.write_all(render(article).as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceRef;

    fn article() -> Article {
        Article {
            title: Some("T".to_string()),
            description: Some("D".to_string()),
            published_at: Some("2024-01-01".to_string()),
            url: Some("https://x".to_string()),
            image_url: None,
            content: None,
            source: Some(SourceRef {
                id: None,
                name: Some("S".to_string()),
            }),
            author: None,
        }
    }

    #[test]
    fn test_render_layout() {
        assert_eq!(render(&article()), "title: T\nat: 2024-01-01\nurl: https://x\nD\n");
    }

    #[test]
    fn test_render_substitutes_na_for_absent_fields() {
        let mut a = article();
        a.title = None;
        a.description = None;
        assert_eq!(
            render(&a),
            "title: N/A\nat: 2024-01-01\nurl: https://x\nN/A\n"
        );
    }

    #[test]
    fn test_render_round_trips_field_values() {
        let rendered = render(&article());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].strip_prefix("title: "), Some("T"));
        assert_eq!(lines[1].strip_prefix("at: "), Some("2024-01-01"));
        assert_eq!(lines[2].strip_prefix("url: "), Some("https://x"));
        assert_eq!(lines[3], "D");
    }

    #[test]
    fn test_print_all_separates_blocks_with_blank_line() {
        let mut out = Vec::new();
        print_all(&mut out, &[article(), article()]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let block = "title: T\nat: 2024-01-01\nurl: https://x\nD\n\n";
        assert_eq!(text, format!("{block}{block}"));
    }

    #[test]
    fn test_print_all_with_no_articles_writes_nothing() {
        let mut out = Vec::new();
        print_all(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
