//! Command-line interface definitions for the article client.
//!
//! The source type and format arrive as free-form strings and are narrowed
//! in [`crate::dispatch`], so that an unrecognized value surfaces as a
//! configuration error with the client's own taxonomy rather than a clap
//! parse failure.

use clap::Parser;

/// Fetch news-article JSON from a file or URL, validate it, and print a
/// summary per article.
///
/// # Examples
///
/// ```sh
/// article_client file ./data/newsapi.json newsapi
/// article_client url https://example.com/data/newsapi.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Where the data lives: "file" or "url"
    pub source_type: String,

    /// Path to the file, or URL to fetch from
    pub path_or_url: String,

    /// Payload format: "newsapi" or "simple" (default: guessed from the path/url)
    pub format: Option<String>,

    /// Append warnings and errors to this log file
    #[arg(long, default_value = "parser_errors.log")]
    pub log_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["article_client", "file", "./data/newsapi.json", "newsapi"]);
        assert_eq!(cli.source_type, "file");
        assert_eq!(cli.path_or_url, "./data/newsapi.json");
        assert_eq!(cli.format.as_deref(), Some("newsapi"));
        assert_eq!(cli.log_file, "parser_errors.log");
    }

    #[test]
    fn test_format_is_optional() {
        let cli = Cli::parse_from(["article_client", "url", "https://example.com/feed.json"]);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_log_file_override() {
        let cli = Cli::parse_from([
            "article_client",
            "file",
            "./data/simple.json",
            "--log-file",
            "/tmp/run.log",
        ]);
        assert_eq!(cli.log_file, "/tmp/run.log");
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["article_client", "file"]).is_err());
        assert!(Cli::try_parse_from(["article_client"]).is_err());
    }
}
