//! Non-interactive listing (--list option)
//!
//! Prints the collection to stdout so it can be piped into other tools.

use std::io::{self, Write};
use std::str::FromStr;

use crate::core::Bookmark;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Normal exit or command completed
/// - `ERROR` (2): Runtime error (I/O error, terminal error, etc.)
/// - `INVALID` (3): Invalid arguments, option values or rejected input
pub mod exit_code {
    /// Command completed or normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments, options or input (e.g., bad URL, malformed import)
    pub const INVALID: i32 = 3;
}

/// Output format for listed bookmarks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum OutputFormat {
    /// `id<TAB>title<TAB>url`, one bookmark per line (default)
    #[default]
    Lines,
    /// One URL per line
    Urls,
    /// JSON array in the exchange format
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" | "tsv" => Ok(Self::Lines),
            "urls" | "url" => Ok(Self::Urls),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Write `bookmarks` in `format` to `out`
pub fn write_bookmarks<W: Write>(
    out: &mut W,
    bookmarks: &[Bookmark],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for b in bookmarks {
                writeln!(out, "{}\t{}\t{}", b.id, b.title, b.url)?;
            }
        }
        OutputFormat::Urls => {
            for b in bookmarks {
                writeln!(out, "{}", b.url)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, bookmarks)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Output bookmarks to stdout
pub fn output_bookmarks(bookmarks: &[Bookmark], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_bookmarks(&mut handle, bookmarks, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BookmarkId;

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark {
                id: BookmarkId::new("1"),
                url: "https://github.com".to_string(),
                title: "Github".to_string(),
                icon_url: "icon".to_string(),
            },
            Bookmark {
                id: BookmarkId::new("2"),
                url: "https://docs.rs".to_string(),
                title: "Docs".to_string(),
                icon_url: "icon".to_string(),
            },
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_bookmarks(&mut buf, &sample(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("lines".parse::<OutputFormat>(), Ok(OutputFormat::Lines));
        assert_eq!("URLS".parse::<OutputFormat>(), Ok(OutputFormat::Urls));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_lines_output() {
        assert_eq!(
            render(OutputFormat::Lines),
            "1\tGithub\thttps://github.com\n2\tDocs\thttps://docs.rs\n"
        );
    }

    #[test]
    fn test_urls_output() {
        assert_eq!(
            render(OutputFormat::Urls),
            "https://github.com\nhttps://docs.rs\n"
        );
    }

    #[test]
    fn test_json_output_parses_back() {
        let out = render(OutputFormat::Json);
        let parsed: Vec<Bookmark> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_lines_output() {
        let mut buf = Vec::new();
        write_bookmarks(&mut buf, &[], OutputFormat::Lines).unwrap();
        assert!(buf.is_empty());
    }
}
