//! Keyword metadata extraction
//!
//! A post may carry its search keywords in an HTML comment on the very
//! first line:
//!
//! ```text
//! <!-- keywords: rust, async, tokio -->
//! ```
//!
//! Only that line is read; the rest of the file is never touched here.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

lazy_static! {
    static ref KEYWORDS_RE: Regex =
        Regex::new(r"(?i)^\s*<!--\s*keywords\s*:\s*(.*?)\s*-->\s*$").unwrap();
}

/// Extract the keyword list from the first line of `path`.
///
/// A missing or malformed comment is `Ok` with no keywords; an unreadable
/// file (missing, permissions, invalid UTF-8) is an `Err` so callers can
/// tell the two apart. The index builder logs the error and degrades to
/// "no keywords".
pub fn extract_keywords(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;
    Ok(parse_keyword_line(&first_line))
}

/// Parse a single line against the keyword comment pattern
pub(crate) fn parse_keyword_line(line: &str) -> Vec<String> {
    let Some(caps) = KEYWORDS_RE.captures(line) else {
        return Vec::new();
    };

    caps[1]
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_extracts_keyword_comment() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(
            dir.path(),
            "post.md",
            "<!-- keywords: a, b, c -->\n# Body\n",
        );
        assert_eq!(extract_keywords(&path).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(
            parse_keyword_line("<!-- KEYWORDS: Rust, Web -->"),
            vec!["Rust", "Web"]
        );
        assert_eq!(
            parse_keyword_line("<!--Keywords:solo-->"),
            vec!["solo"]
        );
    }

    #[test]
    fn test_empty_terms_are_dropped() {
        assert_eq!(
            parse_keyword_line("<!-- keywords: a,, b , -->"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_no_comment_means_no_keywords() {
        assert!(parse_keyword_line("# Just a heading").is_empty());
        assert!(parse_keyword_line("<!-- author: someone -->").is_empty());
        assert!(parse_keyword_line("").is_empty());
    }

    #[test]
    fn test_only_first_line_is_considered() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(
            dir.path(),
            "post.md",
            "# Heading\n<!-- keywords: hidden -->\n",
        );
        assert!(extract_keywords(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract_keywords(&dir.path().join("nope.md")).is_err());
    }
}
