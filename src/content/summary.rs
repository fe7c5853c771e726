//! Post summary model derived from filenames

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// RFC 3986 unreserved characters stay readable in post URLs
const SLUG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A blog post summary, reconstructed from the filesystem on every request
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    /// Filename without extension; doubles as the URL identifier
    pub slug: String,

    /// Display title derived from the filename
    pub title: String,

    /// The 10-character date token, or empty when the filename has none
    pub date: String,

    /// Original directory entry name; the sort key (newest first)
    pub filename: String,

    /// Keywords from the first-line metadata comment
    pub keywords: Vec<String>,

    /// URL path of the post page
    pub path: String,
}

impl PostSummary {
    /// Derive a summary from a directory entry name like
    /// `2025-12-09_welcome.md`. Keywords are filled in separately.
    pub fn from_filename(filename: &str) -> Self {
        let stem = strip_markdown_extension(filename);
        let (date, raw_title) = split_date_token(stem);

        Self {
            slug: stem.to_string(),
            title: title_case(raw_title),
            date: date.unwrap_or_default().to_string(),
            filename: filename.to_string(),
            keywords: Vec::new(),
            path: format!("/blog/{}", utf8_percent_encode(stem, SLUG_ENCODE_SET)),
        }
    }

    /// Case-insensitive substring match over title, date, and keywords
    pub fn matches(&self, query: &str) -> bool {
        let haystack = format!(
            "{} {} {}",
            self.title,
            self.date,
            self.keywords.join(" ")
        )
        .to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

/// Split a filename stem on the first `_`. A left segment of exactly 10
/// characters is taken as the date token; anything else means no date.
/// The token is a length heuristic, not a validated calendar date.
pub(crate) fn split_date_token(stem: &str) -> (Option<&str>, &str) {
    if let Some((left, right)) = stem.split_once('_') {
        if left.chars().count() == 10 {
            return (Some(left), right);
        }
    }
    (None, stem)
}

/// True when a date token is a real `YYYY-MM-DD` calendar date. Used only
/// to flag files that will sort out of chronological order, never to reject
/// them.
pub fn is_calendar_date(token: &str) -> bool {
    NaiveDate::parse_from_str(token, "%Y-%m-%d").is_ok()
}

fn strip_markdown_extension(filename: &str) -> &str {
    filename
        .strip_suffix(".md")
        .or_else(|| filename.strip_suffix(".markdown"))
        .unwrap_or(filename)
}

/// Replace `_` with spaces and capitalize every word
fn title_case(raw: &str) -> String {
    raw.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
