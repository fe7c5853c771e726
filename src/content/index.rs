//! Blog index assembly
//!
//! The index is rebuilt from disk on every call; there is no cache. Each
//! request scans the posts directory, derives a summary per file, joins the
//! keyword metadata, sorts newest-first, and applies the optional query.

use std::path::Path;

use super::keywords::extract_keywords;
use super::scanner::scan_posts;
use super::summary::{is_calendar_date, PostSummary};

/// Build the blog index for `posts_dir`.
///
/// Summaries are sorted by filename descending, which stands in for
/// chronological order as long as every filename carries a date prefix.
/// Files that break the convention are logged and kept; their sort position
/// is whatever the lexicographic order says.
pub fn build_index(posts_dir: &Path, query: Option<&str>) -> Vec<PostSummary> {
    let mut posts = Vec::new();

    for filename in scan_posts(posts_dir) {
        let mut summary = PostSummary::from_filename(&filename);

        if !is_calendar_date(&summary.date) {
            tracing::warn!(
                "post {:?} has no YYYY-MM-DD prefix and will sort out of chronological order",
                filename
            );
        }

        match extract_keywords(&posts_dir.join(&filename)) {
            Ok(keywords) => summary.keywords = keywords,
            Err(e) => {
                tracing::warn!("failed to read keywords from {:?}: {}", filename, e);
            }
        }

        posts.push(summary);
    }

    posts.sort_by(|a, b| b.filename.cmp(&a.filename));

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        posts.retain(|p| p.matches(query));
    }

    posts
}
