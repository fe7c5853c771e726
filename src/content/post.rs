//! Single post lookup and rendering

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::keywords::parse_keyword_line;
use super::markdown::MarkdownRenderer;
use super::summary::PostSummary;

/// A fully rendered blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Filename stem, as supplied in the URL
    pub slug: String,

    /// Display title derived from the filename
    pub title: String,

    /// Date token from the filename, possibly empty
    pub date: String,

    /// Rendered HTML body
    pub content: String,

    /// Keywords from the first-line metadata comment
    pub keywords: Vec<String>,
}

impl Post {
    /// Look up a post by exact slug under `posts_dir` and render it.
    ///
    /// `Ok(None)` means no file matches the slug; the server turns that into
    /// the 404 page. I/O failures on an existing file are real errors.
    pub fn load(
        posts_dir: &Path,
        slug: &str,
        renderer: &MarkdownRenderer,
    ) -> io::Result<Option<Post>> {
        let Some(path) = find_source(posts_dir, slug) else {
            return Ok(None);
        };

        let raw = fs::read_to_string(&path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(slug)
            .to_string();
        let summary = PostSummary::from_filename(&filename);
        let keywords = raw
            .lines()
            .next()
            .map(parse_keyword_line)
            .unwrap_or_default();

        Ok(Some(Post {
            slug: summary.slug,
            title: summary.title,
            date: summary.date,
            content: renderer.render(&raw),
            keywords,
        }))
    }
}

/// Resolve a slug to its source file, trying `.md` before `.markdown`
fn find_source(posts_dir: &Path, slug: &str) -> Option<PathBuf> {
    // Slugs come from URL path segments; keep lookups inside the posts
    // directory.
    if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
        return None;
    }

    for ext in ["md", "markdown"] {
        let candidate = posts_dir.join(format!("{slug}.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_renders_existing_post() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("2025-12-09_welcome.md"),
            "<!-- keywords: intro -->\n# Welcome\n\nHello there.\n",
        )
        .unwrap();

        let renderer = MarkdownRenderer::new();
        let post = Post::load(dir.path(), "2025-12-09_welcome", &renderer)
            .unwrap()
            .unwrap();

        assert_eq!(post.slug, "2025-12-09_welcome");
        assert_eq!(post.title, "Welcome");
        assert_eq!(post.date, "2025-12-09");
        assert_eq!(post.keywords, vec!["intro"]);
        assert!(post.content.contains("<h1>Welcome</h1>"));
        assert!(post.content.contains("<p>Hello there.</p>"));
    }

    #[test]
    fn test_load_missing_slug_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = MarkdownRenderer::new();
        assert!(Post::load(dir.path(), "ghost", &renderer).unwrap().is_none());
    }

    #[test]
    fn test_markdown_extension_fallback() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.markdown"), "# Notes\n").unwrap();

        let renderer = MarkdownRenderer::new();
        let post = Post::load(dir.path(), "notes", &renderer).unwrap().unwrap();
        assert_eq!(post.title, "Notes");
    }

    #[test]
    fn test_traversal_slugs_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = MarkdownRenderer::new();
        for slug in ["../etc/passwd", ".hidden", "a/b", ""] {
            assert!(Post::load(dir.path(), slug, &renderer).unwrap().is_none());
        }
    }
}
