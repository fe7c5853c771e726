//! Post directory scanner

use std::path::Path;
use walkdir::WalkDir;

/// List the markdown entry names directly inside `dir`, non-recursive.
///
/// A missing directory yields an empty list rather than an error; the blog
/// simply renders with zero posts.
pub fn scan_posts(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && is_markdown_file(path) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }

    files
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let posts = scan_posts(&dir.path().join("no-such-dir"));
        assert!(posts.is_empty());
    }

    #[test]
    fn test_only_markdown_files_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-01-01_a.md"), "a").unwrap();
        fs::write(dir.path().join("notes.markdown"), "b").unwrap();
        fs::write(dir.path().join("style.css"), "c").unwrap();
        fs::write(dir.path().join("README"), "d").unwrap();

        let mut posts = scan_posts(dir.path());
        posts.sort();
        assert_eq!(posts, vec!["2024-01-01_a.md", "notes.markdown"]);
    }

    #[test]
    fn test_subdirectories_are_not_descended() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.md"), "top").unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts").join("nested.md"), "nested").unwrap();

        let posts = scan_posts(dir.path());
        assert_eq!(posts, vec!["top.md"]);
    }
}
