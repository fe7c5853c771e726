//! Create a new date-prefixed post

use anyhow::{bail, Result};
use std::fs;

use crate::Site;

/// Create `posts/<today>_<title>.md`, optionally with a keyword comment
pub fn run(site: &Site, title: &str, keywords: &[String]) -> Result<()> {
    let today = chrono::Local::now().format("%Y-%m-%d");

    // The index derives titles by splitting on underscores, so the filename
    // uses underscores between words.
    let stem = slug::slugify(title).replace('-', "_");
    if stem.is_empty() {
        bail!("title {:?} leaves nothing usable for a filename", title);
    }

    let filename = format!("{}_{}.md", today, stem);

    fs::create_dir_all(&site.posts_dir)?;
    let path = site.posts_dir.join(&filename);
    if path.exists() {
        bail!("file already exists: {:?}", path);
    }

    let mut content = String::new();
    if !keywords.is_empty() {
        content.push_str(&format!("<!-- keywords: {} -->\n", keywords.join(", ")));
    }
    content.push_str(&format!("\n# {}\n", title));

    fs::write(&path, content)?;
    println!("Created: {:?}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::build_index;

    fn test_site() -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_new_post_round_trips_through_the_index() {
        let (_dir, site) = test_site();
        run(&site, "Hello World", &["rust".to_string(), "intro".to_string()]).unwrap();

        let posts = build_index(&site.posts_dir, None);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello World");
        assert_eq!(posts[0].keywords, vec!["rust", "intro"]);
        assert!(!posts[0].date.is_empty());
    }

    #[test]
    fn test_new_post_without_keywords_has_no_comment_line() {
        let (_dir, site) = test_site();
        run(&site, "Plain", &[]).unwrap();
        let posts = build_index(&site.posts_dir, None);
        assert!(posts[0].keywords.is_empty());
    }

    #[test]
    fn test_duplicate_post_is_refused() {
        let (_dir, site) = test_site();
        run(&site, "Twice", &[]).unwrap();
        assert!(run(&site, "Twice", &[]).is_err());
    }

    #[test]
    fn test_unusable_title_is_refused() {
        let (_dir, site) = test_site();
        assert!(run(&site, "???", &[]).is_err());
    }
}
