//! Content convention checks
//!
//! The blog index sorts by filename, which only matches chronological order
//! when every filename starts with a real `YYYY-MM-DD` date. This command
//! surfaces the files that break the convention instead of letting them
//! silently sort wrong, and validates the project catalog on the side.

use anyhow::Result;
use std::collections::HashSet;

use crate::catalog::ProjectCatalog;
use crate::content::{extract_keywords, is_calendar_date, scan_posts, PostSummary};
use crate::Site;

/// Check posts and catalog against the site conventions.
///
/// Returns the number of problems found; the CLI maps a non-zero count to a
/// failing exit status.
pub fn run(site: &Site) -> Result<usize> {
    let mut problems = 0;

    let mut filenames = scan_posts(&site.posts_dir);
    filenames.sort();
    for filename in &filenames {
        let summary = PostSummary::from_filename(filename);

        if summary.date.is_empty() {
            println!("  {}: no date prefix; sorts out of chronological order", filename);
            problems += 1;
        } else if !is_calendar_date(&summary.date) {
            println!(
                "  {}: prefix {:?} is not a YYYY-MM-DD date",
                filename, summary.date
            );
            problems += 1;
        }

        if let Err(e) = extract_keywords(&site.posts_dir.join(filename)) {
            println!("  {}: first line is unreadable ({})", filename, e);
            problems += 1;
        }
    }

    let catalog_path = site.catalog_path();
    if catalog_path.exists() {
        let records = ProjectCatalog::load_records(&catalog_path)?;
        let mut seen = HashSet::new();
        for record in &records {
            let slug = record.effective_slug();
            if !seen.insert(slug.clone()) {
                println!("  {}: duplicate project slug {:?}", record.title, slug);
                problems += 1;
            }
        }
    }

    if problems == 0 {
        println!("No problems found.");
    } else {
        println!("{} problem(s) found.", problems);
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_in(dir: &tempfile::TempDir) -> Site {
        Site::new(dir.path()).unwrap()
    }

    #[test]
    fn test_clean_site_has_no_problems() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts").join("2024-02-29_leap.md"), "ok").unwrap();
        assert_eq!(run(&site_in(&dir)).unwrap(), 0);
    }

    #[test]
    fn test_nonconforming_filenames_are_flagged() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts").join("no_date_here.md"), "x").unwrap();
        fs::write(dir.path().join("posts").join("2024-13-01_bad.md"), "y").unwrap();
        assert_eq!(run(&site_in(&dir)).unwrap(), 2);
    }

    #[test]
    fn test_duplicate_catalog_slugs_are_flagged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("projects.yml"),
            "- title: Same\n- title: Same\n",
        )
        .unwrap();
        assert_eq!(run(&site_in(&dir)).unwrap(), 1);
    }

    #[test]
    fn test_missing_directories_are_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run(&site_in(&dir)).unwrap(), 0);
    }
}
