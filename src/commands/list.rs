//! List site content

use anyhow::{bail, Result};

use crate::catalog::ProjectCatalog;
use crate::content::build_index;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = build_index(&site.posts_dir, None);
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = if post.date.is_empty() {
                    "(no date)".to_string()
                } else {
                    post.date
                };
                println!("  {} - {} [{}]", date, post.title, post.filename);
            }
        }
        "project" | "projects" => {
            let catalog = ProjectCatalog::load(site.catalog_path())?;
            let projects = catalog.filter(None);
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!(
                    "  {} - {} [{}]",
                    project.slug,
                    project.title,
                    project.badges.join(", ")
                );
            }
        }
        other => {
            bail!("unknown list type: {} (expected post or project)", other);
        }
    }

    Ok(())
}
