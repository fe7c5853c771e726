//! Scaffold a new site directory

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

const SAMPLE_SITE_CONFIG: &str = r#"title: My Portfolio
author: Your Name
description: Things I build and write about
language: en
url: http://localhost:4000

posts_dir: posts
static_dir: static
catalog_file: projects.yml

server:
  ip: localhost
  port: 4000
"#;

const SAMPLE_CATALOG: &str = r#"- title: This Website
  badges: [Rust, Axum]
  description: The site you are looking at, rendered from markdown.
  link: /blog
  button_label: Read the blog
"#;

const SAMPLE_MANIFEST: &str = r#"{
  "name": "My Portfolio",
  "short_name": "Portfolio",
  "start_url": "/",
  "display": "standalone"
}
"#;

const SAMPLE_STYLESHEET: &str = r#"body {
  max-width: 48rem;
  margin: 0 auto;
  padding: 0 1rem;
  font-family: system-ui, sans-serif;
  line-height: 1.6;
}

.badge {
  display: inline-block;
  padding: 0 0.4em;
  border-radius: 4px;
  background: #eee;
  font-size: 0.85em;
}
"#;

/// Create the content layout for a new site
pub fn run(target: &Path) -> Result<()> {
    if target.join("site.yml").exists() {
        bail!("{:?} already contains a site", target);
    }

    let static_dir = target.join("static");
    fs::create_dir_all(target.join("posts"))?;
    fs::create_dir_all(static_dir.join("css"))?;
    fs::create_dir_all(static_dir.join("js"))?;

    fs::write(target.join("site.yml"), SAMPLE_SITE_CONFIG)?;
    fs::write(target.join("projects.yml"), SAMPLE_CATALOG)?;
    fs::write(static_dir.join("manifest.json"), SAMPLE_MANIFEST)?;
    fs::write(static_dir.join("css").join("style.css"), SAMPLE_STYLESHEET)?;
    fs::write(static_dir.join("js").join("animations.js"), "// page animations\n")?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let welcome = target.join("posts").join(format!("{}_welcome.md", today));
    fs::write(
        &welcome,
        "<!-- keywords: meta, welcome -->\n\n# Welcome\n\nThis is your first post.\n",
    )?;

    Ok(())
}
