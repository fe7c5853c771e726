//! folio: a server-rendered personal portfolio site
//!
//! This crate serves a small personal website (home, CV, project catalog)
//! together with a markdown-backed blog. Pages are rendered per request with
//! Tera templates; the markdown files on disk are the sole source of truth.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site instance: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the markdown blog posts
    pub posts_dir: PathBuf,
    /// Directory holding static assets (including manifest.json)
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            static_dir,
        })
    }

    /// Path of the declarative project catalog file
    pub fn catalog_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.catalog_file)
    }
}
