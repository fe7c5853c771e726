//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: Option<Vec<String>>,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub posts_dir: String,
    pub static_dir: String,
    pub catalog_file: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),
            description: String::new(),
            keywords: None,
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),

            posts_dir: "posts".to_string(),
            static_dir: "static".to_string(),
            catalog_file: "projects.yml".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// HTTP server bind defaults, overridable from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.catalog_file, "projects.yml");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Jane Doe
author: Jane Doe
description: Systems programmer
posts_dir: writing
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Jane Doe");
        assert_eq!(config.posts_dir, "writing");
        assert_eq!(config.server.port, 8080);
        // Unset fields keep their defaults
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(SiteConfig::load("/nonexistent/site.yml").is_err());
    }
}
