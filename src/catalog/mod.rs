//! Project catalog
//!
//! Projects live in a declarative YAML file (`projects.yml` by default)
//! loaded once at startup. The catalog is immutable afterwards and shared
//! read-only across requests.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single project entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    /// URL identifier; derived from the title when left empty
    pub slug: String,

    pub title: String,

    /// Short tags shown as badges on the card
    pub badges: Vec<String>,

    pub description: String,

    /// Target of the call-to-action button
    pub link: String,

    pub button_label: String,

    /// Icon asset name, resolved under the static directory
    pub icon: String,

    /// Whether the link leaves the site (opens in a new tab)
    pub external: bool,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            slug: String::new(),
            title: String::new(),
            badges: Vec::new(),
            description: String::new(),
            link: String::new(),
            button_label: "View project".to_string(),
            icon: String::new(),
            external: false,
        }
    }
}

impl ProjectRecord {
    /// The slug this record is keyed under
    pub fn effective_slug(&self) -> String {
        if self.slug.is_empty() {
            slug::slugify(&self.title)
        } else {
            self.slug.clone()
        }
    }

    /// Case-insensitive substring match over title, badges, and description
    pub fn matches(&self, query: &str) -> bool {
        let haystack = format!(
            "{} {} {}",
            self.title,
            self.badges.join(" "),
            self.description
        )
        .to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

/// The loaded catalog, keyed by slug in file order
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: IndexMap<String, ProjectRecord>,
}

impl ProjectCatalog {
    /// Load the catalog from a YAML file.
    ///
    /// A missing file is an empty catalog (the projects page still renders);
    /// a file that exists but fails to parse aborts startup.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("project catalog {:?} not found; starting empty", path);
            return Ok(Self::default());
        }
        let records = Self::load_records(path)?;
        Ok(Self::from_records(records))
    }

    /// Read the raw record list without deduplication (used by `check`)
    pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectRecord>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read project catalog {:?}", path))?;
        let records: Vec<ProjectRecord> = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse project catalog {:?}", path))?;
        Ok(records)
    }

    /// Build the catalog from records, keeping the first of any duplicate slug
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut projects = IndexMap::new();
        for mut record in records {
            let slug = record.effective_slug();
            record.slug = slug.clone();
            if projects.contains_key(&slug) {
                tracing::warn!("duplicate project slug {:?}; keeping the first entry", slug);
                continue;
            }
            projects.insert(slug, record);
        }
        Self { projects }
    }

    /// Look up a project by slug
    pub fn get(&self, slug: &str) -> Option<&ProjectRecord> {
        self.projects.get(slug)
    }

    /// Projects matching the optional query, in file order.
    ///
    /// Pure and deterministic: the same query always yields the same list.
    pub fn filter(&self, query: Option<&str>) -> Vec<&ProjectRecord> {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => self
                .projects
                .values()
                .filter(|p| p.matches(query))
                .collect(),
            None => self.projects.values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
