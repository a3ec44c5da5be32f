//! folio: content store for a markdown portfolio site
//!
//! Blog posts, projects and learning-journey posts live as markdown files
//! with YAML front-matter under a content directory. This crate discovers
//! and parses them and answers sorted listings and slug lookups.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use content::{Collection, ContentItem, ContentStore, Family, FrontMatter};
pub use error::StoreError;

use anyhow::Result;
use std::path::Path;

/// A portfolio site on disk
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
}

impl Folio {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Content store over this site's content directory
    pub fn store(&self) -> ContentStore {
        ContentStore::with_layout(&self.content_dir, self.config.layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_without_config() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("content"));
        assert_eq!(folio.store().root(), dir.path().join("content"));
    }

    #[test]
    fn test_site_with_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: data\nprojects_dir: work\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("data/work")).unwrap();
        fs::write(
            dir.path().join("data/work/scanner.md"),
            "---\ntitle: Scanner\ndate: 2025-03-03\n---\nPort scanner\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let store = folio.store();
        let projects = store.projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title(), "Scanner");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "content_dir: [\n").unwrap();
        assert!(Folio::new(dir.path()).is_err());
    }
}
