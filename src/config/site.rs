//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::ContentLayout;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    pub posts_dir: String,
    pub projects_dir: String,
    pub learning_dir: String,

    // Writing
    pub markdown_ext: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            posts_dir: "posts".to_string(),
            projects_dir: "projects".to_string(),
            learning_dir: "learning".to_string(),

            markdown_ext: "md".to_string(),

            extra: HashMap::new(),
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

    /// Directory layout of the content families
    pub fn layout(&self) -> ContentLayout {
        ContentLayout {
            posts_dir: self.posts_dir.clone(),
            projects_dir: self.projects_dir.clone(),
            learning_dir: self.learning_dir.clone(),
            extension: self.markdown_ext.trim_start_matches('.').to_string(),
        }
    }
}
