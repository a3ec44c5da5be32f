//! Content item models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::FrontMatter;

/// The three kinds of content the site carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Post,
    Project,
    LearningPost,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Post => "post",
            Family::Project => "project",
            Family::LearningPost => "learning",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" | "posts" | "blog" => Ok(Family::Post),
            "project" | "projects" => Ok(Family::Project),
            "learning" | "learning-post" | "learning_post" => Ok(Family::LearningPost),
            other => Err(format!(
                "Unknown family: {}. Available: posts, projects, learning",
                other
            )),
        }
    }
}

/// A directory of content files that queries address
///
/// Learning posts only exist inside a journey, so the learning family is
/// addressed one journey at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    Posts,
    Projects,
    Journey(String),
}

impl Collection {
    pub fn journey(name: impl Into<String>) -> Self {
        Collection::Journey(name.into())
    }

    pub fn family(&self) -> Family {
        match self {
            Collection::Posts => Family::Post,
            Collection::Projects => Family::Project,
            Collection::Journey(_) => Family::LearningPost,
        }
    }

    pub fn journey_name(&self) -> Option<&str> {
        match self {
            Collection::Journey(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Posts => f.write_str("posts"),
            Collection::Projects => f.write_str("projects"),
            Collection::Journey(name) => write!(f, "learning/{}", name),
        }
    }
}

/// A post, project or learning post loaded from disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    /// Filename without the markdown extension
    pub slug: String,

    pub family: Family,

    /// Parent journey directory, learning posts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journey: Option<String>,

    /// Parsed front-matter
    pub matter: FrontMatter,

    /// `matter.date`, parsed. `None` when the file has no date.
    pub date: Option<NaiveDateTime>,

    /// Raw markdown after the front-matter block
    pub body: String,

    /// File the item was read from
    pub source: PathBuf,
}

impl ContentItem {
    /// Title from front-matter, falling back to the slug
    pub fn title(&self) -> &str {
        self.matter.title.as_deref().unwrap_or(&self.slug)
    }

    pub fn description(&self) -> &str {
        self.matter.description.as_deref().unwrap_or_default()
    }

    /// Category shown on the blog index; uncategorized posts are "Blog"
    pub fn category(&self) -> &str {
        self.matter.category.as_deref().unwrap_or("Blog")
    }

    pub fn is_featured(&self) -> bool {
        self.matter.featured
    }

    pub fn tags(&self) -> &[String] {
        &self.matter.tags
    }
}

/// Sort items newest first
///
/// The sort is stable: items with equal dates keep their discovery order.
/// Undated items go after every dated one.
pub fn sort_by_date_desc(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Split a listing into (featured, regular), preserving order in both
pub fn featured(items: &[ContentItem]) -> (Vec<&ContentItem>, Vec<&ContentItem>) {
    items.iter().partition(|item| item.is_featured())
}

/// Count tag usage across items, most used first
///
/// Tags with the same count keep the order they were first seen in.
pub fn tag_counts(items: &[ContentItem]) -> Vec<(String, usize)> {
    let mut counts: indexmap::IndexMap<String, usize> = indexmap::IndexMap::new();
    for item in items {
        for tag in item.tags() {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
