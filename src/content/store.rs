//! Content store - discovers and loads posts, projects and learning posts
//!
//! Every query re-reads the filesystem; nothing is cached between calls.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::FrontMatterError;
use super::item::sort_by_date_desc;
use super::{Collection, ContentItem, Family, FrontMatter};
use crate::error::{Result, StoreError};
use crate::helpers::parse_date;

/// Directory names of each family under the content root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    pub posts_dir: String,
    pub projects_dir: String,
    pub learning_dir: String,
    /// Markdown file extension, without the dot
    pub extension: String,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            projects_dir: "projects".to_string(),
            learning_dir: "learning".to_string(),
            extension: "md".to_string(),
        }
    }
}

/// How content files sit under a family root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping<'a> {
    /// `<root>/<slug>.md`
    Flat,
    /// `<root>/<slug>.md`, where `root` is the named journey's directory
    Journey(&'a str),
    /// `<root>/<journey>/<slug>.md`
    ByJourney,
}

/// A discovered content file, not yet parsed
#[derive(Debug, Clone)]
struct Entry {
    journey: Option<String>,
    slug: String,
    path: PathBuf,
}

/// Read-only store over a content directory
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    layout: ContentLayout,
}

impl ContentStore {
    /// Create a store over `root` with the default layout
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_layout(root, ContentLayout::default())
    }

    pub fn with_layout<P: AsRef<Path>>(root: P, layout: ContentLayout) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &ContentLayout {
        &self.layout
    }

    /// Root directory of a family
    pub fn family_root(&self, family: Family) -> PathBuf {
        let dir = match family {
            Family::Post => &self.layout.posts_dir,
            Family::Project => &self.layout.projects_dir,
            Family::LearningPost => &self.layout.learning_dir,
        };
        self.root.join(dir)
    }

    fn collection_dir(&self, collection: &Collection) -> PathBuf {
        let root = self.family_root(collection.family());
        match collection {
            Collection::Journey(name) => root.join(name),
            _ => root,
        }
    }

    /// Names of all learning journeys, in directory-listing order
    pub fn list_journeys(&self) -> Result<Vec<String>> {
        let root = self.family_root(Family::LearningPost);
        let mut journeys = Vec::new();
        for entry in list_dir(&root)? {
            if !entry.file_type().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                journeys.push(name.to_string());
            }
        }
        Ok(journeys)
    }

    /// Slugs of a collection, in directory-listing order (not by date)
    pub fn list_slugs(&self, collection: &Collection) -> Result<Vec<String>> {
        if !self.is_addressable(collection) {
            return Ok(Vec::new());
        }
        let entries = self.discover_files(&self.collection_dir(collection), None)?;
        Ok(entries.into_iter().map(|e| e.slug).collect())
    }

    /// Load one item, reporting why it could not be loaded
    ///
    /// A trailing markdown extension on `slug` is ignored, so `hello` and
    /// `hello.md` name the same item.
    pub fn read(&self, collection: &Collection, slug: &str) -> Result<ContentItem> {
        let slug = self.strip_extension(slug);
        let not_found = || StoreError::NotFound {
            collection: collection.to_string(),
            slug: slug.to_string(),
        };

        if !is_safe_segment(slug) || !self.is_addressable(collection) {
            return Err(not_found());
        }

        let path = self
            .collection_dir(collection)
            .join(format!("{}.{}", slug, self.layout.extension));
        if !path.is_file() {
            return Err(not_found());
        }

        let entry = Entry {
            journey: collection.journey_name().map(str::to_string),
            slug: slug.to_string(),
            path,
        };
        self.load(entry, collection.family())
    }

    /// Look up one item by slug
    ///
    /// Read and parse failures are logged and reported as not found.
    pub fn get(&self, collection: &Collection, slug: &str) -> Option<ContentItem> {
        match self.read(collection, slug) {
            Ok(item) => Some(item),
            Err(e) if e.is_not_found() => {
                tracing::debug!("{}", e);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to load {}/{}: {}", collection, slug, e);
                None
            }
        }
    }

    /// Every loadable item of a collection, newest first
    ///
    /// Files that fail to load are logged and left out.
    pub fn list_all(&self, collection: &Collection) -> Result<Vec<ContentItem>> {
        match collection {
            Collection::Posts | Collection::Projects => {
                let family = collection.family();
                self.load_family(&self.family_root(family), family, Grouping::Flat)
            }
            Collection::Journey(name) => {
                if !self.is_addressable(collection) {
                    return Ok(Vec::new());
                }
                self.load_family(
                    &self.collection_dir(collection),
                    Family::LearningPost,
                    Grouping::Journey(name.as_str()),
                )
            }
        }
    }

    /// Learning posts of every journey merged, newest first
    pub fn list_all_learning(&self) -> Result<Vec<ContentItem>> {
        let family = Family::LearningPost;
        self.load_family(&self.family_root(family), family, Grouping::ByJourney)
    }

    /// Slugs to pre-render detail pages for, newest first
    pub fn static_params(&self, collection: &Collection) -> Result<Vec<String>> {
        Ok(self
            .list_all(collection)?
            .into_iter()
            .map(|item| item.slug)
            .collect())
    }

    pub fn posts(&self) -> Result<Vec<ContentItem>> {
        self.list_all(&Collection::Posts)
    }

    pub fn projects(&self) -> Result<Vec<ContentItem>> {
        self.list_all(&Collection::Projects)
    }

    pub fn journey(&self, journey: &str) -> Result<Vec<ContentItem>> {
        self.list_all(&Collection::journey(journey))
    }

    pub fn post(&self, slug: &str) -> Option<ContentItem> {
        self.get(&Collection::Posts, slug)
    }

    pub fn project(&self, slug: &str) -> Option<ContentItem> {
        self.get(&Collection::Projects, slug)
    }

    pub fn learning_post(&self, journey: &str, slug: &str) -> Option<ContentItem> {
        self.get(&Collection::journey(journey), slug)
    }

    /// Load a whole family laid out under `root`
    ///
    /// Posts and projects are `Flat`; learning posts are `ByJourney`, or
    /// `Journey` when `root` is a single journey's directory.
    pub fn load_family(
        &self,
        root: &Path,
        family: Family,
        grouping: Grouping<'_>,
    ) -> Result<Vec<ContentItem>> {
        let entries = match grouping {
            Grouping::Flat => self.discover_files(root, None)?,
            Grouping::Journey(journey) => self.discover_files(root, Some(journey))?,
            Grouping::ByJourney => {
                let mut entries = Vec::new();
                for dir in list_dir(root)? {
                    if !dir.file_type().is_dir() {
                        continue;
                    }
                    let Some(journey) = dir.file_name().to_str() else {
                        continue;
                    };
                    entries.extend(self.discover_files(dir.path(), Some(journey))?);
                }
                entries
            }
        };

        Ok(self.load_entries(entries, family))
    }

    fn load_entries(&self, entries: Vec<Entry>, family: Family) -> Vec<ContentItem> {
        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = entry.path.clone();
            match self.load(entry, family) {
                Ok(item) => items.push(item),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
            }
        }

        sort_by_date_desc(&mut items);
        items
    }

    /// Markdown files directly inside `dir`
    fn discover_files(&self, dir: &Path, journey: Option<&str>) -> Result<Vec<Entry>> {
        let suffix = format!(".{}", self.layout.extension);
        let mut entries = Vec::new();

        for entry in list_dir(dir)? {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                tracing::debug!("Ignoring non UTF-8 file name {:?}", entry.path());
                continue;
            };
            match name.strip_suffix(&suffix) {
                Some(slug) if !slug.is_empty() => entries.push(Entry {
                    journey: journey.map(str::to_string),
                    slug: slug.to_string(),
                    path: entry.path().to_path_buf(),
                }),
                _ => {}
            }
        }

        tracing::debug!("Discovered {} files in {:?}", entries.len(), dir);
        Ok(entries)
    }

    /// Read and parse a single file
    fn load(&self, entry: Entry, family: Family) -> Result<ContentItem> {
        let Entry {
            journey,
            slug,
            path,
        } = entry;

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        let (matter, body) = FrontMatter::parse(&content).map_err(|e| match e {
            FrontMatterError::Unterminated => StoreError::Malformed {
                path: path.clone(),
                reason: e.to_string(),
            },
            FrontMatterError::Yaml(source) => StoreError::Yaml {
                path: path.clone(),
                source,
            },
        })?;

        let date = match matter.date.as_deref() {
            Some(value) => Some(parse_date(value).ok_or_else(|| StoreError::InvalidDate {
                path: path.clone(),
                value: value.to_string(),
            })?),
            None => None,
        };

        Ok(ContentItem {
            slug,
            family,
            journey,
            date,
            body: body.to_string(),
            matter,
            source: path,
        })
    }

    fn strip_extension<'s>(&self, slug: &'s str) -> &'s str {
        slug.strip_suffix(&format!(".{}", self.layout.extension))
            .unwrap_or(slug)
    }

    fn is_addressable(&self, collection: &Collection) -> bool {
        collection.journey_name().map_or(true, is_safe_segment)
    }
}

/// Entries directly inside `dir`, in directory-listing order
///
/// A missing directory has no entries. Unreadable children are logged and
/// skipped; failing to read `dir` itself is an error.
fn list_dir(dir: &Path) -> Result<Vec<walkdir::DirEntry>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) if e.depth() == 0 => return Err(std::io::Error::from(e).into()),
            Err(e) => tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e),
        }
    }
    Ok(entries)
}

/// A single path component that cannot climb out of its directory
fn is_safe_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}
