//! Content module - posts, projects and learning journeys

pub mod frontmatter;
mod item;
pub mod store;

pub use frontmatter::FrontMatter;
pub use item::{featured, sort_by_date_desc, tag_counts, Collection, ContentItem, Family};
pub use store::{ContentLayout, ContentStore, Grouping};
