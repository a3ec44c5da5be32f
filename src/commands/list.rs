//! List site content

use anyhow::Result;

use crate::content::{ContentItem, Family};
use crate::helpers::short_date;
use crate::Folio;

/// List a family, newest first
pub fn run(folio: &Folio, family: Family, journey: Option<&str>, json: bool) -> Result<()> {
    let store = folio.store();

    let items = match (family, journey) {
        (Family::Post, _) => store.posts()?,
        (Family::Project, _) => store.projects()?,
        (Family::LearningPost, Some(journey)) => store.journey(journey)?,
        (Family::LearningPost, None) => store.list_all_learning()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let heading = match family {
        Family::Post => "Posts",
        Family::Project => "Projects",
        Family::LearningPost => "Learning posts",
    };
    println!("{} ({}):", heading, items.len());
    for item in &items {
        println!("  {}", format_line(item));
    }

    Ok(())
}

/// One listing line: date, title, location, featured marker
pub fn format_line(item: &ContentItem) -> String {
    let date = item
        .date
        .as_ref()
        .map(short_date)
        .unwrap_or_else(|| "----------".to_string());
    let location = match &item.journey {
        Some(journey) => format!("{}/{}", journey, item.slug),
        None => item.slug.clone(),
    };
    let marker = if item.is_featured() { " *" } else { "" };
    format!("{} - {} [{}]{}", date, item.title(), location, marker)
}
