//! Show a single item

use anyhow::{bail, Result};

use crate::content::{Collection, ContentItem, Family};
use crate::helpers::long_date;
use crate::Folio;

/// Print one item's metadata and body
pub fn run(
    folio: &Folio,
    family: Family,
    slug: &str,
    journey: Option<&str>,
    json: bool,
) -> Result<()> {
    let collection = match (family, journey) {
        (Family::Post, _) => Collection::Posts,
        (Family::Project, _) => Collection::Projects,
        (Family::LearningPost, Some(journey)) => Collection::journey(journey),
        (Family::LearningPost, None) => bail!("Learning posts need --journey"),
    };

    let item = folio.store().read(&collection, slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        print!("{}", format_item(&item));
    }

    Ok(())
}

/// Header lines followed by the raw markdown body
pub fn format_item(item: &ContentItem) -> String {
    let mut out = format!("Title: {}\n", item.title());
    if let Some(date) = &item.date {
        out.push_str(&format!("Date: {}\n", long_date(date)));
    }
    if !item.description().is_empty() {
        out.push_str(&format!("Description: {}\n", item.description()));
    }
    if item.family == Family::Post {
        out.push_str(&format!("Category: {}\n", item.category()));
    }
    if let Some(read_time) = &item.matter.read_time {
        out.push_str(&format!("Read time: {}\n", read_time));
    }
    if let Some(status) = &item.matter.status {
        out.push_str(&format!("Status: {}\n", status));
    }
    if !item.tags().is_empty() {
        out.push_str(&format!("Tags: {}\n", item.tags().join(", ")));
    }
    if !item.matter.technologies.is_empty() {
        out.push_str(&format!(
            "Technologies: {}\n",
            item.matter.technologies.join(", ")
        ));
    }
    for (label, url) in [
        ("GitHub", &item.matter.github_url),
        ("Demo", &item.matter.demo_url),
    ] {
        if let Some(url) = url {
            out.push_str(&format!("{}: {}\n", label, url));
        }
    }
    out.push_str("---\n");
    out.push_str(&item.body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use crate::helpers::parse_date;
    use std::path::PathBuf;

    #[test]
    fn test_format_post() {
        let item = ContentItem {
            slug: "hello".to_string(),
            family: Family::Post,
            journey: None,
            matter: FrontMatter {
                title: Some("Hello".to_string()),
                date: Some("2025-09-15".to_string()),
                tags: vec!["rust".to_string(), "security".to_string()],
                ..Default::default()
            },
            date: parse_date("2025-09-15"),
            body: "# Hi\n".to_string(),
            source: PathBuf::from("posts/hello.md"),
        };
        assert_eq!(
            format_item(&item),
            "Title: Hello\nDate: September 15, 2025\nCategory: Blog\nTags: rust, security\n---\n# Hi\n"
        );
    }

    #[test]
    fn test_format_project_links() {
        let item = ContentItem {
            slug: "scanner".to_string(),
            family: Family::Project,
            journey: None,
            matter: FrontMatter {
                title: Some("Scanner".to_string()),
                technologies: vec!["Rust".to_string()],
                github_url: Some("https://github.com/example/scanner".to_string()),
                ..Default::default()
            },
            date: None,
            body: String::new(),
            source: PathBuf::from("projects/scanner.md"),
        };
        assert_eq!(
            format_item(&item),
            "Title: Scanner\nTechnologies: Rust\nGitHub: https://github.com/example/scanner\n---\n"
        );
    }
}
