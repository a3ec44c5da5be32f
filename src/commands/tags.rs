//! Tag usage across content

use anyhow::Result;

use crate::content::{tag_counts, ContentItem, Family};
use crate::Folio;

/// Print tags by usage; all families when `family` is `None`
pub fn run(folio: &Folio, family: Option<Family>) -> Result<()> {
    let store = folio.store();

    let mut items = Vec::new();
    if matches!(family, None | Some(Family::Post)) {
        items.extend(store.posts()?);
    }
    if matches!(family, None | Some(Family::Project)) {
        items.extend(store.projects()?);
    }
    if matches!(family, None | Some(Family::LearningPost)) {
        items.extend(store.list_all_learning()?);
    }

    print!("{}", format_tags(&items));
    Ok(())
}

/// Tag tally, most used first
pub fn format_tags(items: &[ContentItem]) -> String {
    let counts = tag_counts(items);
    let mut out = format!("Tags ({}):\n", counts.len());
    for (tag, count) in counts {
        out.push_str(&format!("  {} ({})\n", tag, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use std::path::PathBuf;

    fn tagged(slug: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            slug: slug.to_string(),
            family: Family::Post,
            journey: None,
            matter: FrontMatter {
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
            date: None,
            body: String::new(),
            source: PathBuf::from(format!("posts/{}.md", slug)),
        }
    }

    #[test]
    fn test_format_tags() {
        let items = vec![
            tagged("one", &["rust", "azure"]),
            tagged("two", &["azure"]),
        ];
        assert_eq!(
            format_tags(&items),
            "Tags (2):\n  azure (2)\n  rust (1)\n"
        );
    }

    #[test]
    fn test_format_untagged() {
        assert_eq!(format_tags(&[tagged("plain", &[])]), "Tags (0):\n");
    }
}
