//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const DELIMITER: &str = "---";

/// Why a front-matter block could not be parsed
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front-matter block is not closed by a `---` line")]
    Unterminated,

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts any YAML scalar as a string, so `readTime: 5` reads as `"5"`
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a scalar value")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Reads a flag leniently: an empty value is `false`, and the strings
/// `"true"`/`"yes"` are `true`
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LenientBool;

    impl<'de> Visitor<'de> for LenientBool {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or a boolean-like scalar")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "on" | "1"
            ))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value != 0)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(false)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(LenientBool)
}

/// Front-matter of a post, project or learning post
///
/// `title`, `date` and `description` are expected on every file but are not
/// enforced; a missing key stays `None`. Keys not listed here land in `extra`
/// in the order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    // Blog posts
    #[serde(deserialize_with = "scalar_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub featured: bool,
    #[serde(rename = "readTime", deserialize_with = "scalar_string")]
    pub read_time: Option<String>,

    // Projects
    #[serde(deserialize_with = "scalar_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub features: Vec<String>,
    #[serde(rename = "githubUrl", deserialize_with = "scalar_string")]
    pub github_url: Option<String>,
    #[serde(rename = "demoUrl", deserialize_with = "scalar_string")]
    pub demo_url: Option<String>,

    // Learning posts
    #[serde(deserialize_with = "scalar_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub journey: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// A file that does not open with a `---` line has no front-matter and
    /// the whole text is the body. The line break after the closing `---`
    /// is consumed; the body is otherwise returned untouched.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = strip_opening_delimiter(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIMITER {
                let yaml = &rest[..offset];
                let body = &rest[offset + line.len()..];
                return Ok((Self::from_yaml(yaml)?, body));
            }
            offset += line.len();
        }

        Err(FrontMatterError::Unterminated)
    }

    fn from_yaml(yaml: &str) -> Result<Self, FrontMatterError> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let (first, rest) = match content.find('\n') {
        Some(pos) => (&content[..pos], &content[pos + 1..]),
        None => (content, ""),
    };
    (first.trim_end() == DELIMITER).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: "Post Title"
date: "2025-09-15"
tags: ["tag1", "tag2"]
description: "A short summary"
---
# Body markdown
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Post Title"));
        assert_eq!(fm.date.as_deref(), Some("2025-09-15"));
        assert_eq!(fm.tags, vec!["tag1", "tag2"]);
        assert_eq!(fm.description.as_deref(), Some("A short summary"));
        assert_eq!(body, "# Body markdown\n");
    }

    #[test]
    fn test_family_specific_keys() {
        let content = r#"---
title: Homelab
date: 2025-02-01
featured: true
readTime: 5
category: Security
technologies:
  - Rust
  - Proxmox
features: Backups
githubUrl: https://github.com/example/homelab
demoUrl: https://example.com
image: /img/homelab.png
status: completed
---
Body
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.featured);
        assert_eq!(fm.read_time.as_deref(), Some("5"));
        assert_eq!(fm.category.as_deref(), Some("Security"));
        assert_eq!(fm.technologies, vec!["Rust", "Proxmox"]);
        assert_eq!(fm.features, vec!["Backups"]);
        assert_eq!(
            fm.github_url.as_deref(),
            Some("https://github.com/example/homelab")
        );
        assert_eq!(fm.demo_url.as_deref(), Some("https://example.com"));
        assert_eq!(fm.image.as_deref(), Some("/img/homelab.png"));
        assert_eq!(fm.status.as_deref(), Some("completed"));
        assert!(fm.extra.is_empty());
    }

    #[test]
    fn test_unknown_keys_preserved_in_order() {
        let content = "---\ntitle: X\nzeta: 1\nalpha: two\n---\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        let keys: Vec<_> = fm.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(fm.extra["alpha"], serde_yaml::Value::from("two"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let (fm, body) = FrontMatter::parse("---\ncategory: Notes\n---\nHello").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(fm.date, None);
        assert_eq!(fm.description, None);
        assert!(fm.tags.is_empty());
        assert!(!fm.featured);
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nJust text\n").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "Just text\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Heading\n\nNo metadata here.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_crlf_delimiters() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_body_keeps_later_separators() {
        let content = "---\ntitle: Rules\n---\nabove\n\n---\n\nbelow\n";
        let (_, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(body, "above\n\n---\n\nbelow\n");
    }

    #[test]
    fn test_unterminated_block() {
        let err = FrontMatter::parse("---\ntitle: Oops\nno closing line\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FrontMatter::parse("---\ntitle: [unclosed\n---\nBody\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn test_non_mapping_block() {
        let err = FrontMatter::parse("---\n- just\n- a list\n---\nBody\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn test_featured_is_lenient() {
        let (fm, _) = FrontMatter::parse("---\ntitle: A\nfeatured:\n---\nB\n").unwrap();
        assert!(!fm.featured);

        let (fm, _) = FrontMatter::parse("---\ntitle: A\nfeatured: \"true\"\n---\nB\n").unwrap();
        assert!(fm.featured);

        let (fm, _) = FrontMatter::parse("---\ntitle: A\nfeatured: \"false\"\n---\nB\n").unwrap();
        assert!(!fm.featured);

        let (fm, _) = FrontMatter::parse("---\ntitle: A\nfeatured: 1\n---\nB\n").unwrap();
        assert!(fm.featured);
    }
}
