//! Front-matter parsing and schema validation

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use super::PostData;
use crate::error::ValidationError;

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

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(tag) = seq.next_element::<String>()? {
                tags.push(tag);
            }
            Ok(tags)
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

/// Raw front-matter of a post, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<serde_yaml::Value>,
    #[serde(rename = "heroImage")]
    pub hero_image: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split YAML front-matter from the body
    ///
    /// Content without a `---` block yields empty front-matter, which then
    /// fails validation on the first required field.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Empty block: closing fence directly after the opening one
        if let Some(body) = rest.strip_prefix("---") {
            return Ok((FrontMatter::default(), body.trim_start_matches(['\n', '\r'])));
        }

        let Some(end_pos) = rest.find("\n---") else {
            return Ok((FrontMatter::default(), content));
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml)?;
        Ok((fm, body))
    }

    /// Check the schema and coerce `pubDate`
    pub fn validate(self, entry: &str) -> Result<PostData, ValidationError> {
        let missing = |field| ValidationError::MissingField {
            entry: entry.to_string(),
            field,
        };

        let title = self.title.ok_or_else(|| missing("title"))?;
        let description = self.description.ok_or_else(|| missing("description"))?;
        let raw_date = self.pub_date.ok_or_else(|| missing("pubDate"))?;
        let pub_date = coerce_date(&raw_date)
            .map_err(|reason| ValidationError::invalid(entry, "pubDate", reason))?;

        Ok(PostData {
            title,
            description,
            pub_date,
            hero_image: self.hero_image,
            tags: self.tags,
            extra: self.extra,
        })
    }
}

/// Coerce a front-matter value into a UTC timestamp
///
/// Strings are parsed in the formats authors actually write; integers are
/// epoch milliseconds.
pub fn coerce_date(value: &serde_yaml::Value) -> Result<DateTime<Utc>, String> {
    match value {
        serde_yaml::Value::String(s) => {
            parse_date_string(s).ok_or_else(|| format!("unparseable date `{}`", s))
        }
        serde_yaml::Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| format!("timestamp out of range: {}", n)),
        serde_yaml::Value::Null => Err("date is empty".to_string()),
        other => Err(format!("expected a date, found {:?}", other)),
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%b %d %Y", "%B %d %Y", "%b %d, %Y", "%B %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello Rustzen
description: 第一篇文章
pubDate: 2024-01-15
heroImage: ../../assets/hero.png
tags:
  - rust
  - axum
series: rustzen
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello Rustzen"));
        assert_eq!(fm.tags, vec!["rust", "axum"]);
        assert!(fm.extra.contains_key("series"));
        assert!(body.starts_with("This is the content."));

        let data = fm.validate("hello.zh").unwrap();
        assert_eq!(data.description, "第一篇文章");
        assert_eq!(data.pub_date.format("%Y-%m-%d").to_string(), "2024-01-15");
        assert_eq!(data.hero_image.as_deref(), Some("../../assets/hero.png"));
    }

    #[test]
    fn test_single_string_tag() {
        let content = "---\ntitle: T\ndescription: D\npubDate: 2024-01-15\ntags: rust\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["rust"]);
    }

    #[test]
    fn test_missing_required_field() {
        let content = "---\ntitle: No description\npubDate: 2024-01-15\n---\nbody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        let err = fm.validate("broken").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField { field: "description", .. }
        ));
    }

    #[test]
    fn test_no_frontmatter_fails_validation() {
        let (fm, body) = FrontMatter::parse("Just prose.\n").unwrap();
        assert_eq!(body, "Just prose.\n");
        assert!(matches!(
            fm.validate("prose"),
            Err(ValidationError::MissingField { field: "title", .. })
        ));
    }

    #[test]
    fn test_wrong_type_is_a_syntax_error() {
        let content = "---\ntitle: [not, a, string]\ndescription: D\npubDate: 2024-01-15\n---\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_unparseable_pub_date() {
        let content = "---\ntitle: T\ndescription: D\npubDate: someday\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(matches!(
            fm.validate("late"),
            Err(ValidationError::InvalidField { field: "pubDate", .. })
        ));
    }

    #[test]
    fn test_coerce_date_formats() {
        let day = |v: &str| {
            coerce_date(&serde_yaml::Value::String(v.to_string()))
                .unwrap()
                .format("%Y-%m-%d %H:%M")
                .to_string()
        };
        assert_eq!(day("2024-03-01"), "2024-03-01 00:00");
        assert_eq!(day("2024/03/01 08:30"), "2024-03-01 08:30");
        assert_eq!(day("2024-03-01T08:30:00+08:00"), "2024-03-01 00:30");
        assert_eq!(day("Jul 08 2022"), "2022-07-08 00:00");

        let millis = coerce_date(&serde_yaml::Value::Number(1_704_067_200_000i64.into())).unwrap();
        assert_eq!(millis.format("%Y-%m-%d").to_string(), "2024-01-01");

        assert!(coerce_date(&serde_yaml::Value::Bool(true)).is_err());
    }
}
