//! Site configuration (_config.yml)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Collection;
use crate::i18n::{Language, LocaleConvention};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Locale
    pub default_language: Language,
    pub locale_convention: LocaleConvention,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub i18n_dir: String,
    pub collections: CollectionDirs,

    // Queries
    pub default_limit: usize,
    pub per_page: usize,
    pub date_format: String,

    // Feed
    pub feed: FeedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "idaibin.dev".to_string(),
            author: "idaibin".to_string(),
            url: "https://idaibin.dev".to_string(),

            default_language: Language::Zh,
            locale_convention: LocaleConvention::FilenameSuffix,

            content_dir: "src/content".to_string(),
            public_dir: "public".to_string(),
            i18n_dir: "i18n".to_string(),
            collections: CollectionDirs::default(),

            default_limit: 100,
            per_page: 10,
            date_format: "YYYY-MM-DD".to_string(),

            feed: FeedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.default_limit == 0 {
            bail!("default_limit must be a positive integer");
        }
        if self.per_page == 0 {
            bail!("per_page must be a positive integer");
        }
        Ok(())
    }
}

/// Directory names of the content collections, relative to `content_dir`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDirs {
    pub blog: String,
    #[serde(rename = "rustzenAdmin", alias = "rustzen_admin")]
    pub rustzen_admin: String,
}

impl Default for CollectionDirs {
    fn default() -> Self {
        Self {
            blog: "blog".to_string(),
            rustzen_admin: "rustzen-admin".to_string(),
        }
    }
}

impl CollectionDirs {
    pub fn dir(&self, collection: Collection) -> &str {
        match collection {
            Collection::Blog => &self.blog,
            Collection::RustzenAdmin => &self.rustzen_admin,
        }
    }
}

/// RSS feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Output path relative to `public_dir`
    pub path: String,
    /// Feed language; `en` by default, `default_language` when set to null
    pub language: Option<Language>,
    /// Maximum number of items, `default_limit` when unset
    pub limit: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "rss.xml".to_string(),
            language: Some(Language::En),
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.default_language, Language::Zh);
        assert_eq!(config.locale_convention, LocaleConvention::FilenameSuffix);
        assert_eq!(config.default_limit, 100);
        assert_eq!(config.feed.language, Some(Language::En));
        assert_eq!(config.collections.dir(Collection::RustzenAdmin), "rustzen-admin");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
url: https://example.com
default_language: en
locale_convention: slug_suffix
collections:
  rustzenAdmin: projects/rustzen
feed:
  language: zh
  limit: 20
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.locale_convention, LocaleConvention::SlugSuffix);
        assert_eq!(config.collections.dir(Collection::Blog), "blog");
        assert_eq!(
            config.collections.dir(Collection::RustzenAdmin),
            "projects/rustzen"
        );
        assert_eq!(config.feed.language, Some(Language::Zh));
        assert_eq!(config.feed.path, "rss.xml");
    }

    #[test]
    fn test_rejects_zero_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "default_limit: 0\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
