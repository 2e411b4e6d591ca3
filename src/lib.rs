//! idaibin-blog: post query layer for a bilingual blog
//!
//! Posts live in two content collections (`blog` and `rustzenAdmin`), each
//! article as up to one Markdown/MDX file per language. This crate selects,
//! sorts and paginates them, resolves their language variants, and publishes
//! an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;
pub mod i18n;
pub mod query;

pub use content::{Collection, ContentStore, FsContentStore, Post, PostData, RawRecord};
pub use error::{QueryError, QueryResult, ValidationError};
pub use i18n::{Language, LocaleConvention};
pub use query::{PostRepository, QueryOptions};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content collections root
    pub content_dir: PathBuf,
    /// Output directory for the feed
    pub public_dir: PathBuf,
    /// Translation overrides
    pub i18n_dir: PathBuf,
}

impl Site {
    /// Load a site from a directory, using defaults when `_config.yml` is absent
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let i18n_dir = base_dir.join(&config.i18n_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            i18n_dir,
        }
    }

    /// Repository over the site's content directory
    pub fn repository(&self) -> PostRepository<FsContentStore> {
        PostRepository::new(FsContentStore::new(self), QueryOptions::from(&self.config))
    }

    /// Built-in translations merged with the site's overrides
    pub fn i18n(&self, language: Language) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::builtin(language)?;
        i18n.load_languages(&self.i18n_dir)?;
        Ok(i18n)
    }
}
