//! Create a new bilingual post

use anyhow::{bail, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

use crate::content::Collection;
use crate::i18n::{localized_slug, Language, LocaleConvention};
use crate::Site;

/// Create one file per language for a new article
///
/// Nothing is written when any of the target files already exists.
pub fn create_post(
    site: &Site,
    title: &str,
    collection: Collection,
    slug: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let base = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if base.is_empty() {
        bail!("Cannot derive a file name from title {:?}", title);
    }

    let dir = site
        .content_dir
        .join(site.config.collections.dir(collection));
    let convention = site.config.locale_convention;

    let targets: Vec<(Language, PathBuf)> = Language::ALL
        .iter()
        .map(|&lang| (lang, dir.join(file_name(convention, &base, lang))))
        .collect();

    if let Some((_, existing)) = targets.iter().find(|(_, path)| path.exists()) {
        bail!("File already exists: {:?}", existing);
    }

    fs::create_dir_all(&dir)?;

    let date = Utc::now().format("%Y-%m-%d").to_string();
    let scaffold = scaffold(title, &date)?;

    let mut created = Vec::new();
    for (lang, path) in targets {
        fs::write(&path, &scaffold)?;
        tracing::info!("Created {} variant: {:?}", lang, path);
        println!("Created: {:?}", path);
        created.push(path);
    }

    Ok(created)
}

/// File name of one language variant
fn file_name(convention: LocaleConvention, base: &str, lang: Language) -> String {
    match convention {
        LocaleConvention::FilenameSuffix => format!("{}.{}.md", base, lang),
        LocaleConvention::SlugSuffix => format!("{}.md", localized_slug(base, lang)),
    }
}

/// Front-matter skeleton that passes validation once a description is filled in
fn scaffold(title: &str, date: &str) -> Result<String> {
    // a JSON string is a valid double-quoted YAML scalar
    let title = serde_json::to_string(title)?;
    Ok(format!(
        "---\ntitle: {}\ndescription: ''\npubDate: {}\ntags: []\n---\n",
        title, date
    ))
}
