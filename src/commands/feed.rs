//! Write the RSS feed

use anyhow::Result;
use std::path::PathBuf;

use crate::content::Collection;
use crate::feed::{render_rss, FeedChannel};
use crate::i18n::Language;
use crate::Site;

/// Render the blog feed into the public directory
pub async fn run(site: &Site, language: Option<Language>) -> Result<PathBuf> {
    let language = language
        .or(site.config.feed.language)
        .unwrap_or(site.config.default_language);
    let limit = site.config.feed.limit.unwrap_or(site.config.default_limit);

    let posts = site
        .repository()
        .get_posts(Collection::Blog, language, limit)
        .await?;

    let i18n = site.i18n(language)?;
    let channel = FeedChannel::new(&site.config, &i18n);
    let xml = render_rss(&channel, &posts);

    let output_path = site.public_dir.join(&site.config.feed.path);
    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&output_path, xml).await?;
    tracing::info!("Generated {:?} with {} items", output_path, posts.len());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_intro(base: &Path) {
        let blog = base.join("src/content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("intro.en.md"),
            "---\ntitle: Intro\ndescription: Hello\npubDate: 2024-01-01\n---\n",
        )
        .unwrap();
        fs::write(
            blog.join("intro.zh.md"),
            "---\ntitle: 简介\ndescription: 你好\npubDate: 2024-01-01\n---\n",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_writes_feed_for_language() {
        let dir = tempfile::tempdir().unwrap();
        write_intro(dir.path());

        let site = Site::new(dir.path()).unwrap();
        let path = run(&site, Some(Language::En)).await.unwrap();

        assert_eq!(path, dir.path().join("public/rss.xml"));
        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<title>Intro</title>"));
        assert!(xml.contains("<link>https://idaibin.dev/blog/intro/</link>"));
        assert!(!xml.contains("简介"));
        assert!(xml.contains("<language>en</language>"));
    }

    #[tokio::test]
    async fn test_feed_defaults_to_english() {
        let dir = tempfile::tempdir().unwrap();
        write_intro(dir.path());

        let site = Site::new(dir.path()).unwrap();
        let path = run(&site, None).await.unwrap();

        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<language>en</language>"));
        assert!(xml.contains("<title>Intro</title>"));
        assert!(!xml.contains("简介"));
    }

    #[tokio::test]
    async fn test_configured_feed_language() {
        let dir = tempfile::tempdir().unwrap();
        write_intro(dir.path());
        fs::write(dir.path().join("_config.yml"), "feed:\n  language: zh\n").unwrap();

        let site = Site::new(dir.path()).unwrap();
        let xml = fs::read_to_string(run(&site, None).await.unwrap()).unwrap();
        assert!(xml.contains("<language>zh</language>"));
        assert!(xml.contains("<title>简介</title>"));
    }
}
