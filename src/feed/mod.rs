//! RSS feed publishing

use chrono::Utc;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_rfc822, full_url, post_path};
use crate::i18n::{I18n, Language};

/// Channel-level data of a feed
#[derive(Debug, Clone)]
pub struct FeedChannel {
    pub title: String,
    pub description: String,
    /// Site URL the item links are resolved against
    pub site: String,
    pub language: Language,
    /// Route of the feed itself, e.g. `rss.xml`
    pub path: String,
}

impl FeedChannel {
    /// Channel in the language of `i18n`, titled from its translation table
    pub fn new(config: &SiteConfig, i18n: &I18n) -> Self {
        Self {
            title: i18n.get("site.title"),
            description: i18n.get("site.description"),
            site: config.url.clone(),
            language: i18n.language(),
            path: config.feed.path.clone(),
        }
    }

    /// Absolute link of a post entry
    pub fn entry_link(&self, post: &Post) -> String {
        full_url(&self.site, &post_path(&post.id))
    }
}

/// Render an RSS 2.0 document for `posts`, in the given order
pub fn render_rss(channel: &FeedChannel, posts: &[Post]) -> String {
    let last_build = posts
        .iter()
        .map(|p| p.data.pub_date)
        .max()
        .unwrap_or_else(Utc::now);

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">"#);
    feed.push('\n');
    feed.push_str("  <channel>\n");
    feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&channel.title)));
    feed.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&channel.description)
    ));
    feed.push_str(&format!(
        "    <link>{}</link>\n",
        escape_xml(&full_url(&channel.site, "/"))
    ));
    feed.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&full_url(&channel.site, &channel.path))
    ));
    feed.push_str(&format!("    <language>{}</language>\n", channel.language));
    feed.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        date_rfc822(&last_build)
    ));

    for post in posts {
        let link = escape_xml(&channel.entry_link(post));
        feed.push_str("    <item>\n");
        feed.push_str(&format!("      <title>{}</title>\n", escape_xml(&post.data.title)));
        feed.push_str(&format!("      <link>{}</link>\n", link));
        feed.push_str(&format!("      <guid isPermaLink=\"true\">{}</guid>\n", link));
        feed.push_str(&format!(
            "      <description>{}</description>\n",
            escape_xml(&post.data.description)
        ));
        feed.push_str(&format!(
            "      <pubDate>{}</pubDate>\n",
            date_rfc822(&post.data.pub_date)
        ));
        for tag in &post.data.tags {
            feed.push_str(&format!("      <category>{}</category>\n", escape_xml(tag)));
        }
        feed.push_str("    </item>\n");
    }

    feed.push_str("  </channel>\n");
    feed.push_str("</rss>\n");
    feed
}

/// Escape XML special characters and drop characters XML 1.0 forbids
fn escape_xml(s: &str) -> String {
    strip_invalid_xml_chars(s)
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}
