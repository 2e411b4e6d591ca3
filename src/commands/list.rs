//! List and count posts of a collection

use anyhow::Result;

use crate::content::{Collection, Post};
use crate::helpers::format_date;
use crate::i18n::Language;
use crate::Site;

/// Options of the `list` command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub language: Option<Language>,
    pub limit: Option<usize>,
    /// Show one page of `per_page` posts instead of the first `limit`
    pub page: Option<usize>,
    pub json: bool,
}

/// List posts of a collection, newest first
pub async fn run(site: &Site, collection: Collection, options: &ListOptions) -> Result<()> {
    let repo = site.repository();
    let language = options.language.unwrap_or(site.config.default_language);

    let (posts, footer) = match options.page {
        Some(page) => {
            let paginated = repo
                .get_posts_page(collection, language, page, site.config.per_page)
                .await?;
            let footer = format!("Page {}/{}", paginated.current, paginated.total_pages);
            (paginated.items, Some(footer))
        }
        None => {
            let limit = options.limit.unwrap_or(site.config.default_limit);
            (repo.get_posts(collection, language, limit).await?, None)
        }
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    let i18n = site.i18n(language)?;
    let heading = match collection {
        Collection::Blog => "blog.title",
        Collection::RustzenAdmin => "rustzen.articles.title",
    };

    println!("{} ({}):", i18n.get(heading), posts.len());
    for line in listing(&posts, &site.config.date_format) {
        println!("  {}", line);
    }
    if let Some(footer) = footer {
        println!("{}", footer);
    }

    Ok(())
}

/// Print the number of records in a collection
pub async fn count(site: &Site, collection: Collection) -> Result<usize> {
    let count = site.repository().get_post_count(collection).await?;
    println!("{}: {}", collection, count);
    Ok(count)
}

/// One line per post: date, title and shared id
fn listing(posts: &[Post], date_format: &str) -> Vec<String> {
    posts
        .iter()
        .map(|post| {
            format!(
                "{} - {} [{}]",
                format_date(&post.data.pub_date, date_format),
                post.data.title,
                post.id
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostData;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_listing() {
        let post = Post {
            id: "intro".to_string(),
            file_path: None,
            language: Language::Zh,
            data: PostData::new(
                "简介",
                "",
                Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            ),
        };
        assert_eq!(
            listing(&[post], "YYYY-MM-DD"),
            vec!["2024-03-01 - 简介 [intro]"]
        );
    }

    #[tokio::test]
    async fn test_count_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(count(&site, Collection::RustzenAdmin).await.unwrap(), 0);
    }
}
