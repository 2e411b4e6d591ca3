//! Post repository - selects, sorts and paginates posts of a collection
//!
//! Every query reads a fresh snapshot from the content store; nothing is
//! cached between calls and the repository holds no mutable state, so
//! concurrent queries need no coordination.

mod pagination;

pub use pagination::*;

use crate::config::SiteConfig;
use crate::content::{Collection, ContentStore, Post, RawRecord};
use crate::error::QueryResult;
use crate::i18n::{Language, LocaleConvention};

/// Settings fixed when a repository is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub convention: LocaleConvention,
    pub default_language: Language,
    pub default_limit: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            convention: LocaleConvention::FilenameSuffix,
            default_language: Language::Zh,
            default_limit: 100,
        }
    }
}

impl From<&SiteConfig> for QueryOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            convention: config.locale_convention,
            default_language: config.default_language,
            default_limit: config.default_limit,
        }
    }
}

/// Query layer over a content store
pub struct PostRepository<S> {
    store: S,
    options: QueryOptions,
}

impl<S: ContentStore> PostRepository<S> {
    pub fn new(store: S, options: QueryOptions) -> Self {
        Self { store, options }
    }

    /// Posts of `collection` in `language`, newest first, at most `limit` of them
    pub async fn get_posts(
        &self,
        collection: Collection,
        language: Language,
        limit: usize,
    ) -> QueryResult<Vec<Post>> {
        let mut posts = self.localized_posts(collection, language).await?;
        posts.truncate(limit);
        Ok(posts)
    }

    /// [`get_posts`](Self::get_posts) with the configured language and limit
    pub async fn get_latest_posts(&self, collection: Collection) -> QueryResult<Vec<Post>> {
        self.get_posts(
            collection,
            self.options.default_language,
            self.options.default_limit,
        )
        .await
    }

    /// Number of records in a collection, all languages included
    pub async fn get_post_count(&self, collection: Collection) -> QueryResult<usize> {
        Ok(self.store.fetch_collection(collection).await?.len())
    }

    /// The post whose shared identifier is `id` in `language`
    pub async fn get_post(
        &self,
        collection: Collection,
        language: Language,
        id: &str,
    ) -> QueryResult<Option<Post>> {
        Ok(self
            .localized_posts(collection, language)
            .await?
            .into_iter()
            .find(|post| post.id == id))
    }

    /// Page `page` (1-based) of the posts of `collection` in `language`
    pub async fn get_posts_page(
        &self,
        collection: Collection,
        language: Language,
        page: usize,
        per_page: usize,
    ) -> QueryResult<Paginated<Post>> {
        let posts = self.localized_posts(collection, language).await?;
        Ok(paginate(posts, page, per_page))
    }

    /// Language requested by a URL path
    pub fn current_language(&self, request_path: &str) -> Language {
        self.options.convention.current_language(request_path)
    }

    /// URL of the same page in the other language
    pub fn alternate_url(&self, current_path: &str, base_path: &str) -> String {
        self.options.convention.alternate_url(current_path, base_path)
    }

    /// Every post of `collection` in `language`, sorted newest first
    ///
    /// The sort is stable: posts sharing a date keep their collection order.
    async fn localized_posts(
        &self,
        collection: Collection,
        language: Language,
    ) -> QueryResult<Vec<Post>> {
        let records = self.store.fetch_collection(collection).await?;
        let total = records.len();

        let mut posts: Vec<Post> = records
            .into_iter()
            .filter_map(|record| self.localize(record, language))
            .collect();

        posts.sort_by(|a, b| b.data.pub_date.cmp(&a.data.pub_date));

        tracing::debug!(
            "{}: {} of {} records in {}",
            collection,
            posts.len(),
            total,
            language
        );
        Ok(posts)
    }

    fn localize(&self, record: RawRecord, language: Language) -> Option<Post> {
        let convention = self.options.convention;
        let record_language = convention.record_language(&record.id, record.file_path.as_deref());
        tracing::debug!("Processed {} ({:?})", record.id, record_language);

        if record_language != Some(language) {
            return None;
        }

        Some(Post {
            id: convention.base_id(&record.id),
            file_path: record.file_path,
            language,
            data: record.data,
        })
    }
}
