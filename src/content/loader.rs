//! Filesystem content store - loads posts from the content directory

use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Collection, ContentStore, FrontMatter, RawRecord};
use crate::config::CollectionDirs;
use crate::error::ValidationError;
use crate::Site;

/// Loads collections from `<content_dir>/<collection dir>`
#[derive(Debug, Clone)]
pub struct FsContentStore {
    base_dir: PathBuf,
    content_dir: PathBuf,
    dirs: CollectionDirs,
}

impl FsContentStore {
    /// Create a store for a site
    pub fn new(site: &Site) -> Self {
        Self::with_dirs(
            &site.base_dir,
            &site.content_dir,
            site.config.collections.clone(),
        )
    }

    /// Create a store from explicit directories
    pub fn with_dirs<P: AsRef<Path>, Q: AsRef<Path>>(
        base_dir: P,
        content_dir: Q,
        dirs: CollectionDirs,
    ) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            content_dir: content_dir.as_ref().to_path_buf(),
            dirs,
        }
    }

    /// Directory holding a collection's files
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.content_dir.join(self.dirs.dir(collection))
    }

    /// Load every `.md`/`.mdx` file of a collection, ordered by path
    ///
    /// Files sharing an id (`intro.en.md` and `intro.en.mdx`) yield one
    /// record: the one walked last replaces the earlier one in place.
    pub fn load_collection(
        &self,
        collection: Collection,
    ) -> Result<Vec<RawRecord>, ValidationError> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            tracing::debug!("Collection {} has no directory at {:?}", collection, dir);
            return Ok(Vec::new());
        }

        let mut records: Vec<RawRecord> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for entry in WalkDir::new(&dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| ValidationError::unreachable(&dir, e.into()))?;
            let path = entry.path();
            if !path.is_file() || !is_content_file(path) {
                continue;
            }

            let record = self.load_record(&dir, path)?;
            match seen.get(&record.id) {
                Some(&index) => {
                    tracing::warn!(
                        "Duplicate id {} in {}: {:?} replaces {:?}",
                        record.id,
                        collection,
                        record.file_path,
                        records[index].file_path
                    );
                    records[index] = record;
                }
                None => {
                    seen.insert(record.id.clone(), records.len());
                    records.push(record);
                }
            }
        }

        tracing::debug!("Loaded {} records from {:?}", records.len(), dir);
        Ok(records)
    }

    /// Load and validate a single file
    fn load_record(&self, dir: &Path, path: &Path) -> Result<RawRecord, ValidationError> {
        let content =
            fs::read_to_string(path).map_err(|e| ValidationError::unreachable(path, e))?;
        let id = record_id(dir, path);

        let (fm, _body) =
            FrontMatter::parse(&content).map_err(|source| ValidationError::FrontMatter {
                entry: id.clone(),
                source,
            })?;
        let data = fm.validate(&id)?;

        let file_path = to_slash(path.strip_prefix(&self.base_dir).unwrap_or(path));

        Ok(RawRecord {
            id,
            file_path: Some(file_path),
            data,
        })
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn fetch_collection(
        &self,
        collection: Collection,
    ) -> Result<Vec<RawRecord>, ValidationError> {
        let store = self.clone();
        let dir = self.collection_dir(collection);

        tokio::task::spawn_blocking(move || store.load_collection(collection))
            .await
            .map_err(|e| {
                ValidationError::unreachable(dir, std::io::Error::new(std::io::ErrorKind::Other, e))
            })?
    }
}

/// Check if a file is a markdown or MDX file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

/// Path relative to the collection directory, without its final extension
fn record_id(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    to_slash(&relative.with_extension(""))
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, date: &str) -> String {
        format!(
            "---\ntitle: {}\ndescription: about {}\npubDate: {}\n---\n\nBody.\n",
            title, title, date
        )
    }

    fn store(base: &Path) -> FsContentStore {
        FsContentStore::with_dirs(base, base.join("src/content"), CollectionDirs::default())
    }

    #[tokio::test]
    async fn test_fetch_collection_from_disk() {
        let base = tempfile::tempdir().unwrap();
        let blog = base.path().join("src/content/blog");
        fs::create_dir_all(blog.join("2024")).unwrap();
        fs::write(blog.join("intro.zh.md"), post("简介", "2024-01-02")).unwrap();
        fs::write(blog.join("intro.en.md"), post("Intro", "2024-01-02")).unwrap();
        fs::write(blog.join("2024/axum.en.mdx"), post("Axum", "2024-02-01")).unwrap();
        fs::write(blog.join("cover.png"), "not a post").unwrap();

        let records = store(base.path())
            .fetch_collection(Collection::Blog)
            .await
            .unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2024/axum.en", "intro.en", "intro.zh"]);
        assert_eq!(
            records[1].file_path.as_deref(),
            Some("src/content/blog/intro.en.md")
        );
        assert_eq!(records[2].data.title, "简介");
    }

    #[tokio::test]
    async fn test_missing_collection_is_empty() {
        let base = tempfile::tempdir().unwrap();
        let records = store(base.path())
            .fetch_collection(Collection::RustzenAdmin)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_record_fails_the_fetch() {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("src/content/rustzen-admin");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("good.en.md"), post("Good", "2024-01-01")).unwrap();
        fs::write(dir.join("bad.en.md"), "---\ntitle: Bad\ndescription: x\n---\n").unwrap();

        let err = store(base.path())
            .fetch_collection(Collection::RustzenAdmin)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField { ref entry, field: "pubDate" } if entry == "bad.en"
        ));
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_the_last_file() {
        let base = tempfile::tempdir().unwrap();
        let blog = base.path().join("src/content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(blog.join("intro.en.md"), post("Intro", "2024-01-02")).unwrap();
        fs::write(blog.join("intro.en.mdx"), post("Intro MDX", "2024-01-03")).unwrap();
        fs::write(blog.join("intro.zh.md"), post("简介", "2024-01-02")).unwrap();

        let records = store(base.path())
            .fetch_collection(Collection::Blog)
            .await
            .unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["intro.en", "intro.zh"]);
        assert_eq!(records[0].data.title, "Intro MDX");
        assert_eq!(
            records[0].file_path.as_deref(),
            Some("src/content/blog/intro.en.mdx")
        );
    }

    #[test]
    fn test_record_id() {
        let dir = Path::new("/site/src/content/blog");
        assert_eq!(
            record_id(dir, Path::new("/site/src/content/blog/a/b.zh.mdx")),
            "a/b.zh"
        );
    }
}
