//! Post records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::i18n::Language;

/// Validated front-matter of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    pub description: String,
    pub pub_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl PostData {
    /// Post data with the required fields only
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        pub_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            pub_date,
            hero_image: None,
            tags: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

/// A record as handed out by a content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Collection-unique identifier, still carrying any locale marker
    pub id: String,
    /// Source file, when the record came from disk
    pub file_path: Option<String>,
    pub data: PostData,
}

/// A post resolved to one language
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier shared by both language variants
    pub id: String,
    pub file_path: Option<String>,
    pub language: Language,
    pub data: PostData,
}
