//! Supported languages and locale conventions
//!
//! Every article exists as up to two physical records, one per language.
//! Which part of a record (file name or slug) carries the language marker
//! is decided once by a [`LocaleConvention`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Slug marker of the English variant
pub const EN_SLUG_SUFFIX: &str = "-en";

/// Route prefix of English pages under the filename convention
pub const EN_PATH_PREFIX: &str = "/en";

lazy_static! {
    /// `intro.en.md`, `2024/intro.zh.mdx`, or an id such as `intro.en`
    static ref FILENAME_LOCALE: Regex =
        Regex::new(r"^(?P<base>.+)\.(?P<lang>zh|en)(?:\.(?:md|mdx))?$").unwrap();
}

/// A language the site is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    /// Locale code
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// Name shown in the language switcher
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }

    /// The other supported language
    pub fn other(self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("unsupported language `{0}`, expected zh or en")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Language of a slug: a trailing `-en` marks English, anything else is Chinese
pub fn language_from_slug(slug: &str) -> Language {
    if slug.ends_with(EN_SLUG_SUFFIX) {
        Language::En
    } else {
        Language::Zh
    }
}

/// Slug with the English marker removed
///
/// ```
/// assert_eq!(idaibin_blog::i18n::base_slug("my-post-en"), "my-post");
/// assert_eq!(idaibin_blog::i18n::base_slug("my-post"), "my-post");
/// ```
pub fn base_slug(slug: &str) -> &str {
    slug.strip_suffix(EN_SLUG_SUFFIX).unwrap_or(slug)
}

/// Slug of `base` in `language`
pub fn localized_slug(base: &str, language: Language) -> String {
    match language {
        Language::En => format!("{}{}", base, EN_SLUG_SUFFIX),
        Language::Zh => base.to_string(),
    }
}

/// URL of the sibling article in the other language
///
/// The last segment of `current_path` is the slug; its marker is toggled and
/// the result is placed under `base_path`. A trailing slash is preserved.
pub fn alternate_url(current_path: &str, base_path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let slug = current_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if slug.is_empty() {
        return format!("{}/", base);
    }

    let sibling = localized_slug(base_slug(slug), language_from_slug(slug).other());
    let mut url = format!("{}/{}", base, sibling);
    if current_path.ends_with('/') {
        url.push('/');
    }
    url
}

/// Where the language marker of a record or route lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleConvention {
    /// `post.zh.md` / `post.en.md`, English routes prefixed with `/en`
    #[default]
    FilenameSuffix,
    /// `post` / `post-en`, English routes end with `-en`
    SlugSuffix,
}

impl LocaleConvention {
    /// Language requested by a URL path, defaulting to Chinese
    pub fn current_language(self, request_path: &str) -> Language {
        let english = match self {
            LocaleConvention::FilenameSuffix => {
                request_path == EN_PATH_PREFIX
                    || request_path
                        .strip_prefix(EN_PATH_PREFIX)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            LocaleConvention::SlugSuffix => request_path
                .split('/')
                .any(|segment| segment.ends_with(EN_SLUG_SUFFIX)),
        };

        if english {
            Language::En
        } else {
            Language::Zh
        }
    }

    /// Language of a stored record
    ///
    /// Under the filename convention a file without a `.zh`/`.en` marker
    /// belongs to neither language.
    pub fn record_language(self, id: &str, file_path: Option<&str>) -> Option<Language> {
        match self {
            LocaleConvention::FilenameSuffix => {
                let name = file_path.unwrap_or(id);
                FILENAME_LOCALE
                    .captures(name)
                    .and_then(|caps| caps.name("lang"))
                    .and_then(|lang| lang.as_str().parse().ok())
            }
            LocaleConvention::SlugSuffix => Some(language_from_slug(id)),
        }
    }

    /// Identifier shared by both language variants of an article
    pub fn base_id(self, id: &str) -> String {
        match self {
            LocaleConvention::FilenameSuffix => FILENAME_LOCALE
                .captures(id)
                .and_then(|caps| caps.name("base"))
                .map(|base| base.as_str().to_string())
                .unwrap_or_else(|| id.to_string()),
            LocaleConvention::SlugSuffix => base_slug(id).to_string(),
        }
    }

    /// URL of the same page in the other language
    ///
    /// `base_path` is only consulted by the slug convention; the filename
    /// convention toggles the `/en` route prefix.
    pub fn alternate_url(self, current_path: &str, base_path: &str) -> String {
        match self {
            LocaleConvention::SlugSuffix => alternate_url(current_path, base_path),
            LocaleConvention::FilenameSuffix => match self.current_language(current_path) {
                Language::En => {
                    let rest = &current_path[EN_PATH_PREFIX.len()..];
                    if rest.is_empty() {
                        "/".to_string()
                    } else {
                        rest.to_string()
                    }
                }
                Language::Zh => {
                    if current_path == "/" || current_path.is_empty() {
                        format!("{}/", EN_PATH_PREFIX)
                    } else {
                        format!("{}{}", EN_PATH_PREFIX, current_path)
                    }
                }
            },
        }
    }
}
