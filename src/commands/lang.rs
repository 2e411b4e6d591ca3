//! Language detection and alternate URLs for a route

use crate::i18n::Language;
use crate::Site;

/// Print and return the language of a request path
pub fn detect(site: &Site, path: &str) -> Language {
    let language = site.config.locale_convention.current_language(path);
    println!("{} ({})", language, language.display_name());
    language
}

/// Print and return the route of the same page in the other language
pub fn alternate(site: &Site, path: &str, base_path: &str) -> String {
    let url = site
        .config
        .locale_convention
        .alternate_url(path, base_path);
    println!("{}", url);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::i18n::LocaleConvention;
    use std::path::PathBuf;

    fn site(convention: LocaleConvention) -> Site {
        let config = SiteConfig {
            locale_convention: convention,
            ..SiteConfig::default()
        };
        Site::with_config(PathBuf::from("."), config)
    }

    #[test]
    fn test_detect_follows_convention() {
        assert_eq!(
            detect(&site(LocaleConvention::FilenameSuffix), "/en/blog/"),
            Language::En
        );
        assert_eq!(
            detect(&site(LocaleConvention::SlugSuffix), "/en/blog/"),
            Language::Zh
        );
    }

    #[test]
    fn test_alternate_follows_convention() {
        assert_eq!(
            alternate(&site(LocaleConvention::SlugSuffix), "/blog/intro", "/blog"),
            "/blog/intro-en"
        );
        assert_eq!(
            alternate(&site(LocaleConvention::FilenameSuffix), "/blog/intro", "/blog"),
            "/en/blog/intro"
        );
    }
}
