//! Internationalization (i18n) support

mod locale;

pub use locale::*;

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_ZH: &str = include_str!("languages/zh.yml");
const BUILTIN_EN: &str = include_str!("languages/en.yml");

/// UI string table with Chinese fallback
pub struct I18n {
    /// Current language
    language: Language,
    /// Flattened translations: lang -> "menu.home" -> text
    translations: HashMap<Language, HashMap<String, String>>,
}

impl I18n {
    /// Create an empty handler
    pub fn new(language: Language) -> Self {
        Self {
            language,
            translations: HashMap::new(),
        }
    }

    /// Create a handler loaded with the site's built-in strings
    pub fn builtin(language: Language) -> Result<Self> {
        let mut i18n = Self::new(language);
        i18n.merge_yaml(Language::Zh, BUILTIN_ZH)?;
        i18n.merge_yaml(Language::En, BUILTIN_EN)?;
        Ok(i18n)
    }

    /// Load override files (`zh.yml`, `en.yaml`, `en.json`, ...) from a directory
    ///
    /// Keys in these files replace or extend the built-in strings. Files named
    /// after an unsupported language or failing to parse are skipped.
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let Some(lang) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<Language>().ok())
            else {
                tracing::debug!("Skipping language file {:?}", path);
                continue;
            };

            // JSON is valid YAML, one parser covers both
            let content = fs::read_to_string(&path)?;
            match self.merge_yaml(lang, &content) {
                Ok(()) => tracing::debug!("Loaded language file: {:?}", path),
                Err(e) => tracing::warn!("Failed to parse language file {:?}: {}", path, e),
            }
        }

        Ok(())
    }

    fn merge_yaml(&mut self, lang: Language, content: &str) -> Result<()> {
        let data: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(content)?;
        let table = self.translations.entry(lang).or_default();
        flatten_translations(&data, "", table);
        Ok(())
    }

    /// Get the current language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translation of `key` in the current language
    pub fn get(&self, key: &str) -> String {
        self.get_for_lang(self.language, key)
    }

    /// Translation of `key` in `lang`, falling back to Chinese, then to the key itself
    pub fn get_for_lang(&self, lang: Language, key: &str) -> String {
        [lang, Language::Zh]
            .iter()
            .find_map(|l| self.translations.get(l).and_then(|t| t.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Check if a translation exists in the current language
    pub fn has(&self, key: &str) -> bool {
        self.translations
            .get(&self.language)
            .is_some_and(|t| t.contains_key(key))
    }
}

/// Flatten nested YAML into dot-notation keys
fn flatten_translations(
    data: &HashMap<String, serde_yaml::Value>,
    prefix: &str,
    result: &mut HashMap<String, String>,
) {
    for (key, value) in data {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            serde_yaml::Value::String(s) => {
                result.insert(full_key, s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(full_key, n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(full_key, b.to_string());
            }
            serde_yaml::Value::Mapping(map) => {
                let nested: HashMap<String, serde_yaml::Value> = map
                    .iter()
                    .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.clone())))
                    .collect();
                flatten_translations(&nested, &full_key, result);
            }
            _ => {}
        }
    }
}
