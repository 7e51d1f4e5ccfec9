//! Pattern Catalog
//!
//! Static category data split into two tables:
//! - [`patterns`]: locale-independent filename rules, in precedence order
//! - [`display`]: per-locale icon, title, and description
//!
//! A [`Catalog`] joins both for one locale. It is an immutable value; switching
//! locale means building another catalog, never mutating this one.

pub mod category;
pub mod display;
pub mod locale;
pub mod patterns;

pub use category::CategoryKey;
pub use display::{CategoryDisplay, category_display};
pub use locale::Locale;
pub use patterns::{CategoryRules, match_table, rules_for};

use regex::Regex;

/// One category entry of a locale's catalog
#[derive(Debug, Clone, Copy)]
pub struct CategoryDefinition {
    pub key: CategoryKey,
    pub patterns: &'static [Regex],
    pub excludes: &'static [Regex],
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: u8,
}

impl CategoryDefinition {
    fn build(key: CategoryKey, locale: Locale) -> Self {
        let shown = category_display(key, locale);
        Self {
            key,
            patterns: &rules_for(key).rules,
            excludes: &rules_for(key).excludes,
            icon: shown.icon,
            title: shown.title,
            description: shown.description,
            priority: key.priority(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|rule| rule.is_match(file_name))
            && !self.excludes.iter().any(|rule| rule.is_match(file_name))
    }
}

/// All category definitions for one locale, in precedence order
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    definitions: Vec<CategoryDefinition>,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            definitions: CategoryKey::ALL
                .into_iter()
                .map(|key| CategoryDefinition::build(key, locale))
                .collect(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Definitions in precedence order
    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    pub fn get(&self, key: CategoryKey) -> &CategoryDefinition {
        // `definitions` is built from `CategoryKey::ALL`, whose order matches
        // the derived `Ord` index.
        &self.definitions[key as usize]
    }

    pub fn keys(&self) -> impl Iterator<Item = CategoryKey> + '_ {
        self.definitions.iter().map(|def| def.key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Catalog for a locale tag; unknown tags get the default locale.
pub fn get_catalog(locale: &str) -> Catalog {
    Catalog::new(Locale::resolve(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_indexes_by_key() {
        let catalog = Catalog::new(Locale::En);
        for key in CategoryKey::ALL {
            assert_eq!(catalog.get(key).key, key);
        }
    }

    #[test]
    fn test_locales_share_keys_and_priorities() {
        let fi = Catalog::new(Locale::Fi);
        let en = Catalog::new(Locale::En);
        for (a, b) in fi.definitions().iter().zip(en.definitions()) {
            assert_eq!(a.key, b.key);
            assert_eq!(a.priority, b.priority);
            assert_eq!(a.patterns.len(), b.patterns.len());
        }
        assert_ne!(
            fi.get(CategoryKey::Overview).title,
            en.get(CategoryKey::Overview).title
        );
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let fallback = get_catalog("xx");
        let default = Catalog::default();
        assert_eq!(fallback.locale(), Locale::Fi);
        let fallback_keys: Vec<_> = fallback.keys().collect();
        let default_keys: Vec<_> = default.keys().collect();
        assert_eq!(fallback_keys, default_keys);
        for key in CategoryKey::ALL {
            assert_eq!(fallback.get(key).priority, default.get(key).priority);
            assert_eq!(fallback.get(key).title, default.get(key).title);
        }
    }

    #[test]
    fn test_definition_matches() {
        let catalog = get_catalog("en");
        assert!(catalog.get(CategoryKey::Overview).matches("readme.md"));
        assert!(!catalog.get(CategoryKey::Overview).matches("phase1.md"));
    }

    #[test]
    fn test_definition_honours_exclusions() {
        let catalog = get_catalog("fi");
        let phase = catalog.get(CategoryKey::Phase);
        assert!(phase.matches("phase1_data_collection.md"));
        assert!(!phase.matches("phase3_code_docs.md"));
    }
}
