use serde::{Deserialize, Serialize};
use tracing::warn;

/// Display language for category metadata and suggestion reasons.
///
/// Locale never changes matching behaviour, only strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fi,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Fi, Locale::En];

    /// Resolve a locale tag, falling back to the default for unknown values.
    ///
    /// Accepts region-qualified tags such as `en-US` or `fi_FI`.
    pub fn resolve(tag: &str) -> Self {
        match Self::parse(tag) {
            Some(locale) => locale,
            None => {
                warn!(
                    "Unsupported locale '{}', falling back to '{}'",
                    tag,
                    Self::default()
                );
                Self::default()
            }
        }
    }

    /// Strict parse; `None` for unsupported tags
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "fi" => Some(Locale::Fi),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Fi => "fi",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown locale: {}. Valid values: fi, en", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        assert_eq!(Locale::resolve("fi"), Locale::Fi);
        assert_eq!(Locale::resolve("EN"), Locale::En);
        assert_eq!(Locale::resolve("en-US"), Locale::En);
        assert_eq!(Locale::resolve("fi_FI"), Locale::Fi);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve("xx"), Locale::Fi);
        assert_eq!(Locale::resolve(""), Locale::Fi);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert!("xx".parse::<Locale>().is_err());
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
    }
}
