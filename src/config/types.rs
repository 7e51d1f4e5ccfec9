//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/autotoc/) and project (.autotoc/) level configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::Locale;
use crate::constants::discovery::{DEFAULT_EXTENSIONS, DEFAULT_MANIFEST, MAX_FILE_SIZE};
use crate::types::{Result, TocError};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Display locale tag (unknown tags fall back to "fi")
    pub locale: String,

    /// File discovery settings
    pub discovery: DiscoveryConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            locale: Locale::default().to_string(),
            discovery: DiscoveryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `TocError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.discovery.manifest.trim().is_empty() {
            return Err(TocError::Config(
                "discovery.manifest must not be empty".to_string(),
            ));
        }

        if self.discovery.extensions.is_empty() {
            return Err(TocError::Config(
                "discovery.extensions must list at least one extension".to_string(),
            ));
        }

        if self.discovery.max_file_size == 0 {
            return Err(TocError::Config(
                "discovery.max_file_size must be greater than 0".to_string(),
            ));
        }

        for pattern in &self.discovery.exclude {
            glob::Pattern::new(pattern).map_err(|e| {
                TocError::Config(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        Ok(())
    }

    /// Resolved display locale
    pub fn locale(&self) -> Locale {
        Locale::resolve(&self.locale)
    }
}

// =============================================================================
// Discovery Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// How the file list is obtained
    pub strategy: DiscoveryStrategy,

    /// Manifest filename looked up in the content directory
    pub manifest: String,

    /// Extensions kept by the directory scanner (without dot)
    pub extensions: Vec<String>,

    /// Glob patterns excluded from scanning
    pub exclude: Vec<String>,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Files larger than this are skipped (bytes)
    pub max_file_size: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            strategy: DiscoveryStrategy::Auto,
            manifest: DEFAULT_MANIFEST.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude: vec![],
            recursive: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

/// Source of the file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryStrategy {
    /// Manifest, then directory scan, then probing
    #[default]
    Auto,
    Manifest,
    Scan,
    Probe,
}

impl std::fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryStrategy::Auto => write!(f, "auto"),
            DiscoveryStrategy::Manifest => write!(f, "manifest"),
            DiscoveryStrategy::Scan => write!(f, "scan"),
            DiscoveryStrategy::Probe => write!(f, "probe"),
        }
    }
}

impl std::str::FromStr for DiscoveryStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DiscoveryStrategy::Auto),
            "manifest" => Ok(DiscoveryStrategy::Manifest),
            "scan" => Ok(DiscoveryStrategy::Scan),
            "probe" => Ok(DiscoveryStrategy::Probe),
            _ => Err(format!(
                "Unknown discovery strategy: {}. Valid values: auto, manifest, scan, probe",
                s
            )),
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Prefix for links in rendered tables of contents
    pub link_base: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid values: text, markdown, json",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.locale(), Locale::Fi);
        assert_eq!(config.discovery.manifest, "manifest.json");
        assert_eq!(config.discovery.extensions, vec!["md".to_string()]);
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = Config::default();
        config.discovery.extensions.clear();
        assert!(matches!(config.validate(), Err(TocError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let mut config = Config::default();
        config.discovery.exclude = vec!["[".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_locale_resolves_to_default() {
        let config = Config {
            locale: "xx".to_string(),
            ..Default::default()
        };
        assert_eq!(config.locale(), Locale::Fi);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("SCAN".parse::<DiscoveryStrategy>(), Ok(DiscoveryStrategy::Scan));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
