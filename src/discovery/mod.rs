//! File Discovery
//!
//! Produces the [`FileDescriptor`] list the classification core consumes:
//! - [`manifest`]: JSON manifest in the content directory
//! - [`scanner`]: gitignore-aware directory listing
//! - [`probe`]: existence checks over commonly used filenames
//! - [`likely`]: filenames a project probably needs
//!
//! The `auto` strategy tries manifest, then scan, then probe.

pub mod likely;
pub mod manifest;
pub mod probe;
pub mod scanner;

pub use likely::likely_file_names;
pub use manifest::{parse_manifest, read_manifest};
pub use probe::{common_file_names, probe};
pub use scanner::FileScanner;

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{DiscoveryConfig, DiscoveryStrategy};
use crate::types::{FileDescriptor, Result, TocError};

/// Which strategy produced a file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoverySource {
    Manifest,
    Scan,
    Probe,
}

impl std::fmt::Display for DiscoverySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoverySource::Manifest => write!(f, "manifest"),
            DiscoverySource::Scan => write!(f, "scan"),
            DiscoverySource::Probe => write!(f, "probe"),
        }
    }
}

/// Discovered files and their origin
#[derive(Debug, Clone)]
pub struct Discovered {
    pub files: Vec<FileDescriptor>,
    pub source: DiscoverySource,
}

/// Discover content files in `dir` according to `config`
pub fn discover(dir: &Path, config: &DiscoveryConfig) -> Result<Discovered> {
    if !dir.is_dir() {
        return Err(TocError::Discovery(format!(
            "Content directory not found: {}",
            dir.display()
        )));
    }

    let discovered = match config.strategy {
        DiscoveryStrategy::Manifest => {
            let files = read_manifest(dir, &config.manifest)?.ok_or_else(|| {
                TocError::Discovery(format!(
                    "No {} in {}",
                    config.manifest,
                    dir.display()
                ))
            })?;
            Discovered {
                files,
                source: DiscoverySource::Manifest,
            }
        }
        DiscoveryStrategy::Scan => Discovered {
            files: scanner_for(dir, config).scan()?,
            source: DiscoverySource::Scan,
        },
        DiscoveryStrategy::Probe => Discovered {
            files: probe(dir),
            source: DiscoverySource::Probe,
        },
        DiscoveryStrategy::Auto => discover_auto(dir, config)?,
    };

    info!(
        "Discovered {} files in {} via {}",
        discovered.files.len(),
        dir.display(),
        discovered.source
    );
    Ok(discovered)
}

fn discover_auto(dir: &Path, config: &DiscoveryConfig) -> Result<Discovered> {
    if let Some(files) = read_manifest(dir, &config.manifest)? {
        return Ok(Discovered {
            files,
            source: DiscoverySource::Manifest,
        });
    }

    let scanned = scanner_for(dir, config).scan()?;
    if !scanned.is_empty() {
        return Ok(Discovered {
            files: scanned,
            source: DiscoverySource::Scan,
        });
    }

    debug!("Scan found nothing in {}, probing", dir.display());
    Ok(Discovered {
        files: probe(dir),
        source: DiscoverySource::Probe,
    })
}

fn scanner_for(dir: &Path, config: &DiscoveryConfig) -> FileScanner {
    FileScanner::new(dir)
        .with_extensions(&config.extensions)
        .with_exclude(&config.exclude)
        .skip_name(config.manifest.clone())
        .with_max_file_size(config.max_file_size)
        .recursive(config.recursive)
}

/// Remove duplicates, keeping the first occurrence of each name
pub(crate) fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(strategy: DiscoveryStrategy) -> DiscoveryConfig {
        DiscoveryConfig {
            strategy,
            ..Default::default()
        }
    }

    #[test]
    fn test_auto_prefers_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("manifest.json"), r#"["listed.md"]"#).unwrap();
        fs::write(dir.path().join("on_disk.md"), "x").unwrap();

        let found = discover(dir.path(), &config(DiscoveryStrategy::Auto)).unwrap();
        assert_eq!(found.source, DiscoverySource::Manifest);
        assert_eq!(found.files[0].name, "listed.md");
    }

    #[test]
    fn test_auto_falls_back_to_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("on_disk.md"), "x").unwrap();

        let found = discover(dir.path(), &config(DiscoveryStrategy::Auto)).unwrap();
        assert_eq!(found.source, DiscoverySource::Scan);
        assert_eq!(found.files.len(), 1);
    }

    #[test]
    fn test_auto_falls_back_to_probe() {
        let dir = TempDir::new().unwrap();
        let found = discover(dir.path(), &config(DiscoveryStrategy::Auto)).unwrap();
        assert_eq!(found.source, DiscoverySource::Probe);
        assert!(found.files.is_empty());
    }

    #[test]
    fn test_forced_manifest_requires_file() {
        let dir = TempDir::new().unwrap();
        let err = discover(dir.path(), &config(DiscoveryStrategy::Manifest)).unwrap_err();
        assert!(matches!(err, TocError::Discovery(_)));
    }

    #[test]
    fn test_forced_scan_ignores_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("manifest.json"), r#"["listed.md"]"#).unwrap();
        fs::write(dir.path().join("on_disk.md"), "x").unwrap();

        let found = discover(dir.path(), &config(DiscoveryStrategy::Scan)).unwrap();
        let names: Vec<&str> = found.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["on_disk.md"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover(&missing, &DiscoveryConfig::default()).is_err());
    }

    #[test]
    fn test_dedup_preserving_order() {
        let names = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup_preserving_order(names), vec!["b", "a"]);
    }
}
