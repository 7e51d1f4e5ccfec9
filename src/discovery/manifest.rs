//! Manifest reading
//!
//! A content directory may carry a JSON manifest listing its files. Accepted
//! shapes:
//!
//! ```json
//! ["overview.md", "phase1_results.md"]
//! [{"name": "overview.md", "size": 1200, "lastModified": "2024-05-01"}]
//! {"files": [...either of the above...]}
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::{FileDescriptor, Result, ResultExt, TocError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    List(Vec<ManifestEntry>),
    Wrapped { files: Vec<ManifestEntry> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    Name(String),
    Descriptor(RawDescriptor),
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    name: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default, rename = "lastModified", alias = "last_modified")]
    last_modified: Option<String>,
}

/// Read `<dir>/<manifest_name>` if it exists.
///
/// Returns `Ok(None)` when there is no manifest.
pub fn read_manifest(dir: &Path, manifest_name: &str) -> Result<Option<Vec<FileDescriptor>>> {
    let manifest_path = dir.join(manifest_name);
    if !manifest_path.is_file() {
        debug!("No manifest at {}", manifest_path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(&manifest_path)
        .context_as(TocError::Discovery, || {
            format!("Failed to read {}", manifest_path.display())
        })?;
    let files = parse_manifest(&content, dir)
        .map_err(|message| TocError::manifest(&manifest_path, message))?;

    debug!(
        "Manifest {} lists {} files",
        manifest_path.display(),
        files.len()
    );
    Ok(Some(files))
}

/// Parse manifest JSON. Paths default to `<dir>/<name>`.
pub fn parse_manifest(content: &str, dir: &Path) -> std::result::Result<Vec<FileDescriptor>, String> {
    let document: ManifestDocument = serde_json::from_str(content).map_err(|e| {
        format!(
            "expected a list of files or an object with a 'files' list ({})",
            e
        )
    })?;

    let entries = match document {
        ManifestDocument::List(entries) => entries,
        ManifestDocument::Wrapped { files } => files,
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| into_descriptor(entry, dir))
        .collect())
}

fn into_descriptor(entry: ManifestEntry, dir: &Path) -> Option<FileDescriptor> {
    let raw = match entry {
        ManifestEntry::Name(name) => RawDescriptor {
            name,
            path: None,
            size: None,
            last_modified: None,
        },
        ManifestEntry::Descriptor(raw) => raw,
    };

    let name = raw.name.trim().to_string();
    if name.is_empty() {
        warn!("Skipping manifest entry with empty name");
        return None;
    }

    let path = raw
        .path
        .unwrap_or_else(|| dir.join(&name).to_string_lossy().into_owned());

    Some(FileDescriptor {
        name,
        path,
        size: raw.size,
        last_modified: raw.last_modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_name_list() {
        let files = parse_manifest(r#"["overview.md", "phase1.md"]"#, Path::new("docs")).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "overview.md");
        assert_eq!(files[0].path, Path::new("docs").join("overview.md").to_string_lossy());
        assert_eq!(files[0].size, None);
    }

    #[test]
    fn test_parse_descriptor_objects() {
        let json = r#"{"files": [
            {"name": "overview.md", "path": "app/content/overview.md", "size": 42, "lastModified": "2024-05-01T10:00:00Z"},
            "results.md"
        ]}"#;
        let files = parse_manifest(json, Path::new("x")).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "app/content/overview.md");
        assert_eq!(files[0].size, Some(42));
        assert_eq!(files[0].last_modified.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(files[1].name, "results.md");
    }

    #[test]
    fn test_empty_names_skipped() {
        let files = parse_manifest(r#"["", "  ", "a.md"]"#, Path::new(".")).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_malformed_manifest() {
        assert!(parse_manifest(r#"{"entries": 3}"#, Path::new(".")).is_err());
        assert!(parse_manifest("not json", Path::new(".")).is_err());
    }

    #[test]
    fn test_read_manifest_from_disk() {
        let dir = TempDir::new().unwrap();
        assert!(read_manifest(dir.path(), "manifest.json").unwrap().is_none());

        fs::write(dir.path().join("manifest.json"), r#"["overview.md"]"#).unwrap();
        let files = read_manifest(dir.path(), "manifest.json").unwrap().unwrap();
        assert_eq!(files[0].name, "overview.md");

        fs::write(dir.path().join("manifest.json"), "{").unwrap();
        let err = read_manifest(dir.path(), "manifest.json").unwrap_err();
        assert!(matches!(err, TocError::Manifest { .. }));
    }
}
