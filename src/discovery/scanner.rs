use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::discovery::{DEFAULT_EXTENSIONS, MAX_FILE_SIZE};
use crate::types::{FileDescriptor, Result, TocError};

/// Lists content files in a directory
pub struct FileScanner {
    root: PathBuf,
    extensions: Vec<String>,
    exclude: Vec<glob::Pattern>,
    skip_names: Vec<String>,
    max_file_size: u64,
    recursive: bool,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude: vec![],
            skip_names: vec![],
            max_file_size: MAX_FILE_SIZE,
            recursive: false,
        }
    }

    /// Keep only these extensions (case-insensitive, leading dot optional)
    pub fn with_extensions(mut self, extensions: &[String]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Skip paths matching these glob patterns; invalid patterns are ignored
    pub fn with_exclude(mut self, patterns: &[String]) -> Self {
        self.exclude = patterns
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .collect();
        self
    }

    /// Skip files with these exact names (e.g. the manifest itself)
    pub fn skip_name(mut self, name: impl Into<String>) -> Self {
        self.skip_names.push(name.into());
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn scan(&self) -> Result<Vec<FileDescriptor>> {
        if !self.root.is_dir() {
            return Err(TocError::Discovery(format!(
                "Not a directory: {}",
                self.root.display()
            )));
        }

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .max_depth(if self.recursive { None } else { Some(1) })
            .build();

        let mut files = Vec::new();

        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if self.skip_names.iter().any(|skip| skip == name)
                || self.should_exclude(path)
                || !self.check_extension(path)
            {
                continue;
            }

            let Ok(metadata) = path.metadata() else {
                continue;
            };

            if metadata.len() > self.max_file_size {
                debug!("Skipping oversized file: {}", path.display());
                continue;
            }

            let mut file = FileDescriptor::new(name, path.to_string_lossy())
                .with_size(metadata.len());
            if let Ok(modified) = metadata.modified() {
                file = file.with_last_modified(DateTime::<Utc>::from(modified).to_rfc3339());
            }
            files.push(file);
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!("Scanned {} files in {}", files.len(), self.root.display());
        Ok(files)
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude.iter().any(|p| p.matches_path(relative))
    }

    fn check_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn names(files: &[FileDescriptor]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_scan_filters_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "overview.md", "# Overview");
        touch(dir.path(), "phase1.MD", "# Phase");
        touch(dir.path(), "script.py", "print()");

        let files = FileScanner::new(dir.path()).scan().unwrap();
        assert_eq!(names(&files), vec!["overview.md", "phase1.MD"]);
        assert_eq!(files[0].size, Some(10));
        assert!(files[0].last_modified.is_some());
    }

    #[test]
    fn test_scan_depth_and_recursion() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "overview.md", "a");
        touch(dir.path(), "nested/results.md", "b");

        let flat = FileScanner::new(dir.path()).scan().unwrap();
        assert_eq!(names(&flat), vec!["overview.md"]);

        let deep = FileScanner::new(dir.path()).recursive(true).scan().unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_scan_skips_manifest_exclusions_and_large_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "manifest.json", "[]");
        touch(dir.path(), "draft_notes.md", "x");
        touch(dir.path(), "big.md", "0123456789");
        touch(dir.path(), "small.md", "0");

        let files = FileScanner::new(dir.path())
            .with_extensions(&["md".to_string(), ".json".to_string()])
            .with_exclude(&["draft_*".to_string()])
            .skip_name("manifest.json")
            .with_max_file_size(5)
            .scan()
            .unwrap();
        assert_eq!(names(&files), vec!["small.md"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = FileScanner::new(dir.path().join("absent")).scan().unwrap_err();
        assert!(matches!(err, TocError::Discovery(_)));
    }
}
