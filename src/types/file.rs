//! File descriptors as produced by discovery and enriched by classification.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryKey;

/// One content file as discovered by a file lister.
///
/// `name` is the base filename including its extension. `path` is opaque to
/// the classifier and only used when building links. `size` and
/// `last_modified` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size: None,
            last_modified: None,
        }
    }

    /// Descriptor whose path is the bare name
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_last_modified(mut self, last_modified: impl Into<String>) -> Self {
        self.last_modified = Some(last_modified.into());
        self
    }
}

/// A [`FileDescriptor`] with its category, display name, and sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedFile {
    #[serde(flatten)]
    pub file: FileDescriptor,
    pub category: CategoryKey,
    pub display_name: String,
    pub sort_key: String,
}

impl ClassifiedFile {
    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn path(&self) -> &str {
        &self.file.path
    }
}
