//! Grouping & Sort Engine
//!
//! Classifies a batch of files, buckets them by category, orders buckets by
//! priority, and orders files inside a bucket by their composite sort key.
//! Only non-empty buckets are emitted.

use serde::Serialize;
use serde::ser::SerializeMap;

use super::{classify, generate_display_name, sort_key};
use crate::catalog::{Catalog, CategoryKey};
use crate::types::{ClassifiedFile, FileDescriptor};

/// One category bucket with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: CategoryKey,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub files: Vec<ClassifiedFile>,
}

impl CategoryGroup {
    fn empty(catalog: &Catalog, key: CategoryKey) -> Self {
        let def = catalog.get(key);
        Self {
            category: key,
            icon: def.icon.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            priority: def.priority,
            files: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Category groups ordered by ascending priority.
///
/// Serializes as a JSON object whose key order is the group order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedFiles {
    groups: Vec<CategoryGroup>,
}

impl GroupedFiles {
    pub fn get(&self, key: CategoryKey) -> Option<&CategoryGroup> {
        self.groups.iter().find(|group| group.category == key)
    }

    pub fn contains(&self, key: CategoryKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = CategoryKey> + '_ {
        self.groups.iter().map(|group| group.category)
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total files across all groups
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(CategoryGroup::len).sum()
    }
}

impl<'a> IntoIterator for &'a GroupedFiles {
    type Item = &'a CategoryGroup;
    type IntoIter = std::slice::Iter<'a, CategoryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for GroupedFiles {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.category.as_str(), group)?;
        }
        map.end()
    }
}

/// Classify one descriptor
pub fn classify_file(file: FileDescriptor) -> ClassifiedFile {
    let category = classify(&file.name);
    ClassifiedFile {
        display_name: generate_display_name(&file.name),
        sort_key: sort_key(category, &file.name),
        category,
        file,
    }
}

/// Classify, bucket, and order a batch of files.
pub fn classify_and_group(catalog: &Catalog, files: &[FileDescriptor]) -> GroupedFiles {
    let mut buckets: Vec<CategoryGroup> = CategoryKey::ALL
        .into_iter()
        .map(|key| CategoryGroup::empty(catalog, key))
        .collect();

    for file in files {
        let classified = classify_file(file.clone());
        buckets[classified.category as usize].files.push(classified);
    }

    let mut groups: Vec<CategoryGroup> = buckets
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();

    groups.sort_by_key(|group| group.priority);
    for group in &mut groups {
        group.files.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
    }

    GroupedFiles { groups }
}
