//! Structure Analyzer
//!
//! Aggregate statistics over one file list: per-category counts, phase and
//! module numbers embedded in filenames, and which common files are absent.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::catalog::CategoryKey;
use crate::classifier::classify;
use crate::constants::analysis::COMMON_FILES;
use crate::types::FileDescriptor;

static PHASE_NUMBER: LazyLock<Regex> = LazyLock::new(|| numbered_token("phase|vaihe"));
static MODULE_NUMBER: LazyLock<Regex> = LazyLock::new(|| numbered_token("module|moduuli"));

fn numbered_token(words: &str) -> Regex {
    RegexBuilder::new(&format!(r"(?:{})[\s_]*([0-9]+)", words))
        .case_insensitive(true)
        .build()
        .expect("numbered token pattern must compile")
}

/// Aggregate statistics for one file list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureAnalysis {
    pub total_files: usize,
    /// Only categories with at least one file appear
    pub categories: BTreeMap<CategoryKey, usize>,
    /// Ascending; duplicates kept
    pub phases: Vec<u32>,
    /// Ascending; duplicates kept
    pub modules: Vec<u32>,
    /// Common basenames whose stem no filename contains
    pub missing_common: Vec<String>,
}

impl StructureAnalysis {
    /// File count for a category, zero when absent
    pub fn count(&self, key: CategoryKey) -> usize {
        self.categories.get(&key).copied().unwrap_or(0)
    }
}

/// Scans a file list for structural statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Perform complete structure analysis
    pub fn analyze(&self, files: &[FileDescriptor]) -> StructureAnalysis {
        let mut analysis = StructureAnalysis {
            total_files: files.len(),
            ..Default::default()
        };

        for file in files {
            *analysis.categories.entry(classify(&file.name)).or_insert(0) += 1;

            if let Some(phase) = phase_number(&file.name) {
                analysis.phases.push(phase);
            }
            if let Some(module) = module_number(&file.name) {
                analysis.modules.push(module);
            }
        }

        analysis.phases.sort_unstable();
        analysis.modules.sort_unstable();
        analysis.missing_common = missing_common(files);

        debug!(
            total = analysis.total_files,
            phases = analysis.phases.len(),
            modules = analysis.modules.len(),
            "structure analyzed"
        );
        analysis
    }
}

/// Phase number embedded in a filename (`phase3`, `vaihe_2`)
pub fn phase_number(file_name: &str) -> Option<u32> {
    capture_number(&PHASE_NUMBER, file_name)
}

/// Module number embedded in a filename (`module_04`, `moduuli7`)
pub fn module_number(file_name: &str) -> Option<u32> {
    capture_number(&MODULE_NUMBER, file_name)
}

/// Number captured by the first match of `pattern`, if it fits in `u32`
fn capture_number(pattern: &Regex, file_name: &str) -> Option<u32> {
    let digits = pattern.captures(file_name)?.get(1)?.as_str();
    match digits.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            debug!(file = file_name, digits, "numbered token out of range, ignored");
            None
        }
    }
}

fn missing_common(files: &[FileDescriptor]) -> Vec<String> {
    let names: Vec<String> = files.iter().map(|f| f.name.to_lowercase()).collect();

    COMMON_FILES
        .iter()
        .copied()
        .filter(|common| {
            let stem = common.strip_suffix(".md").unwrap_or(*common);
            !names.iter().any(|name| name.contains(stem))
        })
        .map(String::from)
        .collect()
}
