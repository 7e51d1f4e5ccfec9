//! Table-of-Contents Engine
//!
//! Facade over the classification core. An engine is bound to one locale at
//! construction and is immutable afterwards; every method is a pure function
//! of its arguments.
//!
//! ```text
//! files ─┬─> classify_and_group ──────────────> grouped_by_category
//!        └─> analyze ──> suggest_missing ─────> analysis, suggestions
//! ```

use serde::Serialize;
use tracing::debug;

use crate::analyzer::{GapSuggester, StructureAnalysis, StructureAnalyzer, Suggestion};
use crate::catalog::{Catalog, CategoryKey, Locale};
use crate::classifier::{self, GroupedFiles};
use crate::types::FileDescriptor;

/// Full output for one file list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocReport {
    pub grouped_by_category: GroupedFiles,
    pub analysis: StructureAnalysis,
    pub suggestions: Vec<Suggestion>,
}

impl TocReport {
    pub fn is_empty(&self) -> bool {
        self.grouped_by_category.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TocEngine {
    catalog: Catalog,
}

impl TocEngine {
    pub fn new(locale: Locale) -> Self {
        Self {
            catalog: Catalog::new(locale),
        }
    }

    /// Engine for a locale tag; unknown tags get the default locale
    pub fn for_tag(tag: &str) -> Self {
        Self::new(Locale::resolve(tag))
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classify(&self, file_name: &str) -> CategoryKey {
        classifier::classify(file_name)
    }

    pub fn classify_and_group(&self, files: &[FileDescriptor]) -> GroupedFiles {
        classifier::classify_and_group(&self.catalog, files)
    }

    pub fn analyze(&self, files: &[FileDescriptor]) -> StructureAnalysis {
        StructureAnalyzer::new().analyze(files)
    }

    pub fn suggest_missing(&self, analysis: &StructureAnalysis) -> Vec<Suggestion> {
        GapSuggester::new(self.locale()).suggest_missing(analysis)
    }

    /// Group, analyze, and suggest in one pass
    pub fn build_report(&self, files: &[FileDescriptor]) -> TocReport {
        let grouped_by_category = self.classify_and_group(files);
        let analysis = self.analyze(files);
        let suggestions = self.suggest_missing(&analysis);

        debug!(
            locale = %self.locale(),
            files = files.len(),
            groups = grouped_by_category.len(),
            suggestions = suggestions.len(),
            "report built"
        );

        TocReport {
            grouped_by_category,
            analysis,
            suggestions,
        }
    }
}
