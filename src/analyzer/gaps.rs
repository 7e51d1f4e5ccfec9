//! Gap Suggester
//!
//! Proposes concrete missing files from a [`StructureAnalysis`]:
//! 1. no overview file → `overview.md`
//! 2. holes in the phase sequence `1..=max` → `phase{n}_documentation.md`
//! 3. no results file → `results_summary.md`
//!
//! Nothing else produces a suggestion. Module numbers and `missing_common`
//! are reported by the analyzer but never drive a gap.

use std::collections::BTreeSet;

use serde::Serialize;

use super::StructureAnalysis;
use crate::catalog::{CategoryKey, Locale};
use crate::constants::suggestions::{OVERVIEW_FILE, RESULTS_FILE, phase_file};

/// Kind of detected gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gap {
    Overview,
    Phase { phase: u32 },
    Results,
}

impl Gap {
    /// Proposed filename for this gap
    pub fn file_name(&self) -> String {
        match self {
            Gap::Overview => OVERVIEW_FILE.to_string(),
            Gap::Phase { phase } => phase_file(*phase),
            Gap::Results => RESULTS_FILE.to_string(),
        }
    }

    /// Human-readable reason in the given locale
    pub fn reason(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::Fi, Gap::Overview) => "Projekti tarvitsee yleiskatsaustiedoston".to_string(),
            (Locale::Fi, Gap::Phase { phase }) => format!("Vaihe {} dokumentaatio puuttuu", phase),
            (Locale::Fi, Gap::Results) => "Projekti tarvitsee tulosyhteenvedon".to_string(),
            (Locale::En, Gap::Overview) => "Project needs an overview file".to_string(),
            (Locale::En, Gap::Phase { phase }) => {
                format!("Phase {} documentation is missing", phase)
            }
            (Locale::En, Gap::Results) => "Project needs a results summary".to_string(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Gap::Overview => "overview",
            Gap::Phase { .. } => "phase",
            Gap::Results => "results",
        }
    }
}

/// One proposed missing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(flatten)]
    pub gap: Gap,
    pub file_name: String,
    pub reason: String,
}

impl Suggestion {
    pub fn new(gap: Gap, locale: Locale) -> Self {
        Self {
            file_name: gap.file_name(),
            reason: gap.reason(locale),
            gap,
        }
    }
}

/// Gap detection bound to a display locale
#[derive(Debug, Clone, Copy, Default)]
pub struct GapSuggester {
    locale: Locale,
}

impl GapSuggester {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Detect gaps, in rule order
    pub fn detect(&self, analysis: &StructureAnalysis) -> Vec<Gap> {
        let mut gaps = vec![];

        if analysis.count(CategoryKey::Overview) == 0 {
            gaps.push(Gap::Overview);
        }

        if let Some(&max_phase) = analysis.phases.iter().max() {
            let present: BTreeSet<u32> = analysis.phases.iter().copied().collect();
            gaps.extend(
                (1..=max_phase)
                    .filter(|phase| !present.contains(phase))
                    .map(|phase| Gap::Phase { phase }),
            );
        }

        if analysis.count(CategoryKey::Results) == 0 {
            gaps.push(Gap::Results);
        }

        gaps
    }

    /// Detect gaps and attach filenames and localized reasons
    pub fn suggest_missing(&self, analysis: &StructureAnalysis) -> Vec<Suggestion> {
        self.detect(analysis)
            .into_iter()
            .map(|gap| Suggestion::new(gap, self.locale))
            .collect()
    }
}

/// Suggest missing files for an analysis in the given locale
pub fn suggest_missing(analysis: &StructureAnalysis, locale: Locale) -> Vec<Suggestion> {
    GapSuggester::new(locale).suggest_missing(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(categories: &[(CategoryKey, usize)], phases: &[u32]) -> StructureAnalysis {
        StructureAnalysis {
            total_files: categories.iter().map(|(_, n)| n).sum(),
            categories: categories.iter().copied().collect(),
            phases: phases.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_phase_gap() {
        let a = analysis(
            &[(CategoryKey::Overview, 1), (CategoryKey::Results, 1)],
            &[1, 3],
        );
        let suggestions = suggest_missing(&a, Locale::En);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].gap, Gap::Phase { phase: 2 });
        assert_eq!(suggestions[0].file_name, "phase2_documentation.md");
        assert_eq!(suggestions[0].reason, "Phase 2 documentation is missing");
    }

    #[test]
    fn test_missing_overview_and_results() {
        let a = analysis(&[(CategoryKey::Code, 3)], &[]);
        let suggestions = suggest_missing(&a, Locale::Fi);
        let types: Vec<&str> = suggestions.iter().map(|s| s.gap.type_name()).collect();
        assert_eq!(types, vec!["overview", "results"]);
        assert_eq!(suggestions[0].file_name, "overview.md");
        assert_eq!(suggestions[0].reason, "Projekti tarvitsee yleiskatsaustiedoston");
        assert_eq!(suggestions[1].file_name, "results_summary.md");
    }

    #[test]
    fn test_zero_count_treated_as_absent() {
        let a = analysis(
            &[(CategoryKey::Overview, 0), (CategoryKey::Results, 2)],
            &[],
        );
        let gaps = GapSuggester::new(Locale::En).detect(&a);
        assert_eq!(gaps, vec![Gap::Overview]);
    }

    #[test]
    fn test_rule_order() {
        let a = analysis(&[], &[2, 2, 5]);
        let gaps = GapSuggester::new(Locale::En).detect(&a);
        assert_eq!(
            gaps,
            vec![
                Gap::Overview,
                Gap::Phase { phase: 1 },
                Gap::Phase { phase: 3 },
                Gap::Phase { phase: 4 },
                Gap::Results,
            ]
        );
    }

    #[test]
    fn test_large_phase_number_fills_whole_range() {
        let a = analysis(
            &[(CategoryKey::Overview, 1), (CategoryKey::Results, 1)],
            &[2, 2024],
        );
        let gaps = GapSuggester::new(Locale::En).detect(&a);
        assert_eq!(gaps.len(), 2022);
        assert_eq!(gaps.first(), Some(&Gap::Phase { phase: 1 }));
        assert_eq!(gaps.last(), Some(&Gap::Phase { phase: 2023 }));
    }

    #[test]
    fn test_no_phase_suggestions_without_phases() {
        let a = analysis(&[(CategoryKey::Overview, 1), (CategoryKey::Results, 1)], &[]);
        assert!(suggest_missing(&a, Locale::En).is_empty());
    }

    #[test]
    fn test_modules_never_suggest() {
        let mut a = analysis(&[(CategoryKey::Overview, 1), (CategoryKey::Results, 1)], &[]);
        a.modules = vec![1, 4];
        a.missing_common = vec!["readme.md".to_string()];
        assert!(suggest_missing(&a, Locale::En).is_empty());
    }

    #[test]
    fn test_phase_zero_only() {
        let a = analysis(&[(CategoryKey::Overview, 1), (CategoryKey::Results, 1)], &[0]);
        assert!(suggest_missing(&a, Locale::En).is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let s = Suggestion::new(Gap::Phase { phase: 4 }, Locale::En);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "phase");
        assert_eq!(json["phase"], 4);
        assert_eq!(json["fileName"], "phase4_documentation.md");

        let json = serde_json::to_value(Suggestion::new(Gap::Results, Locale::En)).unwrap();
        assert_eq!(json["type"], "results");
        assert!(json.get("phase").is_none());
    }
}
