//! Filename Matching Table
//!
//! Locale-independent rules deciding which category a filename belongs to.
//! Rules are case-insensitive and unanchored unless they say otherwise; a
//! category matches when any of its rules matches the filename.
//!
//! Several rule sets overlap (`phase2_results.md` satisfies both `results`
//! and `phase`). The table is ordered by [`CategoryKey::ALL`] and the
//! classifier returns the first category that matches. A category may also
//! carry exclusions: names matching one of them never match that category.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::CategoryKey;

/// Raw rule sources, in precedence order
const RULE_SOURCES: &[(CategoryKey, &[&str])] = &[
    (
        CategoryKey::Overview,
        &[
            r"overview\.md$",
            r"yleiskatsaus\.md$",
            r"summary\.md$",
            r"yhteenveto\.md$",
            r"readme\.md$",
            r"index\.md$",
        ],
    ),
    (
        CategoryKey::NextSteps,
        &[
            r"next[_\s]steps?\.md$",
            r"jatko.*\.md$",
            r"future.*\.md$",
            r"tulevaisuus.*\.md$",
            r"roadmap\.md$",
        ],
    ),
    (
        CategoryKey::Guidelines,
        &[
            r"guidelines?\.md$",
            r"ohjeet?\.md$",
            r"documentation.*guidelines?\.md$",
            r"coding.*standards?\.md$",
            r"style.*guide\.md$",
        ],
    ),
    (
        CategoryKey::Results,
        &[
            r"results?\.md$",
            r"tulokset?\.md$",
            r"findings?\.md$",
            r"analysis.*results?\.md$",
            r"experimental.*results?\.md$",
        ],
    ),
    (
        CategoryKey::Phase,
        &[
            r"phase\d+.*\.md$",
            r"vaihe\d+.*\.md$",
            r"step\d+.*\.md$",
            r"stage\d+.*\.md$",
        ],
    ),
    (
        CategoryKey::Code,
        &[
            r"code.*docs?\.md$",
            r"koodi.*\.md$",
            r"implementation.*\.md$",
            r"api.*docs?\.md$",
            r"technical.*\.md$",
            r"module.*\.md$",
            r"moduuli.*\.md$",
        ],
    ),
];

/// Names a category refuses even when one of its rules matches
///
/// Code documentation for a phase (`phase3_code_docs.md`) belongs under
/// `code`, not under the phase it mentions.
const EXCLUSION_SOURCES: &[(CategoryKey, &[&str])] = &[(CategoryKey::Phase, &[r"code.*docs?\.md$"])];

/// Compiled rules for one category
pub struct CategoryRules {
    pub key: CategoryKey,
    pub rules: Vec<Regex>,
    pub excludes: Vec<Regex>,
}

impl CategoryRules {
    /// True if any rule matches `file_name` and no exclusion does
    pub fn matches(&self, file_name: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(file_name))
            && !self.excludes.iter().any(|rule| rule.is_match(file_name))
    }
}

static MATCH_TABLE: LazyLock<Vec<CategoryRules>> = LazyLock::new(|| {
    RULE_SOURCES
        .iter()
        .map(|(key, sources)| CategoryRules {
            key: *key,
            rules: sources.iter().map(|src| compile(src)).collect(),
            excludes: EXCLUSION_SOURCES
                .iter()
                .filter(|(excluded, _)| excluded == key)
                .flat_map(|(_, sources)| sources.iter().map(|src| compile(src)))
                .collect(),
        })
        .collect()
});

fn compile(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .expect("built-in filename rule must compile")
}

/// The full matching table in precedence order
pub fn match_table() -> &'static [CategoryRules] {
    &MATCH_TABLE
}

/// Compiled rules for a single category
pub fn rules_for(key: CategoryKey) -> &'static CategoryRules {
    // RULE_SOURCES follows `CategoryKey::ALL`
    &MATCH_TABLE[key as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_precedence_order() {
        let keys: Vec<CategoryKey> = match_table().iter().map(|r| r.key).collect();
        assert_eq!(keys, CategoryKey::ALL.to_vec());
    }

    #[test]
    fn test_every_category_has_rules() {
        for rules in match_table() {
            assert!(!rules.rules.is_empty(), "{} has no rules", rules.key);
        }
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        assert!(rules_for(CategoryKey::Overview).matches("PROJECT_OVERVIEW.MD"));
        assert!(rules_for(CategoryKey::Results).matches("Final_Results.md"));
    }

    #[test]
    fn test_phase_rules_accept_descriptive_names() {
        let phase = rules_for(CategoryKey::Phase);
        assert!(phase.matches("phase1.md"));
        assert!(phase.matches("phase2_doc.md"));
        assert!(phase.matches("phase1_data_collection.md"));
        assert!(phase.matches("phase4_experiment_setup.md"));
        assert!(phase.matches("vaihe2_tulosten_analyysi.md"));
        assert!(phase.matches("project_stage10_plan.md"));
        assert!(phase.matches("multiphase2.md"));
    }

    #[test]
    fn test_phase_rules_reject() {
        let phase = rules_for(CategoryKey::Phase);
        // The number must follow the token directly
        assert!(!phase.matches("phase_4_doc.md"));
        assert!(!phase.matches("phase1_notes.txt"));
        assert!(!phase.matches("phase3_code_docs.md"));
        assert!(!phase.matches("step2_CODE_DOC.md"));
    }

    #[test]
    fn test_exclusions_only_apply_to_phase() {
        assert!(!rules_for(CategoryKey::Phase).excludes.is_empty());
        assert!(rules_for(CategoryKey::Code).excludes.is_empty());
        assert!(rules_for(CategoryKey::Code).matches("phase3_code_docs.md"));
    }

    #[test]
    fn test_overlapping_rules() {
        assert!(rules_for(CategoryKey::Results).matches("phase2_results.md"));
        assert!(rules_for(CategoryKey::Phase).matches("phase2_results.md"));
    }
}
