use tracing::trace;

use crate::catalog::{CategoryKey, match_table};

/// Classify a filename.
///
/// Categories are tried in precedence order and the first one with a
/// matching rule wins. Names matching nothing fall back to
/// [`CategoryKey::FALLBACK`], so this never fails.
pub fn classify(file_name: &str) -> CategoryKey {
    let category = match_table()
        .iter()
        .find(|rules| rules.matches(file_name))
        .map(|rules| rules.key)
        .unwrap_or(CategoryKey::FALLBACK);

    trace!(file = file_name, %category, "classified");
    category
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_each_category() {
        assert_eq!(classify("overview.md"), CategoryKey::Overview);
        assert_eq!(classify("README.md"), CategoryKey::Overview);
        assert_eq!(classify("tutkimuksen_yleiskatsaus.md"), CategoryKey::Overview);
        assert_eq!(classify("research_next_steps.md"), CategoryKey::NextSteps);
        assert_eq!(classify("jatkotutkimussuunnitelmat.md"), CategoryKey::NextSteps);
        assert_eq!(classify("roadmap.md"), CategoryKey::NextSteps);
        assert_eq!(classify("documentation_guidelines.md"), CategoryKey::Guidelines);
        assert_eq!(classify("dokumentaatio_ohjeet.md"), CategoryKey::Guidelines);
        assert_eq!(classify("final_results.md"), CategoryKey::Results);
        assert_eq!(classify("vaihe1_tulokset.md"), CategoryKey::Results);
        assert_eq!(classify("phase2_doc.md"), CategoryKey::Phase);
        assert_eq!(classify("module_01_setup_code_docs.md"), CategoryKey::Code);
        assert_eq!(classify("api_docs.md"), CategoryKey::Code);
    }

    #[test]
    fn test_results_precede_phase() {
        assert_eq!(classify("phase2_results.md"), CategoryKey::Results);
        assert_eq!(
            classify("phase2_randomness_analysis_results.md"),
            CategoryKey::Results
        );
    }

    #[test]
    fn test_earlier_category_wins() {
        // summary (overview) beats results
        assert_eq!(classify("results_summary.md"), CategoryKey::Overview);
        // future (next_steps) beats code
        assert_eq!(classify("future_api_docs.md"), CategoryKey::NextSteps);
    }

    #[test]
    fn test_phase_code_docs_fall_to_code() {
        assert_eq!(classify("phase3_code_docs.md"), CategoryKey::Code);
    }

    #[test]
    fn test_descriptive_phase_names_stay_phase() {
        assert_eq!(classify("phase1_data_collection.md"), CategoryKey::Phase);
        assert_eq!(classify("vaihe2_tulosten_analyysi.md"), CategoryKey::Phase);
        assert_eq!(classify("phase4_experiment_setup.md"), CategoryKey::Phase);
        assert_eq!(classify("multiphase2.md"), CategoryKey::Phase);
        assert_eq!(classify("phase_4_doc.md"), CategoryKey::Code);
    }

    #[test]
    fn test_unmatched_falls_back_to_code() {
        assert_eq!(classify("random_unmatched_name.xyz"), CategoryKey::Code);
        assert_eq!(classify("notes.txt"), CategoryKey::Code);
        assert_eq!(classify("x"), CategoryKey::Code);
    }

    #[test]
    fn test_non_markdown_extensions_do_not_match_rules() {
        assert_eq!(classify("overview.txt"), CategoryKey::Code);
        assert_eq!(classify("phase1.py"), CategoryKey::Code);
    }

    proptest! {
        #[test]
        fn prop_classify_is_total(name in "\\PC{1,64}") {
            let key = classify(&name);
            prop_assert!(CategoryKey::ALL.contains(&key));
        }

        #[test]
        fn prop_classify_ignores_case(name in "[a-zA-Z0-9_]{1,24}\\.md") {
            prop_assert_eq!(classify(&name), classify(&name.to_uppercase()));
        }
    }
}
