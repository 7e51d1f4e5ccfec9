use super::dedup_preserving_order;
use crate::catalog::Locale;

/// Filenames a project at `project_path` probably has or should have.
///
/// Project-named files first, then locale-specific names, then generic ones.
pub fn likely_file_names(project_path: &str, locale: Locale) -> Vec<String> {
    let project = project_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .replace(['-', '_'], "_");

    let mut names = vec![
        format!("{}_overview.md", project),
        format!("{}_summary.md", project),
    ];

    let localized: &[&str] = match locale {
        Locale::Fi => &[
            "tutkimuksen_yleiskatsaus.md",
            "projektin_yhteenveto.md",
            "jatkotutkimussuunnitelmat.md",
            "dokumentaatio_ohjeet.md",
        ],
        Locale::En => &[
            "project_overview.md",
            "research_summary.md",
            "future_research_plans.md",
            "documentation_guidelines.md",
        ],
    };
    names.extend(localized.iter().map(|n| n.to_string()));

    names.extend(
        ["overview.md", "readme.md", "index.md", "results.md", "conclusions.md"].map(String::from),
    );

    dedup_preserving_order(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_names_first() {
        let names = likely_file_names("fi/projects/indivisible-stochastic", Locale::Fi);
        assert_eq!(names[0], "indivisible_stochastic_overview.md");
        assert_eq!(names[1], "indivisible_stochastic_summary.md");
        assert_eq!(names[2], "tutkimuksen_yleiskatsaus.md");
        assert_eq!(names.last().unwrap(), "conclusions.md");
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_english_names() {
        let names = likely_file_names("projects/demo/", Locale::En);
        assert_eq!(names[0], "demo_overview.md");
        assert!(names.contains(&"future_research_plans.md".to_string()));
        assert!(!names.contains(&"dokumentaatio_ohjeet.md".to_string()));
    }

    #[test]
    fn test_duplicates_removed() {
        // "project" yields project_overview.md twice in English
        let names = likely_file_names("project", Locale::En);
        let count = names.iter().filter(|n| *n == "project_overview.md").count();
        assert_eq!(count, 1);
        assert_eq!(names.len(), 10);
    }
}
