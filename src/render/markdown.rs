//! Markdown table of contents

use super::{file_metadata, file_route};
use crate::catalog::Locale;
use crate::engine::TocReport;

struct Labels {
    heading: &'static str,
    files: &'static str,
    suggestions: &'static str,
    empty_title: &'static str,
    empty_body: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Fi => Labels {
            heading: "📁 Projektin Sisältö",
            files: "tiedostoa",
            suggestions: "💡 Ehdotetut tiedostot",
            empty_title: "🔍 Sisältöä ei löytynyt tästä kansiosta.",
            empty_body: "Tiedostoja ei ole vielä lisätty tai manifest.json puuttuu.",
        },
        Locale::En => Labels {
            heading: "📁 Project Contents",
            files: "files",
            suggestions: "💡 Suggested files",
            empty_title: "🔍 No content found in this folder.",
            empty_body: "No files have been added yet or manifest.json is missing.",
        },
    }
}

/// Render a report as a Markdown table of contents.
///
/// Links point at `<base>/<file stem>`.
pub fn render_toc(report: &TocReport, locale: Locale, base: &str) -> String {
    let labels = labels(locale);
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", labels.heading));

    if report.is_empty() {
        output.push_str(&format!("{}\n\n", labels.empty_title));
        output.push_str(&format!("{}\n", labels.empty_body));
        return output;
    }

    for group in report.grouped_by_category.iter() {
        output.push_str(&format!(
            "## {} {} ({} {})\n\n",
            group.icon,
            group.title,
            group.len(),
            labels.files
        ));
        output.push_str(&format!("_{}_\n\n", group.description));

        for file in &group.files {
            let metadata = file_metadata(file, locale);
            let link = format!("[{}]({})", file.display_name, file_route(base, file));
            if metadata.is_empty() {
                output.push_str(&format!("- {}\n", link));
            } else {
                output.push_str(&format!("- {} — {}\n", link, metadata));
            }
        }
        output.push('\n');
    }

    if !report.suggestions.is_empty() {
        output.push_str(&format!("## {}\n\n", labels.suggestions));
        for suggestion in &report.suggestions {
            output.push_str(&format!(
                "- `{}`: {}\n",
                suggestion.file_name, suggestion.reason
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TocEngine;
    use crate::types::FileDescriptor;

    fn report(names: &[&str], locale: Locale) -> TocReport {
        let files: Vec<FileDescriptor> = names.iter().map(|n| FileDescriptor::named(*n)).collect();
        TocEngine::new(locale).build_report(&files)
    }

    #[test]
    fn test_render_groups_in_priority_order() {
        let report = report(
            &["phase1_results.md", "overview.md", "phase3_code_docs.md"],
            Locale::En,
        );
        let md = render_toc(&report, Locale::En, "/docs");

        assert!(md.starts_with("# 📁 Project Contents\n"));
        let overview = md.find("Overview (1 files)").unwrap();
        let results = md.find("Results (1 files)").unwrap();
        let code = md.find("Code Documentation (1 files)").unwrap();
        assert!(overview < results && results < code);
        assert!(md.contains("[Overview](/docs/overview)"));
        assert!(md.contains("(/docs/phase1_results) — Phase 1 • Results"));
    }

    #[test]
    fn test_render_suggestions_section() {
        let report = report(&["phase1_doc.md", "phase3_doc.md"], Locale::En);
        let md = render_toc(&report, Locale::En, "");
        assert!(md.contains("## 💡 Suggested files"));
        assert!(md.contains("`phase2_documentation.md`: Phase 2 documentation is missing"));
        assert!(md.contains("`overview.md`"));
    }

    #[test]
    fn test_render_empty_state_is_localized() {
        let md = render_toc(&report(&[], Locale::Fi), Locale::Fi, "");
        assert!(md.contains("# 📁 Projektin Sisältö"));
        assert!(md.contains("Sisältöä ei löytynyt"));
        assert!(!md.contains("💡"));
    }
}
