//! Terminal summary
//!
//! Same content as the Markdown table of contents, laid out for a terminal
//! with `console` styling. Styling is dropped automatically when stdout is
//! not a TTY.

use console::style;

use super::{file_metadata, format_counts};
use crate::analyzer::StructureAnalysis;
use crate::catalog::Locale;
use crate::engine::TocReport;

/// Plain-text rendering, one line per entry
pub fn format_report(report: &TocReport, locale: Locale) -> String {
    let mut output = String::new();

    let heading = match locale {
        Locale::Fi => "Projektin Sisältö",
        Locale::En => "Project Contents",
    };
    output.push_str(&format!("{}\n", style(heading).bold().underlined()));

    if report.is_empty() {
        let empty = match locale {
            Locale::Fi => "Ei tiedostoja",
            Locale::En => "No files",
        };
        output.push_str(&format!("  {}\n", style(empty).dim()));
    }

    for group in report.grouped_by_category.iter() {
        output.push_str(&format!(
            "\n{} {} {}\n",
            group.icon,
            style(&group.title).bold(),
            style(format!("({})", group.len())).dim()
        ));
        for file in &group.files {
            let metadata = file_metadata(file, locale);
            if metadata.is_empty() {
                output.push_str(&format!("  {}\n", file.display_name));
            } else {
                output.push_str(&format!(
                    "  {} {}\n",
                    file.display_name,
                    style(metadata).cyan()
                ));
            }
        }
    }

    output.push_str(&format_analysis(&report.analysis, locale));

    if !report.suggestions.is_empty() {
        let title = match locale {
            Locale::Fi => "Ehdotetut tiedostot",
            Locale::En => "Suggested files",
        };
        output.push_str(&format!("\n{}\n", style(title).bold()));
        for suggestion in &report.suggestions {
            output.push_str(&format!(
                "  {} {} {}\n",
                style("+").yellow(),
                suggestion.file_name,
                style(&suggestion.reason).dim()
            ));
        }
    }

    output
}

/// Statistics block shared by `toc` and `analyze`
pub fn format_analysis(analysis: &StructureAnalysis, locale: Locale) -> String {
    let (total, phases, modules, missing) = match locale {
        Locale::Fi => ("Tiedostoja", "Vaiheet", "Moduulit", "Puuttuvat"),
        Locale::En => ("Files", "Phases", "Modules", "Missing"),
    };

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "─".repeat(40)));
    output.push_str(&format!("{}: {}\n", total, analysis.total_files));
    if !analysis.phases.is_empty() {
        output.push_str(&format!("{}: {}\n", phases, format_counts(&analysis.phases)));
    }
    if !analysis.modules.is_empty() {
        output.push_str(&format!("{}: {}\n", modules, format_counts(&analysis.modules)));
    }
    if !analysis.missing_common.is_empty() {
        output.push_str(&format!(
            "{}: {}\n",
            missing,
            analysis.missing_common.join(", ")
        ));
    }
    output
}

/// Print the terminal summary to stdout
pub fn print_report(report: &TocReport, locale: Locale) {
    print!("{}", format_report(report, locale));
}
