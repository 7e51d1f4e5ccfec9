//! Presentation Adapter
//!
//! Turns a [`TocReport`](crate::engine::TocReport) into something a reader
//! can use:
//! - [`markdown`]: linked table of contents
//! - [`json`]: machine-readable report
//! - [`console`]: coloured terminal summary

pub mod console;
pub mod json;
pub mod markdown;

pub use console::{format_analysis, format_report, print_report};
pub use json::render_report;
pub use markdown::render_toc;

use crate::analyzer::{module_number, phase_number};
use crate::catalog::Locale;
use crate::constants::display::STRIPPED_EXTENSION;
use crate::types::ClassifiedFile;

const METADATA_SEPARATOR: &str = " • ";

/// Short label describing a file: its phase or module number and a content hint.
///
/// Empty when the name carries neither.
pub fn file_metadata(file: &ClassifiedFile, locale: Locale) -> String {
    let name = file.name();
    let lower = name.to_lowercase();
    let mut parts = Vec::new();

    if let Some(n) = phase_number(name) {
        parts.push(match locale {
            Locale::Fi => format!("Vaihe {}", n),
            Locale::En => format!("Phase {}", n),
        });
    } else if let Some(n) = module_number(name) {
        parts.push(match locale {
            Locale::Fi => format!("Moduuli {}", n),
            Locale::En => format!("Module {}", n),
        });
    }

    let hint = if lower.contains("results") {
        Some(("Tulokset", "Results"))
    } else if lower.contains("documentation") {
        Some(("Dokumentaatio", "Documentation"))
    } else if lower.contains("code") {
        Some(("Koodi", "Code"))
    } else {
        None
    };
    if let Some((fi, en)) = hint {
        parts.push(match locale {
            Locale::Fi => fi.to_string(),
            Locale::En => en.to_string(),
        });
    }

    parts.join(METADATA_SEPARATOR)
}

/// Link target for a file: `<base>/<name without .md>`
pub fn file_route(base: &str, file: &ClassifiedFile) -> String {
    let name = file.name();
    let stem = name.strip_suffix(STRIPPED_EXTENSION).unwrap_or(name);

    let base = base.trim_end_matches('/');
    if base.is_empty() {
        stem.to_string()
    } else {
        format!("{}/{}", base, stem)
    }
}

/// `1, 3, 3` style list
pub(crate) fn format_counts(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
