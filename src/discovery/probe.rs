//! Filename probing
//!
//! When a directory cannot be listed, try the names content folders commonly
//! use and keep the ones that exist.

use std::path::Path;

use tracing::debug;

use super::dedup_preserving_order;
use crate::constants::discovery::{PROBE_MAX_MODULE, PROBE_MAX_PHASE};
use crate::types::FileDescriptor;

/// Candidate filenames for a content directory named `project_name`
///
/// An empty name skips the `<project>_overview.md` candidates.
pub fn common_file_names(project_name: &str) -> Vec<String> {
    let mut names = vec![];
    if !project_name.is_empty() {
        names.push(format!("{}_overview.md", project_name));
        names.push(format!("{}_overview.md", project_name.replace('-', "_")));
    }
    names.extend([
        "overview.md".to_string(),
        "readme.md".to_string(),
        "index.md".to_string(),
        // next steps
        "research_next_steps.md".to_string(),
        "research_next_steps_comprehensive.md".to_string(),
        "future_research.md".to_string(),
        "next_steps.md".to_string(),
        // guidelines
        "documentation_guidelines.md".to_string(),
        "documentation_guidelines_finnish.md".to_string(),
        "documentation_guidelines_english.md".to_string(),
        "coding_guidelines.md".to_string(),
        "guidelines.md".to_string(),
    ]);

    for i in 1..=PROBE_MAX_PHASE {
        names.extend([
            format!("phase{}_results.md", i),
            format!("phase{}_documentation.md", i),
            format!("phase{}_analysis.md", i),
            format!("phase_{}_results.md", i),
            format!("phase_{}_documentation.md", i),
            format!("vaihe{}_tulokset.md", i),
            format!("vaihe{}_dokumentaatio.md", i),
        ]);
    }

    for i in 1..=PROBE_MAX_MODULE {
        names.extend([
            format!("module_{:02}_code_docs.md", i),
            format!("module_{:02}_documentation.md", i),
            format!("module{:02}_docs.md", i),
            format!("moduuli_{:02}_koodi.md", i),
        ]);
    }

    names.extend(
        [
            "results_summary.md",
            "final_results.md",
            "analysis_results.md",
            "experimental_results.md",
            "tulokset_yhteenveto.md",
            "code_documentation.md",
            "api_documentation.md",
            "implementation_notes.md",
            "technical_documentation.md",
            "koodi_dokumentaatio.md",
        ]
        .map(String::from),
    );

    dedup_preserving_order(names)
}

/// Last segment of `dir` once `.` and `..` are resolved
pub fn project_name(dir: &Path) -> String {
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Probe `dir` for the common filenames; returns those that exist
pub fn probe(dir: &Path) -> Vec<FileDescriptor> {
    let candidates = common_file_names(&project_name(dir));

    let found: Vec<FileDescriptor> = candidates
        .into_iter()
        .filter_map(|name| {
            let path = dir.join(&name);
            let metadata = path.metadata().ok().filter(|m| m.is_file())?;
            Some(FileDescriptor::new(name, path.to_string_lossy()).with_size(metadata.len()))
        })
        .collect();

    debug!("Probe found {} files in {}", found.len(), dir.display());
    found
}
