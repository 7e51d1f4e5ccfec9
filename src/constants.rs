//! Global Constants
//!
//! Centralized constants for classification, analysis, and discovery.
//! All magic numbers should be defined here with documentation.

/// Composite sort key constants
pub mod sort_key {
    /// Zero-pad width of the category priority segment
    pub const PRIORITY_WIDTH: usize = 2;

    /// Zero-pad width of the embedded number segment
    pub const NUMBER_WIDTH: usize = 3;

    /// Number used when a filename carries no digits
    pub const NO_NUMBER_SENTINEL: u64 = 999;

    /// Segment separator
    pub const SEPARATOR: char = '_';
}

/// Structure analysis constants
pub mod analysis {
    /// Basenames whose stems are expected somewhere in a content folder
    pub const COMMON_FILES: &[&str] = &["overview.md", "readme.md", "results.md"];
}

/// Gap suggestion constants
pub mod suggestions {
    /// Proposed name for a missing overview
    pub const OVERVIEW_FILE: &str = "overview.md";

    /// Proposed name for a missing results summary
    pub const RESULTS_FILE: &str = "results_summary.md";

    /// Proposed name for a missing phase document
    pub fn phase_file(number: u32) -> String {
        format!("phase{}_documentation.md", number)
    }
}

/// Display name constants
pub mod display {
    /// Extension stripped from display names (exact, case-sensitive)
    pub const STRIPPED_EXTENSION: &str = ".md";

    /// Title-cased word → corrected spelling
    pub const ACRONYMS: &[(&str, &str)] = &[
        ("Api", "API"),
        ("Json", "JSON"),
        ("Ai", "AI"),
        ("Ml", "ML"),
        ("Ui", "UI"),
        ("Ux", "UX"),
        ("Css", "CSS"),
        ("Html", "HTML"),
        ("Rmt", "RMT"),
        ("Javascript", "JavaScript"),
    ];
}

/// File discovery constants
pub mod discovery {
    /// Default manifest filename looked up in a content folder
    pub const DEFAULT_MANIFEST: &str = "manifest.json";

    /// Default extensions kept by the directory scanner
    pub const DEFAULT_EXTENSIONS: &[&str] = &["md"];

    /// Maximum file size to list (5MB)
    pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

    /// Highest phase number probed
    pub const PROBE_MAX_PHASE: u32 = 10;

    /// Highest module number probed
    pub const PROBE_MAX_MODULE: u32 = 20;
}
