//! autotoc - Table of Contents for Loosely-Named Documentation
//!
//! Infers document categories from filenames, orders them into a navigable
//! table of contents, and proposes the files a project is missing.
//!
//! ## Core Features
//!
//! - **Classification**: six fixed categories, first match wins, `code` as fallback
//! - **Numeric-aware ordering**: `phase2` sorts before `phase10`
//! - **Gap detection**: missing overview, results, or phases in a numbered sequence
//! - **Localized display**: Finnish (default) and English titles and reasons
//! - **Discovery**: manifest, directory scan, or filename probing
//!
//! ## Quick Start
//!
//! ```ignore
//! use autotoc::{FileDescriptor, Locale, TocEngine};
//!
//! let engine = TocEngine::new(Locale::En);
//! let files = vec![
//!     FileDescriptor::named("overview.md"),
//!     FileDescriptor::named("phase1_results.md"),
//! ];
//! let report = engine.build_report(&files);
//! for group in report.grouped_by_category.iter() {
//!     println!("{} {}", group.icon, group.title);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: categories, locales, matching rules, display metadata
//! - [`classifier`]: per-file classification, display names, sort keys, grouping
//! - [`analyzer`]: structure statistics and gap suggestions
//! - [`engine`]: locale-bound facade producing a [`TocReport`]
//! - [`discovery`]: obtaining the file list from disk
//! - [`render`]: Markdown, JSON and terminal output
//! - [`config`]: layered configuration

pub mod analyzer;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod engine;
pub mod render;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Engine
pub use engine::{TocEngine, TocReport};

// Catalog
pub use catalog::{Catalog, CategoryDefinition, CategoryKey, Locale, get_catalog};

// Classification
pub use classifier::{
    CategoryGroup, GroupedFiles, classify, classify_and_group, generate_display_name, sort_key,
};

// Analysis
pub use analyzer::{Gap, GapSuggester, StructureAnalysis, StructureAnalyzer, Suggestion};

// Configuration
pub use config::{Config, ConfigLoader, DiscoveryStrategy, OutputFormat};

// Error Types
pub use types::{ClassifiedFile, FileDescriptor, Result, ResultExt, TocError};

// =============================================================================
// Discovery Re-exports
// =============================================================================

pub use discovery::{Discovered, DiscoverySource, FileScanner, discover, likely_file_names};
