//! Structure Analyzer Module
//!
//! Batch analysis over a classified file set:
//! - Aggregate statistics (category counts, phase/module numbers, common files)
//! - Gap suggestions derived from those statistics

pub mod gaps;
pub mod structure;

pub use gaps::{Gap, GapSuggester, Suggestion, suggest_missing};
pub use structure::{StructureAnalysis, StructureAnalyzer, module_number, phase_number};
