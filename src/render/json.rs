use crate::engine::TocReport;
use crate::types::Result;

/// Pretty-printed JSON of the full report
pub fn render_report(report: &TocReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
