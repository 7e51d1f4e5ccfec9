//! Analyze Command
//!
//! Structure statistics and missing-file suggestions for a content directory,
//! without rendering a table of contents.

use std::path::PathBuf;

use console::style;
use serde_json::json;

use crate::cli::util::{CommandContext, GlobalOptions, resolve_dir};
use crate::config::OutputFormat;
use crate::discovery;
use crate::render::format_analysis;
use crate::types::Result;

pub fn run(global: &GlobalOptions, dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let dir = resolve_dir(dir);

    let discovered = discovery::discover(&dir, &ctx.config.discovery)?;
    let analysis = ctx.engine.analyze(&discovered.files);
    let suggestions = ctx.engine.suggest_missing(&analysis);

    if format == OutputFormat::Json {
        let value = json!({
            "source": discovered.source,
            "analysis": analysis,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let locale = ctx.locale();
    print!("{}", format_analysis(&analysis, locale));

    for (key, count) in &analysis.categories {
        let def = ctx.engine.catalog().get(*key);
        println!("  {} {:<24} {}", def.icon, def.title, count);
    }

    if !suggestions.is_empty() {
        println!();
        for suggestion in &suggestions {
            println!(
                "{} {} {}",
                style("+").yellow(),
                suggestion.file_name,
                style(&suggestion.reason).dim()
            );
        }
    }

    Ok(())
}
