//! Classify Command
//!
//! Show how individual filenames are classified.
//!
//! Usage:
//!   autotoc classify <NAME>... [--format text|json]

use console::style;

use crate::classifier::classify_file;
use crate::cli::util::{CommandContext, GlobalOptions};
use crate::config::OutputFormat;
use crate::types::{ClassifiedFile, FileDescriptor, Result};

pub fn run(global: &GlobalOptions, names: &[String], format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let classified: Vec<ClassifiedFile> = names
        .iter()
        .map(|name| classify_file(FileDescriptor::named(name.as_str())))
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
        return Ok(());
    }

    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    for file in &classified {
        let def = ctx.engine.catalog().get(file.category);
        println!(
            "{:<width$}  {} {:<12} {}  {}",
            file.name(),
            def.icon,
            file.category.as_str(),
            style(&file.sort_key).dim(),
            file.display_name,
            width = width
        );
    }
    Ok(())
}
