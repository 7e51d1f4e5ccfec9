//! Toc Command
//!
//! Discover content files, classify them, and render the table of contents.
//!
//! Usage:
//!   autotoc toc [DIR] [--format text|markdown|json] [--output FILE] [--strategy S]

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::util::{CommandContext, GlobalOptions, resolve_dir};
use crate::config::{DiscoveryStrategy, OutputFormat};
use crate::discovery;
use crate::render;
use crate::types::{Result, ResultExt, TocError};

#[derive(Debug, Clone, Default)]
pub struct TocOptions {
    pub dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub strategy: Option<DiscoveryStrategy>,
}

pub fn run(global: &GlobalOptions, options: TocOptions) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    let dir = resolve_dir(options.dir);
    let format = options.format.unwrap_or(ctx.config.output.format);

    let mut discovery_config = ctx.config.discovery.clone();
    if let Some(strategy) = options.strategy {
        discovery_config.strategy = strategy;
    }

    let discovered = discovery::discover(&dir, &discovery_config)?;
    debug!("Using {} files from {}", discovered.files.len(), discovered.source);

    let report = ctx.engine.build_report(&discovered.files);
    let locale = ctx.locale();

    let Some(output_path) = options.output else {
        match format {
            OutputFormat::Text => render::print_report(&report, locale),
            OutputFormat::Markdown => {
                print!("{}", render::render_toc(&report, locale, &ctx.link_base(&dir)))
            }
            OutputFormat::Json => println!("{}", render::render_report(&report)?),
        }
        return Ok(());
    };

    let content = match format {
        OutputFormat::Text => {
            console::set_colors_enabled(false);
            render::format_report(&report, locale)
        }
        OutputFormat::Markdown => render::render_toc(&report, locale, &ctx.link_base(&dir)),
        OutputFormat::Json => render::render_report(&report)?,
    };

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, content).context_as(TocError::Render, || {
        format!("Failed to write {}", output_path.display())
    })?;

    let out = global.output();
    out.success(&format!(
        "Wrote table of contents for {} files",
        discovered.files.len()
    ));
    out.detail("Output", &output_path.display().to_string());
    out.detail("Source", &discovered.source.to_string());
    Ok(())
}
