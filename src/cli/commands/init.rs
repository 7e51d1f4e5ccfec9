//! Init Command
//!
//! Initialize autotoc in the current directory.

use crate::cli::util::{GlobalOptions, is_initialized};
use crate::config::{ConfigLoader, PROJECT_DIR};
use crate::types::{Result, TocError};

pub fn run(global: &GlobalOptions, force: bool) -> Result<()> {
    if is_initialized() && !force {
        return Err(TocError::Config(
            "Already initialized. Use --force to overwrite.".to_string(),
        ));
    }

    ConfigLoader::init_project(global.locale.as_deref(), force)?;

    // Global config is optional; never overwrite it from here
    if let Err(e) = ConfigLoader::init_global(false) {
        tracing::debug!("Global config init skipped: {}", e);
    }

    let out = global.output();
    out.success(&format!("Initialized autotoc in {}/", PROJECT_DIR));
    out.detail(
        "Config",
        &ConfigLoader::project_config_path().display().to_string(),
    );
    out.info("Next: run 'autotoc toc <DIR>' to build a table of contents");

    Ok(())
}
