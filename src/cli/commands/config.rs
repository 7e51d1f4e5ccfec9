//! Config Command
//!
//! Manage autotoc configuration.
//!
//! Usage:
//!   autotoc config show [-g] [-f json]
//!   autotoc config path
//!   autotoc config edit [-g]
//!   autotoc config init [-g] [--force]

use crate::cli::util::{GlobalOptions, require_initialized};
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show configuration
pub fn show(global: bool, format: &str) -> Result<()> {
    let as_json = format == "json";

    if !global {
        // Merged effective config
        return ConfigLoader::show_config(as_json);
    }

    match ConfigLoader::global_config_path() {
        Some(global_path) if global_path.exists() => {
            let content = std::fs::read_to_string(&global_path)?;
            if format == "toml" {
                println!("{}", content);
            } else {
                println!("# Global Config: {}\n", global_path.display());
                println!("{}", content);
            }
        }
        Some(_) => {
            println!("No global config found.");
            println!("Run 'autotoc config init --global' to create one.");
        }
        None => println!("Cannot determine global config directory."),
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path()
}

/// Edit configuration file
pub fn edit(global: bool) -> Result<()> {
    if !global {
        require_initialized()?;
    }
    ConfigLoader::edit_config(global)
}

/// Initialize global configuration
pub fn init_global(options: &GlobalOptions, force: bool) -> Result<()> {
    let dir = ConfigLoader::init_global(force)?;
    let out = options.output();
    out.success("Initialized global configuration");
    out.detail("Directory", &dir.display().to_string());
    if let Some(config_path) = ConfigLoader::global_config_path() {
        out.detail("Config", &config_path.display().to_string());
    }
    Ok(())
}

/// Initialize project configuration
pub fn init_project(options: &GlobalOptions, force: bool) -> Result<()> {
    let dir = ConfigLoader::init_project(options.locale.as_deref(), force)?;
    let out = options.output();
    out.success("Initialized project configuration");
    out.detail("Directory", &dir.display().to_string());
    out.detail(
        "Config",
        &ConfigLoader::project_config_path().display().to_string(),
    );
    Ok(())
}
