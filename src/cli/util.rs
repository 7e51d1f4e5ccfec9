//! CLI Common Utilities
//!
//! Shared configuration loading and path resolution for CLI commands.

use std::path::{Path, PathBuf};

use super::ui::Output;
use crate::catalog::Locale;
use crate::config::{Config, ConfigLoader, PROJECT_DIR};
use crate::engine::TocEngine;
use crate::types::{Result, TocError};

/// Flags every command accepts
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file; skips the layered lookup
    pub config_path: Option<PathBuf>,
    /// Locale tag overriding the configured one
    pub locale: Option<String>,
    /// Only errors reach the terminal
    pub quiet: bool,
}

impl GlobalOptions {
    pub fn output(&self) -> Output {
        Output::quiet(self.quiet)
    }
}

/// Command execution context
///
/// Effective configuration plus an engine bound to the effective locale.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub engine: TocEngine,
}

impl CommandContext {
    /// Load configuration and apply command-line overrides
    pub fn load(options: &GlobalOptions) -> Result<Self> {
        let mut config = match &options.config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(TocError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                ConfigLoader::load_from_file(path)?
            }
            None => ConfigLoader::load()?,
        };

        if let Some(tag) = &options.locale {
            config.locale = tag.clone();
        }

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        let engine = TocEngine::new(config.locale());
        Self { config, engine }
    }

    pub fn locale(&self) -> Locale {
        self.engine.locale()
    }

    /// Link prefix: explicit value, else the content directory path
    pub fn link_base(&self, dir: &Path) -> String {
        self.config
            .output
            .link_base
            .clone()
            .unwrap_or_else(|| dir.to_string_lossy().into_owned())
    }
}

/// Content directory argument, defaulting to the current directory
pub fn resolve_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}

/// Require the project directory to exist
///
/// Returns the `.autotoc` directory path if initialized,
/// or `TocError::NotInitialized` if not.
pub fn require_initialized() -> Result<PathBuf> {
    let project_dir = Path::new(PROJECT_DIR);

    if !project_dir.exists() {
        return Err(TocError::NotInitialized);
    }

    Ok(project_dir.to_path_buf())
}

/// Check if the current directory has a project config
pub fn is_initialized() -> bool {
    ConfigLoader::is_project_initialized()
}
