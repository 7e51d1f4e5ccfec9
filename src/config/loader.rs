//! Configuration Loader (Figment-based)
//!
//! Layers, lowest priority first:
//! 1. Built-in defaults
//! 2. Global file (`$XDG_CONFIG_HOME/autotoc/config.toml`, else `~/.config/autotoc/`)
//! 3. Project file (`<root>/.autotoc/config.toml`)
//! 4. Environment (`AUTOTOC_` prefix, `__` between nested keys)
//!
//! Missing files are skipped. The merged result is validated before use.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use directories::BaseDirs;
use tracing::{debug, info};

use super::types::Config;
use crate::catalog::Locale;
use crate::types::{Result, TocError};

/// Project data directory name
pub const PROJECT_DIR: &str = ".autotoc";

/// Config file name inside config directories
pub const CONFIG_FILE: &str = "config.toml";

const ENV_PREFIX: &str = "AUTOTOC_";

/// Where a config file layer comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerScope {
    Global,
    Project,
}

impl fmt::Display for LayerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerScope::Global => write!(f, "Global"),
            LayerScope::Project => write!(f, "Project"),
        }
    }
}

/// One candidate config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    pub scope: LayerScope,
    pub path: PathBuf,
}

impl ConfigLayer {
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Effective configuration for the current directory
    pub fn load() -> Result<Config> {
        Self::load_in(&env::current_dir()?)
    }

    /// Effective configuration for a project rooted at `root`
    pub fn load_in(root: &Path) -> Result<Config> {
        Self::extract(Self::figment(root))
    }

    /// Defaults plus a single file; no global, project, or env layers
    pub fn load_from_file(path: &Path) -> Result<Config> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file(path)),
        )
    }

    /// Candidate file layers in merge order, whether or not they exist
    pub fn layers(root: &Path) -> Vec<ConfigLayer> {
        let mut layers = Vec::with_capacity(2);
        if let Some(path) = Self::global_config_path() {
            layers.push(ConfigLayer {
                scope: LayerScope::Global,
                path,
            });
        }
        layers.push(ConfigLayer {
            scope: LayerScope::Project,
            path: root.join(PROJECT_DIR).join(CONFIG_FILE),
        });
        layers
    }

    fn figment(root: &Path) -> Figment {
        let base = Figment::new().merge(Serialized::defaults(Config::default()));

        let with_files = Self::layers(root)
            .into_iter()
            .filter(ConfigLayer::exists)
            .fold(base, |figment, layer| {
                debug!("Merging {} config: {}", layer.scope, layer.path.display());
                figment.merge(Toml::file(&layer.path))
            });

        // AUTOTOC_DISCOVERY__MANIFEST -> discovery.manifest
        with_files.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| TocError::Config(format!("Configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Paths
    // =========================================================================

    /// `~/.config/autotoc/`, honouring `XDG_CONFIG_HOME`
    pub fn global_dir() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().join(".config")))
            .map(|dir| dir.join("autotoc"))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Project config path relative to the current directory
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join(CONFIG_FILE)
    }

    pub fn project_dir() -> PathBuf {
        PathBuf::from(PROJECT_DIR)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// One line per layer, marking which files exist
    pub fn describe_layers(root: &Path) -> String {
        let mut lines = vec!["Configuration paths:".to_string(), String::new()];
        let layers = Self::layers(root);

        if !layers.iter().any(|l| l.scope == LayerScope::Global) {
            lines.push("  Global:  (not available)".to_string());
        }
        for layer in &layers {
            let mark = if layer.exists() { "✓" } else { "✗" };
            lines.push(format!(
                "  {:<8} {} {}",
                format!("{}:", layer.scope),
                mark,
                layer.path.display()
            ));
        }
        lines.push(format!(
            "  Env:      {}* (nested keys joined by __)",
            ENV_PREFIX
        ));
        lines.join("\n")
    }

    pub fn show_path() -> Result<()> {
        println!("{}", Self::describe_layers(&env::current_dir()?));
        Ok(())
    }

    /// Serialize a config as TOML or JSON
    pub fn render_config(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| TocError::Config(e.to_string()))
        }
    }

    /// Print the merged effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;
        println!("{}", Self::render_config(&config, as_json)?);
        Ok(())
    }

    /// Open a config file in `$EDITOR`
    pub fn edit_config(global: bool) -> Result<()> {
        let path = if global {
            Self::global_config_path().ok_or_else(|| {
                TocError::Config("Cannot determine global config path".to_string())
            })?
        } else {
            Self::project_config_path()
        };

        if !path.exists() {
            let hint = if global {
                "autotoc config init --global"
            } else {
                "autotoc config init"
            };
            return Err(TocError::Config(format!(
                "{} does not exist. Run: {}",
                path.display(),
                hint
            )));
        }

        let editor = Self::editor();
        let status = Command::new(&editor)
            .arg(&path)
            .status()
            .map_err(|e| TocError::Config(format!("Failed to launch {}: {}", editor, e)))?;

        if !status.success() {
            return Err(TocError::Config(format!("{} exited with {}", editor, status)));
        }

        info!("Edited {}", path.display());
        Ok(())
    }

    fn editor() -> String {
        env::var("VISUAL")
            .or_else(|_| env::var("EDITOR"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "vi".to_string()
                }
            })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the global config unless it exists (or `force`)
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let dir = Self::global_dir().ok_or_else(|| {
            TocError::Config("Cannot determine global config directory".to_string())
        })?;
        write_template(&dir, &Self::global_template(), force)?;
        Ok(dir)
    }

    /// Write `<root>/.autotoc/config.toml` unless it exists (or `force`)
    pub fn init_project_at(root: &Path, locale: Option<&str>, force: bool) -> Result<PathBuf> {
        let dir = root.join(PROJECT_DIR);
        write_template(&dir, &Self::project_template(locale), force)?;
        Ok(dir)
    }

    /// Initialize the project config in the current directory
    pub fn init_project(locale: Option<&str>, force: bool) -> Result<PathBuf> {
        Self::init_project_at(&env::current_dir()?, locale, force)?;
        Ok(Self::project_dir())
    }

    pub fn is_project_initialized() -> bool {
        Self::project_config_path().exists()
    }

    fn global_template() -> String {
        format!(
            r#"# autotoc global configuration
# Applies to every project; .autotoc/config.toml overrides it.

version = "1.0"

# Display language: fi, en
locale = "{}"

[output]
format = "text"
"#,
            Locale::default()
        )
    }

    fn project_template(locale: Option<&str>) -> String {
        let locale = locale
            .map(Locale::resolve)
            .unwrap_or_default();
        format!(
            r#"# autotoc project configuration

version = "1.0"
locale = "{}"

# How content files are found: auto, manifest, scan, probe
[discovery]
strategy = "auto"
manifest = "manifest.json"
extensions = ["md"]
exclude = []
recursive = false

[output]
format = "text"
# link_base = "/projects/example"
"#,
            locale
        )
    }
}

fn write_template(dir: &Path, content: &str, force: bool) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(CONFIG_FILE);

    if path.exists() && !force {
        info!("Config exists, leaving it untouched: {}", path.display());
        return Ok(());
    }

    fs::write(&path, content)?;
    info!("Wrote config: {}", path.display());
    Ok(())
}
