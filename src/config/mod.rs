//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/autotoc/config.toml)
//! 3. Project config (.autotoc/config.toml)
//! 4. Environment variables (AUTOTOC_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::{CONFIG_FILE, ConfigLayer, ConfigLoader, LayerScope, PROJECT_DIR};
pub use types::*;
