//! Unified Error Type System
//!
//! Centralized error types for discovery, configuration, and rendering.
//!
//! The classification core (catalog, classifier, analyzer, engine) is total
//! and never produces these errors. They originate only at the edges:
//! reading manifests, walking directories, loading configuration, and
//! writing rendered output.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum TocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("Discovery failed: {0}")]
    Discovery(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Not initialized: run 'autotoc init' first")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, TocError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl TocError {
    /// Create a manifest error for the given file
    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if the error came from user-supplied input rather than the system
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Manifest { .. } | Self::NotInitialized
        )
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Wrap the error in `kind` (`TocError::Discovery`, `TocError::Render`, ...),
    /// prefixed by a lazily built message
    fn context_as<F, C>(self, kind: fn(String) -> TocError, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context_as<F, C>(self, kind: fn(String) -> TocError, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| kind(format!("{}: {}", f().into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_display() {
        let err = TocError::manifest("docs/manifest.json", "expected array");
        assert_eq!(
            err.to_string(),
            "Invalid manifest docs/manifest.json: expected array"
        );
        assert!(err.is_user_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TocError = io.into();
        assert!(matches!(err, TocError::Io(_)));
        assert!(!err.is_user_error());
    }

    fn denied() -> std::result::Result<(), std::io::Error> {
        Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ))
    }

    #[test]
    fn test_context_as_discovery() {
        let err = denied()
            .context_as(TocError::Discovery, || "reading docs")
            .unwrap_err();
        assert_eq!(err.to_string(), "Discovery failed: reading docs: denied");
    }

    #[test]
    fn test_context_as_keeps_chosen_variant() {
        let err = denied()
            .context_as(TocError::Render, || format!("Failed to write {}", "toc.md"))
            .unwrap_err();
        assert!(matches!(err, TocError::Render(_)));
        assert_eq!(err.to_string(), "Render error: Failed to write toc.md: denied");

        let err = denied().context_as(TocError::Config, || "loading").unwrap_err();
        assert!(matches!(err, TocError::Config(_)));
        assert!(err.is_user_error());
    }
}
