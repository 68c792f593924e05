//! Application layer errors.
//!
//! These represent failures while driving a generation run, not business
//! logic violations. All of them are fatal to the run: the orchestrator
//! never retries and never reports partial success.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Errors that occur while generating a project tree.
#[derive(Debug, Error, Clone)]
pub enum GenerationError {
    /// Scratch-area or root allocation failure. Raised before any project
    /// content is written.
    #[error("workspace allocation failed: {reason}")]
    Workspace { reason: String },

    /// Resource store lookup failed (missing or unreadable resource).
    #[error("resource store failed for '{location}': {reason}")]
    Resource { location: String, reason: String },

    /// Template rendering failed.
    #[error("rendering template '{template}' failed: {reason}")]
    Render { template: String, reason: String },

    /// Directory creation or file write failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A request value failed the core's defensive path validation.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl GenerationError {
    pub fn workspace(reason: impl Into<String>) -> Self {
        Self::Workspace {
            reason: reason.into(),
        }
    }

    pub fn resource(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resource {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub fn render(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Render {
            template: template.into(),
            reason: reason.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Filesystem {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
