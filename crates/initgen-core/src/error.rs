//! Unified error surface for initgen-core.
//!
//! A generation run either yields a fully populated root or a single
//! [`GenerationFailure`]. The failure carries the allocated root path (when
//! allocation got that far) so the caller can schedule cleanup; the contents
//! under that root are indeterminate and must not be trusted.

use std::path::PathBuf;

use thiserror::Error;

use crate::application::GenerationError;

/// Failed-run outcome: the underlying cause plus the root it was (maybe)
/// writing under.
#[derive(Debug, Error, Clone)]
#[error("project generation failed{}", root_suffix(.root))]
pub struct GenerationFailure {
    /// Root directory allocated for the run, if allocation succeeded.
    pub root: Option<PathBuf>,
    #[source]
    pub cause: GenerationError,
}

impl GenerationFailure {
    /// Failure before a root was allocated.
    pub fn unallocated(cause: GenerationError) -> Self {
        Self { root: None, cause }
    }

    /// Failure under an already-allocated root.
    pub fn under_root(root: impl Into<PathBuf>, cause: GenerationError) -> Self {
        Self {
            root: Some(root.into()),
            cause,
        }
    }
}

fn root_suffix(root: &Option<PathBuf>) -> String {
    match root {
        Some(root) => format!(" (root: {})", root.display()),
        None => String::new(),
    }
}

/// Convenient result type alias for whole-run outcomes.
pub type GenerationResult<T> = Result<T, GenerationFailure>;
