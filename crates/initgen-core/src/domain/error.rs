use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic at the caller)
/// - Self-describing (the message names the offending value)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Request validation
    // ========================================================================
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("application name must not be empty")]
    EmptyApplicationName,

    #[error("package name must not be empty")]
    EmptyPackageName,

    #[error("unknown build tool '{value}'")]
    UnknownBuildTool { value: String },

    // ========================================================================
    // Path hardening
    // ========================================================================
    #[error("unsafe package segment '{segment}' in '{package}'")]
    UnsafePackageSegment { package: String, segment: String },

    #[error("unsafe base directory '{path}'")]
    UnsafeBaseDir { path: String },

    // ========================================================================
    // Version parsing
    // ========================================================================
    #[error("cannot parse version '{input}'")]
    InvalidVersion { input: String },
}
