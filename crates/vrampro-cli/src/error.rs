//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from CoreError to exit codes and user-facing messages.

use thiserror::Error;
use vrampro_core::{CoreError, PhaseKind};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (unknown capacity option and the like).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading host memory or disk space failed.
    #[error("System query failed: {0}")]
    Probe(String),

    /// A phase completed with a failure result that was already shown.
    #[error("{phase} phase failed")]
    PhaseFailed { phase: PhaseKind },

    /// The restart request failed.
    #[error("OS error: {0}")]
    Os(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::PhaseFailed { .. } => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Os(_) => 71,       // EX_OSERR
            Self::Probe(_) => 74,    // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }

    /// Convert any error the core lets through, via `CoreError`.
    pub fn from_core(err: impl Into<CoreError>) -> Self {
        Self::from(err.into())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Probe(probe_err) => Self::Probe(probe_err.to_string()),
            CoreError::Capacity(capacity_err) => Self::Arguments(capacity_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
        }
    }
}
