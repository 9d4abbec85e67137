//! Paging-file management facility port.
//!
//! This port defines the three OS configuration operations the workflow
//! needs. It says nothing about transport: implementations may use native
//! configuration APIs, CIM queries, or shell out to an OS tool.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The configuration request that was being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityOperation {
    DisableAutomaticManagement,
    RemovePagefiles,
    CreatePagefile,
}

impl fmt::Display for FacilityOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DisableAutomaticManagement => "disable automatic management",
            Self::RemovePagefiles => "remove paging-file registrations",
            Self::CreatePagefile => "create paging-file registration",
        };
        f.write_str(name)
    }
}

/// An OS configuration request failed.
///
/// Privilege and auto-management conflicts are not distinguished by kind;
/// only the OS-provided `detail` text tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The OS rejected the request.
    #[error("Failed to {operation}: {detail}")]
    Rejected {
        operation: FacilityOperation,
        detail: String,
    },

    /// The facility could not be reached at all (e.g. tool not installed).
    #[error("Paging-file facility unavailable for {operation}: {detail}")]
    Unavailable {
        operation: FacilityOperation,
        detail: String,
    },
}

impl ConfigurationError {
    /// OS-provided diagnostic text, verbatim.
    pub fn detail(&self) -> &str {
        match self {
            Self::Rejected { detail, .. } | Self::Unavailable { detail, .. } => detail,
        }
    }

    pub const fn operation(&self) -> FacilityOperation {
        match self {
            Self::Rejected { operation, .. } | Self::Unavailable { operation, .. } => *operation,
        }
    }
}

/// Captured output of a successful configuration request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityOutput {
    pub text: String,
}

impl FacilityOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result of clearing existing registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagefileRemoval {
    /// Number of registrations removed. Zero is a valid outcome.
    pub removed: usize,
    pub output: FacilityOutput,
}

/// A paging-file registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagefileSpec {
    /// Full path of the paging file, e.g. `C:\pagefile.sys`.
    pub path: String,
    pub initial_mb: u64,
    pub maximum_mb: u64,
}

impl PagefileSpec {
    /// A fixed-size, non-growing paging file.
    pub fn fixed(path: impl Into<String>, size_mb: u64) -> Self {
        Self {
            path: path.into(),
            initial_mb: size_mb,
            maximum_mb: size_mb,
        }
    }

    /// Paging-file path on `volume` (trailing separators are ignored).
    pub fn path_on_volume(volume: &str) -> String {
        let root = volume.trim().trim_end_matches(['\\', '/']);
        format!("{root}\\pagefile.sys")
    }
}

/// OS paging-file management facility.
///
/// Each call blocks the workflow until the OS request completes. No timeout
/// or cancellation is applied.
#[async_trait]
pub trait PagefileManagementPort: Send + Sync {
    /// Turn off OS self-sizing of the paging file.
    async fn disable_automatic_management(&self) -> Result<FacilityOutput, ConfigurationError>;

    /// Enumerate and delete every existing paging-file registration.
    async fn remove_all_pagefiles(&self) -> Result<PagefileRemoval, ConfigurationError>;

    /// Register a new paging file.
    async fn create_pagefile(&self, spec: &PagefileSpec)
    -> Result<FacilityOutput, ConfigurationError>;
}
