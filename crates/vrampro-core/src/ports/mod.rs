//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process-spawning or OS API types in any signature
//! - Intent-based methods (what to configure, not how)
//! - Every failure carries the OS diagnostic text it received

pub mod pagefile;
pub mod restart;
pub mod system_probe;

use thiserror::Error;

pub use pagefile::{
    ConfigurationError, FacilityOperation, FacilityOutput, PagefileManagementPort,
    PagefileRemoval, PagefileSpec,
};
pub use restart::{RestartError, RestartPort};
pub use system_probe::{ProbeError, ProbeResult, SystemProbePort};

/// Core error type for errors that reach the caller directly.
///
/// Phase operations never surface this type: OS configuration and restart
/// failures are folded into `PhaseResult` values. What remains (probe
/// queries, option lookup, settings loading) is converted through here so
/// the CLI can map it to an exit code.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Host query failed.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Capacity option could not be built or resolved.
    #[error(transparent)]
    Capacity(#[from] crate::domain::CapacityError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}
