//! System probe port for host memory and disk capacity.
//!
//! This port abstracts read-only host queries from the core domain.
//! Implementations live in adapters (e.g., vrampro-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (sysinfo queries)
//! - CLI injects the probe via bootstrap

use crate::domain::SystemSnapshot;
use thiserror::Error;

/// Errors that can occur during system probing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Physical memory size could not be determined.
    #[error("Memory query failed: {0}")]
    MemoryUnavailable(String),

    /// The named volume does not exist or is not accessible.
    #[error("Volume '{volume}' not found or inaccessible")]
    VolumeNotFound { volume: String },
}

/// Result type for system probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Port for querying host memory and disk capacity.
///
/// Calls have no side effects and results are never cached: each call
/// re-reads the host, so values may change between calls.
///
/// # Example
///
/// ```ignore
/// use vrampro_core::ports::SystemProbePort;
///
/// fn show(probe: &dyn SystemProbePort) {
///     if let Ok(snapshot) = probe.snapshot("C:") {
///         println!("{snapshot}");
///     }
/// }
/// ```
pub trait SystemProbePort: Send + Sync {
    /// Total physical memory in bytes.
    fn memory_total(&self) -> ProbeResult<u64>;

    /// Free space on `volume` in bytes.
    fn disk_free(&self, volume: &str) -> ProbeResult<u64>;

    /// Read both quantities into a fresh snapshot.
    fn snapshot(&self, volume: &str) -> ProbeResult<SystemSnapshot> {
        Ok(SystemSnapshot {
            volume: volume.to_string(),
            memory_total_bytes: self.memory_total()?,
            disk_free_bytes: self.disk_free(volume)?,
        })
    }
}
