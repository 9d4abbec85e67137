//! Point-in-time host capacity readings.

use serde::Serialize;
use std::fmt;

/// Bytes per gigabyte (binary).
pub const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// Convert a byte count to gigabytes.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB as f64
}

/// Immutable reading of host memory and free disk space.
///
/// Snapshots are taken fresh on every query and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemSnapshot {
    /// Volume the disk reading was taken on.
    pub volume: String,
    /// Total physical memory in bytes.
    pub memory_total_bytes: u64,
    /// Free space on `volume` in bytes.
    pub disk_free_bytes: u64,
}

impl SystemSnapshot {
    pub fn memory_total_gb(&self) -> f64 {
        bytes_to_gb(self.memory_total_bytes)
    }

    pub fn disk_free_gb(&self) -> f64 {
        bytes_to_gb(self.disk_free_bytes)
    }
}

impl fmt::Display for SystemSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PHYSICAL RAM: {:.2} GB | DISK AVAILABLE: {:.2} GB",
            self.memory_total_gb(),
            self.disk_free_gb()
        )
    }
}
