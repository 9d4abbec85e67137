//! System probe implementation for vrampro-runtime.
//!
//! This module provides the `DefaultSystemProbe` which implements
//! `SystemProbePort` from vrampro-core using sysinfo.

mod volume;

use sysinfo::{Disks, System};
use tracing::debug;
use vrampro_core::ports::{ProbeError, ProbeResult, SystemProbePort};

pub use volume::{free_space_for, volume_key};

/// Default implementation of `SystemProbePort`.
///
/// Every call re-reads the host; nothing is cached. Construct it in the
/// CLI bootstrap and pass it to the workflow.
///
/// # Example
///
/// ```ignore
/// use vrampro_runtime::system::DefaultSystemProbe;
/// use vrampro_core::ports::SystemProbePort;
///
/// let probe = DefaultSystemProbe::new();
/// let free = probe.disk_free("C:")?;
/// ```
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    /// Create a new default system probe.
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DefaultSystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn memory_total(&self) -> ProbeResult<u64> {
        let mut sys = System::new();
        sys.refresh_memory();
        match sys.total_memory() {
            0 => Err(ProbeError::MemoryUnavailable(
                "host reported no physical memory".to_string(),
            )),
            total => Ok(total),
        }
    }

    fn disk_free(&self, volume: &str) -> ProbeResult<u64> {
        let disks = Disks::new_with_refreshed_list();
        let mounts = disks.list().iter().map(|disk| {
            (
                disk.mount_point().to_string_lossy().into_owned(),
                disk.available_space(),
            )
        });

        let free = free_space_for(mounts, volume).ok_or_else(|| ProbeError::VolumeNotFound {
            volume: volume.to_string(),
        })?;
        debug!(volume, free, "Disk space read");
        Ok(free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_total() {
        let probe = DefaultSystemProbe::new();
        // RAM should always be > 64MB on any test host
        assert!(probe.memory_total().unwrap() > 64 * 1024 * 1024);
    }

    #[test]
    fn test_unknown_volume_is_not_found() {
        let probe = DefaultSystemProbe::new();
        let err = probe
            .disk_free("no-such-volume-12345")
            .unwrap_err();
        assert!(matches!(err, ProbeError::VolumeNotFound { .. }));
    }
}
