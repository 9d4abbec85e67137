//! Contexts wired to the dry-run facilities and a fixed probe.

use std::sync::Arc;

use vrampro_core::domain::BYTES_PER_GB;
use vrampro_core::ports::{ProbeError, ProbeResult, SystemProbePort};
use vrampro_core::{ProvisionSettings, WorkflowDeps};
use vrampro_runtime::{DryRunFacility, DryRunRestart};

use crate::bootstrap::{CliContext, bootstrap_with};

pub struct FixedProbe {
    pub free_bytes: Option<u64>,
}

impl SystemProbePort for FixedProbe {
    fn memory_total(&self) -> ProbeResult<u64> {
        Ok(16 * BYTES_PER_GB)
    }

    fn disk_free(&self, volume: &str) -> ProbeResult<u64> {
        self.free_bytes.ok_or_else(|| ProbeError::VolumeNotFound {
            volume: volume.to_string(),
        })
    }
}

/// Context with `free_gb` free on the target volume; also returns the
/// facility so tests can inspect what was issued.
pub fn context(free_gb: u64, json: bool) -> (CliContext, Arc<DryRunFacility>) {
    context_with_probe(
        FixedProbe {
            free_bytes: Some(free_gb * BYTES_PER_GB),
        },
        json,
    )
}

pub fn context_with_probe(probe: FixedProbe, json: bool) -> (CliContext, Arc<DryRunFacility>) {
    let facility = Arc::new(DryRunFacility::new());
    let deps = WorkflowDeps {
        probe: Arc::new(probe),
        facility: facility.clone(),
        restart: Arc::new(DryRunRestart),
    };
    (
        bootstrap_with(deps, ProvisionSettings::default(), json),
        facility,
    )
}
