//! Workflow coordinator - sequences preparation, allocation and reboot.

use crate::domain::{
    CapacityOption, PhaseKind, PhaseResult, SystemSnapshot, WorkflowStage, WorkflowState,
    WorkflowWarning, bytes_to_gb,
};
use crate::ports::{PagefileManagementPort, ProbeResult, RestartPort, SystemProbePort};
use crate::services::outcome::{AllocationOutcome, RebootOutcome, SpaceShortfall};
use crate::services::pagefile_controller::PagefileController;
use crate::settings::ProvisionSettings;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Ports the coordinator is composed from.
#[derive(Clone)]
pub struct WorkflowDeps {
    pub probe: Arc<dyn SystemProbePort>,
    pub facility: Arc<dyn PagefileManagementPort>,
    pub restart: Arc<dyn RestartPort>,
}

/// Drives the two-phase provisioning workflow for one session.
///
/// Owns the session's `WorkflowState` and the current stage. The stage moves
/// with the last successful phase; the state flags only ever latch on. Every
/// failure is returned as a value; nothing propagates out of the phase
/// operations.
pub struct WorkflowCoordinator {
    probe: Arc<dyn SystemProbePort>,
    controller: PagefileController,
    restart: Arc<dyn RestartPort>,
    volume: String,
    restart_delay: Duration,
    state: WorkflowState,
    stage: WorkflowStage,
}

impl WorkflowCoordinator {
    pub fn new(deps: WorkflowDeps, settings: &ProvisionSettings) -> Self {
        Self::with_state(deps, settings, WorkflowState::new())
    }

    /// Resume from an existing state.
    pub fn with_state(
        deps: WorkflowDeps,
        settings: &ProvisionSettings,
        state: WorkflowState,
    ) -> Self {
        Self {
            probe: deps.probe,
            controller: PagefileController::new(deps.facility, &settings.target_volume),
            restart: deps.restart,
            volume: settings.target_volume.clone(),
            restart_delay: Duration::from_secs(settings.restart_delay_secs),
            state,
            stage: state.stage(),
        }
    }

    pub const fn state(&self) -> WorkflowState {
        self.state
    }

    pub const fn stage(&self) -> WorkflowStage {
        self.stage
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn pagefile_path(&self) -> &str {
        self.controller.pagefile_path()
    }

    /// Fresh host readings for the target volume.
    pub fn snapshot(&self) -> ProbeResult<SystemSnapshot> {
        self.probe.snapshot(&self.volume)
    }

    /// Advisory for the next allocation, if it is likely to fail.
    pub const fn preflight_warning(&self) -> Option<WorkflowWarning> {
        if self.state.prepared {
            None
        } else {
            Some(WorkflowWarning::NotPrepared)
        }
    }

    /// Run the Preparation phase. Marks the session prepared on success.
    ///
    /// Preparation removes every registration, including one made earlier in
    /// this session, so success always returns the stage to `Prepared`.
    pub async fn run_preparation(&mut self) -> PhaseResult {
        let result = self.controller.prepare().await;
        if result.is_success() {
            self.state.prepared = true;
            self.stage = WorkflowStage::Prepared;
        }
        result
    }

    /// Run the Allocation phase for `option`.
    ///
    /// Rejects locally, without any OS request, when the option needs more
    /// gigabytes than are free (equal is allowed). Allocation before a
    /// successful preparation is not blocked, only warned about.
    pub async fn run_allocation(&mut self, option: &CapacityOption) -> AllocationOutcome {
        if let Some(warning) = self.preflight_warning() {
            warn!(%warning, option = option.label(), "Allocation requested early");
        }

        let free_bytes = match self.probe.disk_free(&self.volume) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Disk space query failed");
                return AllocationOutcome::Failed {
                    result: PhaseResult::failure(PhaseKind::Allocation, e.to_string()),
                };
            }
        };

        let required_gb = option.required_gb();
        let free_gb = bytes_to_gb(free_bytes);
        if required_gb > free_gb {
            info!(required_gb, free_gb, "Not enough free space for allocation");
            return AllocationOutcome::InsufficientSpace {
                shortfall: SpaceShortfall {
                    volume: self.volume.clone(),
                    required_gb,
                    free_gb,
                },
            };
        }

        let result = self.controller.allocate(option.size_mb()).await;
        if result.is_success() {
            self.state.reboot_pending = true;
            self.stage = WorkflowStage::Allocated;
            AllocationOutcome::RebootRequired { result }
        } else {
            AllocationOutcome::Failed { result }
        }
    }

    /// Act on the user's answer to the reboot prompt.
    ///
    /// Declining is a no-op and leaves the reboot pending.
    pub async fn confirm_reboot(&self, accepted: bool) -> RebootOutcome {
        if !accepted {
            debug!("Reboot declined; restart remains pending");
            return RebootOutcome::Declined;
        }

        if self.stage != WorkflowStage::Allocated {
            debug!(stage = %self.stage, "Restart requested with no allocation pending");
        }

        match self.restart.restart(self.restart_delay).await {
            Ok(()) => {
                info!(delay_secs = self.restart_delay.as_secs(), "Restart requested");
                RebootOutcome::Requested {
                    delay_secs: self.restart_delay.as_secs(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Restart request failed");
                RebootOutcome::Failed {
                    result: PhaseResult::failure(PhaseKind::Reboot, e.to_string()),
                }
            }
        }
    }
}
