//! Structured results returned by the workflow coordinator.

use crate::domain::{PhaseKind, PhaseResult};
use serde::Serialize;
use std::fmt;

/// Required vs. available space when the allocation precondition fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceShortfall {
    pub volume: String,
    pub required_gb: f64,
    pub free_gb: f64,
}

impl fmt::Display for SpaceShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Required: {}GB | Found: {:.2}GB. Clear disk space first.",
            self.required_gb, self.free_gb
        )
    }
}

/// Outcome of `WorkflowCoordinator::run_allocation`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AllocationOutcome {
    /// Registered; the caller should ask whether to restart now.
    RebootRequired { result: PhaseResult },
    /// Rejected locally before any OS request was made.
    InsufficientSpace { shortfall: SpaceShortfall },
    /// The probe or the OS request failed.
    Failed { result: PhaseResult },
}

impl AllocationOutcome {
    pub const fn requires_reboot(&self) -> bool {
        matches!(self, Self::RebootRequired { .. })
    }

    /// Uniform phase view of this outcome, for display.
    pub fn phase_result(&self) -> PhaseResult {
        match self {
            Self::RebootRequired { result } | Self::Failed { result } => result.clone(),
            Self::InsufficientSpace { shortfall } => {
                PhaseResult::failure(PhaseKind::Allocation, shortfall.to_string())
            }
        }
    }
}

/// Outcome of `WorkflowCoordinator::confirm_reboot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RebootOutcome {
    /// The user declined; nothing was issued.
    Declined,
    /// A restart was requested with the given delay.
    Requested { delay_secs: u64 },
    /// The restart request failed.
    Failed { result: PhaseResult },
}
