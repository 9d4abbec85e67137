//! Session-scoped workflow state.

use serde::Serialize;
use std::fmt;

/// Progress of the provisioning workflow in the current process.
///
/// Starts at `{prepared: false, reboot_pending: false}` and is never reset
/// automatically. Nothing is persisted across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowState {
    /// Preparation has succeeded at least once this session.
    pub prepared: bool,
    /// An allocation succeeded and awaits a restart to take effect.
    pub reboot_pending: bool,
}

impl WorkflowState {
    pub const fn new() -> Self {
        Self {
            prepared: false,
            reboot_pending: false,
        }
    }

    /// Stage implied by the flags alone, used when resuming a session.
    ///
    /// A live session tracks its stage separately: re-running preparation
    /// after an allocation returns it to `Prepared` while both flags stay set.
    pub const fn stage(&self) -> WorkflowStage {
        if self.reboot_pending {
            WorkflowStage::Allocated
        } else if self.prepared {
            WorkflowStage::Prepared
        } else {
            WorkflowStage::Initial
        }
    }
}

/// `Initial -> Prepared -> Allocated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Initial,
    Prepared,
    /// Terminal: a reboot is required to realise the new capacity.
    Allocated,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::Prepared => "prepared",
            Self::Allocated => "allocated (reboot pending)",
        };
        f.write_str(name)
    }
}

/// Advisory raised before an operation that is likely to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowWarning {
    /// Allocation requested before preparation succeeded in this session.
    NotPrepared,
}

impl fmt::Display for WorkflowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPrepared => f.write_str(
                "Preparation has not completed in this session; \
                 automatic paging-file management may still be enabled",
            ),
        }
    }
}
