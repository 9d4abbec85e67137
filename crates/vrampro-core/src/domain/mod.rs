//! Domain types for paging-file provisioning.
//!
//! These are pure data types with no OS or I/O dependencies.

mod capacity;
mod phase;
mod snapshot;
mod workflow;

pub use capacity::{
    CapacityError, CapacityOption, DEFAULT_CAPACITY_SIZES_MB, MB_PER_GB, default_capacity_options,
    find_option,
};
pub use phase::{PhaseKind, PhaseResult, PhaseStatus};
pub use snapshot::{BYTES_PER_GB, SystemSnapshot, bytes_to_gb};
pub use workflow::{WorkflowStage, WorkflowState, WorkflowWarning};
