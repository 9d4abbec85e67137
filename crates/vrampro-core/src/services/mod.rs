//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They are pure orchestrators and never know about concrete adapters.

mod outcome;
mod pagefile_controller;
mod workflow_coordinator;

#[cfg(test)]
mod test_support;

pub use outcome::{AllocationOutcome, RebootOutcome, SpaceShortfall};
pub use pagefile_controller::{
    ALLOCATE_FAILURE_HINT, ALLOCATE_SUCCESS, PREPARE_SUCCESS, PagefileController,
};
pub use workflow_coordinator::{WorkflowCoordinator, WorkflowDeps};
