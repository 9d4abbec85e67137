//! Core domain for vrampro: guided paging-file provisioning.
//!
//! The workflow runs in two phases. Preparation turns off automatic
//! paging-file management and clears existing registrations. Allocation
//! registers one fixed-size paging file after a free-space check. A restart
//! is needed before the new capacity is live.
//!
//! This crate owns the domain types, the port traits the workflow needs from
//! the host OS, and the services that drive it. Adapters live in
//! `vrampro-runtime`; the CLI composes them.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CapacityError, CapacityOption, PhaseKind, PhaseResult, PhaseStatus, SystemSnapshot,
    WorkflowStage, WorkflowState, WorkflowWarning, default_capacity_options, find_option,
};
pub use ports::{
    ConfigurationError, CoreError, FacilityOperation, FacilityOutput, PagefileManagementPort,
    PagefileRemoval, PagefileSpec, ProbeError, RestartError, RestartPort, SystemProbePort,
};
pub use services::{
    AllocationOutcome, PagefileController, RebootOutcome, SpaceShortfall, WorkflowCoordinator,
    WorkflowDeps,
};
pub use settings::{ProvisionSettings, SettingsError, validate_settings};

#[cfg(test)]
use serde_json as _;
