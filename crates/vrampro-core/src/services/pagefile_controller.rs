//! Paging-file controller - translates phase intents into OS requests.

use crate::domain::{PhaseKind, PhaseResult};
use crate::ports::{ConfigurationError, PagefileManagementPort, PagefileSpec};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Success message for the preparation phase.
pub const PREPARE_SUCCESS: &str = "System Managed PageFile has been decoupled.";

/// Success message for the allocation phase.
pub const ALLOCATE_SUCCESS: &str = "Virtual Address Space reserved.";

/// Likely causes shown when the OS rejects a new registration.
pub const ALLOCATE_FAILURE_HINT: &str = "Phase 1 bypass required or Access Denied (Run as Admin)";

/// Executes the Preparation and Allocation phases against a facility.
///
/// The controller classifies outcomes but keeps no workflow state; that
/// belongs to the coordinator.
pub struct PagefileController {
    facility: Arc<dyn PagefileManagementPort>,
    pagefile_path: String,
}

impl PagefileController {
    /// Create a controller that places the paging file on `volume`.
    pub fn new(facility: Arc<dyn PagefileManagementPort>, volume: &str) -> Self {
        Self {
            facility,
            pagefile_path: PagefileSpec::path_on_volume(volume),
        }
    }

    /// Path the new paging file is registered under.
    pub fn pagefile_path(&self) -> &str {
        &self.pagefile_path
    }

    /// Disable automatic management, then remove every registration.
    ///
    /// Stops at the first rejected request. Removing zero registrations is a
    /// success, so repeated calls keep reporting success.
    pub async fn prepare(&self) -> PhaseResult {
        debug!("Requesting automatic paging-file management off");
        let disabled = match self.facility.disable_automatic_management().await {
            Ok(output) => output,
            Err(e) => return Self::failure(PhaseKind::Preparation, &e),
        };

        debug!("Requesting removal of existing paging-file registrations");
        let removal = match self.facility.remove_all_pagefiles().await {
            Ok(removal) => removal,
            Err(e) => return Self::failure(PhaseKind::Preparation, &e),
        };

        info!(removed = removal.removed, "Preparation complete");
        let output = [disabled.text.trim(), removal.output.text.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
        PhaseResult::success(PhaseKind::Preparation, PREPARE_SUCCESS).with_diagnostics(output)
    }

    /// Register a fixed-size paging file of `size_mb` megabytes.
    ///
    /// Does not check that preparation ran; if automatic management is still
    /// active the OS rejects the request and that surfaces as a Failure.
    /// On success the file is registered but only active after a restart.
    pub async fn allocate(&self, size_mb: u64) -> PhaseResult {
        if size_mb == 0 {
            return PhaseResult::failure(
                PhaseKind::Allocation,
                "Paging-file size must be greater than zero",
            );
        }

        let spec = PagefileSpec::fixed(self.pagefile_path.clone(), size_mb);
        debug!(path = %spec.path, size_mb, "Requesting paging-file registration");

        match self.facility.create_pagefile(&spec).await {
            Ok(output) => {
                info!(path = %spec.path, size_mb, "Paging file registered");
                PhaseResult::success(PhaseKind::Allocation, ALLOCATE_SUCCESS)
                    .with_diagnostics(output.text)
            }
            Err(e) => {
                warn!(error = %e, "Paging-file registration rejected");
                let detail = e.detail().trim();
                let message = if detail.is_empty() {
                    format!("{ALLOCATE_FAILURE_HINT}.")
                } else {
                    format!("{ALLOCATE_FAILURE_HINT}. {detail}")
                };
                PhaseResult::failure(PhaseKind::Allocation, message).with_diagnostics(detail)
            }
        }
    }

    fn failure(phase: PhaseKind, err: &ConfigurationError) -> PhaseResult {
        warn!(%phase, error = %err, "Configuration request failed");
        PhaseResult::failure(phase, err.to_string()).with_diagnostics(err.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FacilityCall, FakeFacility};

    #[tokio::test]
    async fn test_prepare_success_issues_both_requests() {
        let facility = Arc::new(FakeFacility::with_registrations(2));
        let controller = PagefileController::new(facility.clone(), "C:");

        let result = controller.prepare().await;

        assert!(result.is_success());
        assert_eq!(result.message(), PREPARE_SUCCESS);
        assert_eq!(
            facility.calls(),
            vec![FacilityCall::DisableAutomatic, FacilityCall::RemoveAll]
        );
        assert_eq!(facility.registrations(), 0);
    }

    #[tokio::test]
    async fn test_prepare_is_idempotent() {
        let facility = Arc::new(FakeFacility::with_registrations(1));
        let controller = PagefileController::new(facility.clone(), "C:");

        assert!(controller.prepare().await.is_success());
        assert!(controller.prepare().await.is_success());
        assert_eq!(facility.registrations(), 0);
    }

    #[tokio::test]
    async fn test_prepare_failure_carries_os_text() {
        let facility = Arc::new(FakeFacility::new().rejecting_disable("Access Denied"));
        let controller = PagefileController::new(facility.clone(), "C:");

        let result = controller.prepare().await;

        assert!(!result.is_success());
        assert!(result.message().contains("Access Denied"));
        assert_eq!(result.diagnostics(), Some("Access Denied"));
        assert_eq!(facility.calls(), vec![FacilityCall::DisableAutomatic]);
    }

    #[tokio::test]
    async fn test_prepare_fails_when_removal_rejected() {
        let facility = Arc::new(FakeFacility::new().rejecting_remove("Generic failure"));
        let controller = PagefileController::new(facility, "C:");

        let result = controller.prepare().await;

        assert!(!result.is_success());
        assert!(result.message().contains("Generic failure"));
    }

    #[tokio::test]
    async fn test_allocate_registers_fixed_size() {
        let facility = Arc::new(FakeFacility::new().already_prepared());
        let controller = PagefileController::new(facility.clone(), "D:");

        let result = controller.allocate(32768).await;

        assert!(result.is_success());
        assert_eq!(result.message(), ALLOCATE_SUCCESS);
        assert_eq!(
            facility.calls(),
            vec![FacilityCall::Create(PagefileSpec {
                path: "D:\\pagefile.sys".to_string(),
                initial_mb: 32768,
                maximum_mb: 32768,
            })]
        );
    }

    #[tokio::test]
    async fn test_allocate_zero_makes_no_request() {
        let facility = Arc::new(FakeFacility::new().already_prepared());
        let controller = PagefileController::new(facility.clone(), "C:");

        let result = controller.allocate(0).await;

        assert!(!result.is_success());
        assert!(facility.calls().is_empty());
    }

    #[tokio::test]
    async fn test_allocate_rejected_names_likely_cause() {
        let facility = Arc::new(FakeFacility::new());
        let controller = PagefileController::new(facility.clone(), "C:");

        let result = controller.allocate(8192).await;

        assert!(!result.is_success());
        assert!(result.message().starts_with(ALLOCATE_FAILURE_HINT));
        assert!(result.diagnostics().is_some());
        assert_eq!(facility.calls().len(), 1);
    }
}
