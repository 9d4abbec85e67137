//! Paging-file facility backed by PowerShell CIM cmdlets.
//!
//! Implements `PagefileManagementPort` by running one PowerShell script per
//! request. Exit status decides success; stderr is passed up verbatim.

pub mod scripts;

use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tracing::{debug, warn};
use vrampro_core::ports::{
    ConfigurationError, FacilityOperation, FacilityOutput, PagefileManagementPort,
    PagefileRemoval, PagefileSpec,
};

use crate::command::{CommandExecutor, CommandOutcome, SystemExecutor};

/// Windows paging-file configuration through `Win32_PageFileSetting`.
///
/// # Example
///
/// ```ignore
/// use vrampro_runtime::CimPagefileFacility;
///
/// let facility = CimPagefileFacility::new();
/// facility.disable_automatic_management().await?;
/// ```
pub struct CimPagefileFacility {
    executor: Arc<dyn CommandExecutor>,
}

impl CimPagefileFacility {
    /// Create a facility that runs scripts on the host.
    pub fn new() -> Self {
        Self::with_executor(Arc::new(SystemExecutor))
    }

    /// Create a facility with a custom executor.
    pub fn with_executor(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    async fn run_script(
        &self,
        operation: FacilityOperation,
        script: String,
    ) -> Result<FacilityOutput, ConfigurationError> {
        debug!(%operation, "Issuing CIM request");
        let result = self
            .executor
            .run(scripts::POWERSHELL, &scripts::powershell_args(script))
            .await;
        classify(operation, result)
    }
}

impl Default for CimPagefileFacility {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a command result onto the facility's success/failure contract.
fn classify(
    operation: FacilityOperation,
    result: io::Result<CommandOutcome>,
) -> Result<FacilityOutput, ConfigurationError> {
    match result {
        Ok(outcome) if outcome.success => Ok(FacilityOutput::new(outcome.stdout)),
        Ok(outcome) => {
            let detail = outcome.failure_detail();
            warn!(%operation, code = ?outcome.code, "CIM request rejected");
            Err(ConfigurationError::Rejected { operation, detail })
        }
        Err(e) => Err(ConfigurationError::Unavailable {
            operation,
            detail: format!("failed to start {}: {e}", scripts::POWERSHELL),
        }),
    }
}

#[async_trait]
impl PagefileManagementPort for CimPagefileFacility {
    async fn disable_automatic_management(&self) -> Result<FacilityOutput, ConfigurationError> {
        self.run_script(
            FacilityOperation::DisableAutomaticManagement,
            scripts::disable_automatic_management(),
        )
        .await
    }

    async fn remove_all_pagefiles(&self) -> Result<PagefileRemoval, ConfigurationError> {
        let output = self
            .run_script(
                FacilityOperation::RemovePagefiles,
                scripts::remove_all_pagefiles(),
            )
            .await?;
        let removed = scripts::parse_removed_count(&output.text);
        debug!(removed, "Paging-file registrations removed");
        Ok(PagefileRemoval { removed, output })
    }

    async fn create_pagefile(
        &self,
        spec: &PagefileSpec,
    ) -> Result<FacilityOutput, ConfigurationError> {
        self.run_script(
            FacilityOperation::CreatePagefile,
            scripts::create_pagefile(spec),
        )
        .await
    }
}
