//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - System probe (via vrampro-runtime, sysinfo-backed)
//! - Paging-file facility (PowerShell CIM, or the dry-run recorder)
//! - Restart facility (`shutdown`, or the dry-run logger)
//!
//! Command handlers receive the composed `CliContext` and delegate work to
//! its `WorkflowCoordinator`.

use std::sync::Arc;

use tracing::debug;
use vrampro_core::ports::{PagefileManagementPort, RestartPort};
use vrampro_core::{ProvisionSettings, WorkflowCoordinator, WorkflowDeps, validate_settings};
use vrampro_runtime::{
    CimPagefileFacility, DefaultSystemProbe, DryRunFacility, DryRunRestart, ShutdownRestart,
};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Validated provisioning settings.
    pub settings: ProvisionSettings,
    /// Record configuration requests instead of issuing them.
    pub dry_run: bool,
    /// Render results as JSON.
    pub json: bool,
}

impl CliConfig {
    /// Load settings from the environment, then apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` when the environment or the volume override
    /// does not validate.
    pub fn from_env(volume: Option<String>, dry_run: bool, json: bool) -> Result<Self, CliError> {
        let settings = ProvisionSettings::from_env().map_err(CliError::from_core)?;
        Self::from_settings(settings, volume, dry_run, json)
    }

    /// Apply command-line overrides to already loaded settings.
    pub fn from_settings(
        settings: ProvisionSettings,
        volume: Option<String>,
        dry_run: bool,
        json: bool,
    ) -> Result<Self, CliError> {
        let settings = match volume {
            Some(volume) => settings.with_target_volume(volume.trim()),
            None => settings,
        };
        validate_settings(&settings).map_err(CliError::from_core)?;

        Ok(Self {
            settings,
            dry_run,
            json,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The workflow for this session.
    pub workflow: WorkflowCoordinator,
    /// Settings the workflow was built from.
    pub settings: ProvisionSettings,
    /// Render results as JSON.
    pub json: bool,
}

impl CliContext {
    /// Access the workflow coordinator.
    pub const fn workflow(&self) -> &WorkflowCoordinator {
        &self.workflow
    }

    /// Mutable access for phase operations.
    pub const fn workflow_mut(&mut self) -> &mut WorkflowCoordinator {
        &mut self.workflow
    }

    /// Access the provisioning settings.
    pub const fn settings(&self) -> &ProvisionSettings {
        &self.settings
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Creates the sysinfo-backed system probe
/// 2. Picks the live or dry-run paging-file and restart facilities
/// 3. Assembles the workflow coordinator from them
pub fn bootstrap(config: CliConfig) -> CliContext {
    let (facility, restart): (Arc<dyn PagefileManagementPort>, Arc<dyn RestartPort>) =
        if config.dry_run {
            debug!("Using dry-run facilities");
            (Arc::new(DryRunFacility::new()), Arc::new(DryRunRestart))
        } else {
            (
                Arc::new(CimPagefileFacility::new()),
                Arc::new(ShutdownRestart::new()),
            )
        };

    let deps = WorkflowDeps {
        probe: Arc::new(DefaultSystemProbe::new()),
        facility,
        restart,
    };

    bootstrap_with(deps, config.settings, config.json)
}

/// Bootstrap with custom ports (for testing).
pub fn bootstrap_with(deps: WorkflowDeps, settings: ProvisionSettings, json: bool) -> CliContext {
    debug!(volume = %settings.target_volume, "Composing workflow");
    let workflow = WorkflowCoordinator::new(deps, &settings);
    CliContext {
        workflow,
        settings,
        json,
    }
}
