//! Status command handler.
//!
//! Shows a fresh reading of physical memory and free space on the target
//! volume, plus where the session stands in the workflow.

use anyhow::Result;
use serde::Serialize;
use vrampro_core::{SystemSnapshot, WorkflowStage};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{log, print_json};

#[derive(Serialize)]
struct StatusView<'a> {
    snapshot: &'a SystemSnapshot,
    pagefile_path: &'a str,
    stage: WorkflowStage,
}

/// Execute the status command.
///
/// # Errors
///
/// Returns `CliError::Probe` if the host cannot be read or the target volume
/// is not mounted.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let workflow = ctx.workflow();
    let snapshot = workflow.snapshot().map_err(CliError::from_core)?;

    if ctx.json {
        return print_json(&StatusView {
            snapshot: &snapshot,
            pagefile_path: workflow.pagefile_path(),
            stage: workflow.stage(),
        });
    }

    log(&snapshot.to_string());
    log(&format!(
        "TARGET: {} | STAGE: {}",
        workflow.pagefile_path(),
        workflow.stage()
    ));
    Ok(())
}
