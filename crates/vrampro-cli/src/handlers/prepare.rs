//! Prepare command handler (Phase 1).

use anyhow::Result;
use vrampro_core::{PhaseKind, PhaseResult};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{log, phase_line, print_json};

/// Execute the prepare command.
///
/// Turns off automatic paging-file management and deletes every existing
/// paging-file registration. Needs administrator rights on a real host.
///
/// # Errors
///
/// Returns `CliError::PhaseFailed` after printing the failure if the OS
/// rejected either request.
pub async fn execute(ctx: &mut CliContext) -> Result<()> {
    let result = run_phase(ctx).await?;
    if result.is_success() {
        Ok(())
    } else {
        Err(CliError::PhaseFailed {
            phase: PhaseKind::Preparation,
        }
        .into())
    }
}

/// Run Preparation and render its result.
pub(crate) async fn run_phase(ctx: &mut CliContext) -> Result<PhaseResult> {
    if !ctx.json {
        log("INITIATING SECTOR PURGE...");
    }

    let result = ctx.workflow_mut().run_preparation().await;

    if ctx.json {
        print_json(&result)?;
    } else {
        println!("{}", phase_line(&result));
        if result.is_success() {
            log("Force Clean Successful. Proceed to Expansion.");
        }
    }
    Ok(result)
}
