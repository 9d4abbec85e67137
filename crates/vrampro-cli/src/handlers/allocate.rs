//! Allocate command handler (Phase 2).
//!
//! Resolves the requested capacity option, runs the allocation and, on
//! success, asks whether to restart now. The new paging file is only live
//! after a restart.

use anyhow::Result;
use serde::Serialize;
use vrampro_core::{
    AllocationOutcome, CapacityOption, PhaseKind, RebootOutcome, WorkflowWarning, find_option,
};

use crate::bootstrap::CliContext;
use crate::commands::{AllocateArgs, RebootChoice};
use crate::error::CliError;
use crate::handlers::options;
use crate::presentation::{log, phase_line, print_json};
use crate::utils::input;

/// Shown before the restart prompt after a successful allocation.
pub const REBOOT_NOTICE: &str =
    "System update successful. Reboot is required to initialize the new memory pool.";

/// Advisory emitted before an allocation that is likely to fail.
#[derive(Debug, Serialize)]
struct PreflightNotice {
    warning: WorkflowWarning,
    message: String,
}

/// Execute the allocate command.
///
/// # Arguments
///
/// * `ctx` - The CLI context
/// * `args` - Requested option and how to answer the reboot prompt
///
/// # Errors
///
/// This function will return an error if:
/// - The option is missing in JSON mode or does not match a configured one
/// - There is not enough free space, or the OS rejected the registration
/// - The restart request failed
pub async fn execute(ctx: &mut CliContext, args: &AllocateArgs) -> Result<()> {
    let option = resolve_option(ctx, args.option.as_deref())?;

    if let Some(notice) = preflight_notice(ctx) {
        if ctx.json {
            print_json(&notice)?;
        } else {
            log(&format!("WARNING: {}", notice.message));
        }
    }

    let outcome = run_phase(ctx, &option).await?;
    if !outcome.requires_reboot() {
        return Err(CliError::PhaseFailed {
            phase: PhaseKind::Allocation,
        }
        .into());
    }

    let accepted = answer_reboot(ctx, args.reboot_choice())?;
    let reboot = ctx.workflow().confirm_reboot(accepted).await;
    render_reboot(ctx, &reboot)
}

fn preflight_notice(ctx: &CliContext) -> Option<PreflightNotice> {
    ctx.workflow().preflight_warning().map(|warning| PreflightNotice {
        warning,
        message: warning.to_string(),
    })
}

fn resolve_option(ctx: &CliContext, requested: Option<&str>) -> Result<CapacityOption> {
    let label = match requested {
        Some(label) => label.to_string(),
        None if ctx.json => {
            return Err(
                CliError::Arguments("a capacity option is required with --json".to_string()).into(),
            );
        }
        None => {
            options::print_table(ctx.settings());
            input::prompt_string("Capacity option")?
        }
    };

    let option = find_option(&ctx.settings().capacity_options, &label)
        .map_err(CliError::from_core)?;
    Ok(option.clone())
}

async fn run_phase(ctx: &mut CliContext, option: &CapacityOption) -> Result<AllocationOutcome> {
    if !ctx.json {
        log(&format!("MAPPING {}MB VIRTUAL BRIDGE...", option.size_mb()));
    }

    let outcome = ctx.workflow_mut().run_allocation(option).await;

    if ctx.json {
        print_json(&outcome)?;
    } else {
        match &outcome {
            AllocationOutcome::InsufficientSpace { shortfall } => log(&shortfall.to_string()),
            other => println!("{}", phase_line(&other.phase_result())),
        }
    }
    Ok(outcome)
}

/// JSON mode never blocks on the terminal: an unanswered prompt declines.
fn answer_reboot(ctx: &CliContext, choice: RebootChoice) -> Result<bool> {
    match choice {
        RebootChoice::Accept => Ok(true),
        RebootChoice::Decline => Ok(false),
        RebootChoice::Ask if ctx.json => Ok(false),
        RebootChoice::Ask => {
            log(REBOOT_NOTICE);
            input::prompt_confirmation("Restart now?")
        }
    }
}

fn render_reboot(ctx: &CliContext, reboot: &RebootOutcome) -> Result<()> {
    if ctx.json {
        print_json(reboot)?;
    } else {
        match reboot {
            RebootOutcome::Declined => {
                log("Restart deferred. The new capacity applies after the next reboot.");
            }
            RebootOutcome::Requested { delay_secs } => {
                log(&format!("RESTARTING IN {delay_secs}s..."));
            }
            RebootOutcome::Failed { result } => println!("{}", phase_line(result)),
        }
    }

    match reboot {
        RebootOutcome::Failed { result } => Err(CliError::Os(result.message().to_string()).into()),
        RebootOutcome::Declined | RebootOutcome::Requested { .. } => Ok(()),
    }
}
