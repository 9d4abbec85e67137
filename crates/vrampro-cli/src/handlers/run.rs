//! Run command handler: both phases in one session.

use anyhow::Result;
use vrampro_core::PhaseKind;

use crate::bootstrap::CliContext;
use crate::commands::AllocateArgs;
use crate::error::CliError;
use crate::handlers::{allocate, prepare};

/// Execute the run command.
///
/// Runs Preparation, then Allocation with `args`, stopping at the first
/// failure.
pub async fn execute(ctx: &mut CliContext, args: &AllocateArgs) -> Result<()> {
    let prepared = prepare::run_phase(ctx).await?;
    if !prepared.is_success() {
        return Err(CliError::PhaseFailed {
            phase: PhaseKind::Preparation,
        }
        .into());
    }

    allocate::execute(ctx, args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use vrampro_core::WorkflowStage;

    #[tokio::test]
    async fn test_run_prepares_then_allocates() {
        let (mut ctx, facility) = context(200, false);
        let args = AllocateArgs {
            option: Some("128gb".to_string()),
            yes: true,
            no_reboot: false,
        };
        execute(&mut ctx, &args).await.unwrap();

        assert_eq!(ctx.workflow().stage(), WorkflowStage::Allocated);
        let issued = facility.issued();
        assert_eq!(issued.len(), 3);
        assert!(issued[0].contains("AutomaticManagedPagefile"));
        assert!(issued[1].contains("Remove-CimInstance"));
        assert!(issued[2].contains("InitialSize=131072; MaximumSize=131072"));
    }

    #[tokio::test]
    async fn test_run_stops_before_allocation_without_space() {
        let (mut ctx, facility) = context(50, true);
        let args = AllocateArgs {
            option: Some("64GB".to_string()),
            yes: false,
            no_reboot: true,
        };
        assert!(execute(&mut ctx, &args).await.is_err());

        // preparation ran; allocation was rejected locally
        assert_eq!(facility.issued().len(), 2);
        assert_eq!(ctx.workflow().stage(), WorkflowStage::Prepared);
    }
}
