//! Command handlers that delegate to the workflow coordinator.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//!   (`&mut CliContext` for phase commands)
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `WorkflowCoordinator` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch OS facilities directly
//! - Contain workflow rules (space checks, phase ordering)

pub mod allocate;
pub mod options;
pub mod prepare;
pub mod run;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;
