//! Progress log lines and JSON rendering.

use anyhow::{Context, Result};
use serde::Serialize;
use vrampro_core::PhaseResult;

/// Prefix for every user-facing progress line.
pub const LOG_PREFIX: &str = "[V-RAM-PRO]> ";

/// Format a progress line.
pub fn log_line(message: &str) -> String {
    format!("{LOG_PREFIX}{message}")
}

/// Print a progress line to stdout.
pub fn log(message: &str) {
    println!("{}", log_line(message));
}

/// Log line for a phase result: `SUCCESS: ...` or `ERROR: ...`.
pub fn phase_line(result: &PhaseResult) -> String {
    log_line(&result.to_string())
}

/// Print `value` as one line of JSON on stdout.
///
/// Commands that run several phases print one line per phase.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string(value).context("Failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrampro_core::PhaseKind;

    #[test]
    fn test_log_line_prefix() {
        assert_eq!(log_line("SYSTEM READY."), "[V-RAM-PRO]> SYSTEM READY.");
    }

    #[test]
    fn test_phase_line() {
        let ok = PhaseResult::success(PhaseKind::Allocation, "Virtual Address Space reserved.");
        assert_eq!(
            phase_line(&ok),
            "[V-RAM-PRO]> SUCCESS: Virtual Address Space reserved."
        );

        let failed = PhaseResult::failure(PhaseKind::Preparation, "Access is denied.");
        assert_eq!(phase_line(&failed), "[V-RAM-PRO]> ERROR: Access is denied.");
    }
}
