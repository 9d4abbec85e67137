//! Phase outcomes returned to the presentation layer.

use serde::Serialize;
use std::fmt;

/// One discrete step of the provisioning workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Decouple automatic management and clear existing registrations.
    Preparation,
    /// Register a new fixed-size paging file.
    Allocation,
    /// Host restart request after a successful allocation.
    Reboot,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preparation => "preparation",
            Self::Allocation => "allocation",
            Self::Reboot => "reboot",
        };
        f.write_str(name)
    }
}

/// Success/failure tag of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Success,
    Failure,
}

/// Outcome of a single phase invocation.
///
/// Owned by whoever requested the phase. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseResult {
    phase: PhaseKind,
    status: PhaseStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<String>,
}

impl PhaseResult {
    pub fn success(phase: PhaseKind, message: impl Into<String>) -> Self {
        Self {
            phase,
            status: PhaseStatus::Success,
            message: message.into(),
            diagnostics: None,
        }
    }

    pub fn failure(phase: PhaseKind, message: impl Into<String>) -> Self {
        Self {
            phase,
            status: PhaseStatus::Failure,
            message: message.into(),
            diagnostics: None,
        }
    }

    /// Attach raw OS output. Blank output is dropped.
    #[must_use]
    pub fn with_diagnostics(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        let trimmed = output.trim();
        self.diagnostics = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub const fn phase(&self) -> PhaseKind {
        self.phase
    }

    pub const fn status(&self) -> PhaseStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == PhaseStatus::Success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn diagnostics(&self) -> Option<&str> {
        self.diagnostics.as_deref()
    }
}

impl fmt::Display for PhaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            PhaseStatus::Success => write!(f, "SUCCESS: {}", self.message),
            PhaseStatus::Failure => write!(f, "ERROR: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_diagnostics_dropped() {
        let result = PhaseResult::success(PhaseKind::Preparation, "ok").with_diagnostics("  \n");
        assert_eq!(result.diagnostics(), None);
    }

    #[test]
    fn test_display_prefixes() {
        let ok = PhaseResult::success(PhaseKind::Allocation, "Virtual Address Space reserved.");
        let err = PhaseResult::failure(PhaseKind::Preparation, "Access Denied");
        assert_eq!(ok.to_string(), "SUCCESS: Virtual Address Space reserved.");
        assert_eq!(err.to_string(), "ERROR: Access Denied");
    }

    #[test]
    fn test_serializes_snake_case_tags() {
        let result = PhaseResult::failure(PhaseKind::Allocation, "denied").with_diagnostics("raw");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["phase"], "allocation");
        assert_eq!(json["status"], "failure");
        assert_eq!(json["diagnostics"], "raw");
    }
}
