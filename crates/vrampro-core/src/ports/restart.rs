//! Host restart port.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// The restart request could not be issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestartError {
    #[error("Restart command failed: {0}")]
    CommandFailed(String),

    #[error("Restart facility unavailable: {0}")]
    Unavailable(String),
}

/// Issues a host restart.
///
/// Only ever invoked after explicit user confirmation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestartPort: Send + Sync {
    /// Schedule a restart after `delay`.
    async fn restart(&self, delay: Duration) -> Result<(), RestartError>;
}
