//! Host restart via the platform `shutdown` command.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use vrampro_core::ports::{RestartError, RestartPort};

use crate::command::{CommandExecutor, SystemExecutor};

/// Restarts the host with `shutdown`.
pub struct ShutdownRestart {
    executor: Arc<dyn CommandExecutor>,
}

impl ShutdownRestart {
    pub fn new() -> Self {
        Self::with_executor(Arc::new(SystemExecutor))
    }

    pub fn with_executor(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }
}

impl Default for ShutdownRestart {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for `shutdown` that restart after `delay`.
#[cfg(windows)]
pub fn restart_args(delay: Duration) -> Vec<String> {
    vec![
        "/r".to_string(),
        "/t".to_string(),
        delay.as_secs().to_string(),
    ]
}

/// Arguments for `shutdown` that restart after `delay`.
///
/// Unix `shutdown` takes minutes, so any sub-minute delay rounds up.
#[cfg(not(windows))]
pub fn restart_args(delay: Duration) -> Vec<String> {
    let minutes = delay.as_secs().div_ceil(60);
    vec!["-r".to_string(), format!("+{minutes}")]
}

#[async_trait]
impl RestartPort for ShutdownRestart {
    async fn restart(&self, delay: Duration) -> Result<(), RestartError> {
        info!(delay_secs = delay.as_secs(), "Requesting host restart");
        let outcome = self
            .executor
            .run("shutdown", &restart_args(delay))
            .await
            .map_err(|e| RestartError::Unavailable(e.to_string()))?;

        if outcome.success {
            Ok(())
        } else {
            Err(RestartError::CommandFailed(outcome.failure_detail()))
        }
    }
}
