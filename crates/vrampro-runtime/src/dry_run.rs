//! Dry-run adapters: log what would be issued, change nothing.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use vrampro_core::ports::{
    ConfigurationError, FacilityOutput, PagefileManagementPort, PagefileRemoval, PagefileSpec,
    RestartError, RestartPort,
};

use crate::pagefile::scripts;

/// Records the scripts the CIM facility would run and reports success.
#[derive(Debug, Default)]
pub struct DryRunFacility {
    issued: Mutex<Vec<String>>,
}

impl DryRunFacility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts recorded so far, in order.
    pub fn issued(&self) -> Vec<String> {
        self.issued
            .lock()
            .map(|issued| issued.clone())
            .unwrap_or_default()
    }

    fn record(&self, script: String) -> FacilityOutput {
        info!(%script, "dry-run: would run PowerShell");
        if let Ok(mut issued) = self.issued.lock() {
            issued.push(script);
        }
        FacilityOutput::default()
    }
}

#[async_trait]
impl PagefileManagementPort for DryRunFacility {
    async fn disable_automatic_management(&self) -> Result<FacilityOutput, ConfigurationError> {
        Ok(self.record(scripts::disable_automatic_management()))
    }

    async fn remove_all_pagefiles(&self) -> Result<PagefileRemoval, ConfigurationError> {
        let output = self.record(scripts::remove_all_pagefiles());
        Ok(PagefileRemoval { removed: 0, output })
    }

    async fn create_pagefile(
        &self,
        spec: &PagefileSpec,
    ) -> Result<FacilityOutput, ConfigurationError> {
        Ok(self.record(scripts::create_pagefile(spec)))
    }
}

/// Logs the restart instead of performing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRestart;

#[async_trait]
impl RestartPort for DryRunRestart {
    async fn restart(&self, delay: Duration) -> Result<(), RestartError> {
        info!(delay_secs = delay.as_secs(), "dry-run: would restart host");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_scripts_in_order() {
        let facility = DryRunFacility::new();

        facility.disable_automatic_management().await.unwrap();
        facility.remove_all_pagefiles().await.unwrap();
        facility
            .create_pagefile(&PagefileSpec::fixed("C:\\pagefile.sys", 8192))
            .await
            .unwrap();

        let issued = facility.issued();
        assert_eq!(issued.len(), 3);
        assert!(issued[0].contains("AutomaticManagedPagefile"));
        assert!(issued[1].contains("Remove-CimInstance"));
        assert!(issued[2].contains("InitialSize=8192"));
    }
}
