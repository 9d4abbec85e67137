//! In-memory fakes shared by service tests.

use crate::ports::{
    ConfigurationError, FacilityOperation, FacilityOutput, PagefileManagementPort,
    PagefileRemoval, PagefileSpec, ProbeError, ProbeResult, SystemProbePort,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Message the fake OS returns while automatic management is still on.
pub const AUTO_MANAGED_REJECTION: &str =
    "Set-CimInstance : Automatic paging-file management is enabled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacilityCall {
    DisableAutomatic,
    RemoveAll,
    Create(PagefileSpec),
}

/// Simulates the OS facility, including rejection of new registrations
/// while automatic management is enabled.
pub struct FakeFacility {
    calls: Mutex<Vec<FacilityCall>>,
    auto_managed: Mutex<bool>,
    registrations: Mutex<usize>,
    disable_error: Option<String>,
    remove_error: Option<String>,
}

impl FakeFacility {
    pub fn new() -> Self {
        Self::with_registrations(0)
    }

    pub fn with_registrations(count: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            auto_managed: Mutex::new(true),
            registrations: Mutex::new(count),
            disable_error: None,
            remove_error: None,
        }
    }

    pub fn already_prepared(self) -> Self {
        *self.auto_managed.lock().unwrap() = false;
        self
    }

    pub fn rejecting_disable(mut self, detail: &str) -> Self {
        self.disable_error = Some(detail.to_string());
        self
    }

    pub fn rejecting_remove(mut self, detail: &str) -> Self {
        self.remove_error = Some(detail.to_string());
        self
    }

    pub fn calls(&self) -> Vec<FacilityCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn registrations(&self) -> usize {
        *self.registrations.lock().unwrap()
    }
}

#[async_trait]
impl PagefileManagementPort for FakeFacility {
    async fn disable_automatic_management(&self) -> Result<FacilityOutput, ConfigurationError> {
        self.calls.lock().unwrap().push(FacilityCall::DisableAutomatic);
        if let Some(detail) = &self.disable_error {
            return Err(ConfigurationError::Rejected {
                operation: FacilityOperation::DisableAutomaticManagement,
                detail: detail.clone(),
            });
        }
        *self.auto_managed.lock().unwrap() = false;
        Ok(FacilityOutput::default())
    }

    async fn remove_all_pagefiles(&self) -> Result<PagefileRemoval, ConfigurationError> {
        self.calls.lock().unwrap().push(FacilityCall::RemoveAll);
        if let Some(detail) = &self.remove_error {
            return Err(ConfigurationError::Rejected {
                operation: FacilityOperation::RemovePagefiles,
                detail: detail.clone(),
            });
        }
        let mut registrations = self.registrations.lock().unwrap();
        let removed = *registrations;
        *registrations = 0;
        Ok(PagefileRemoval {
            removed,
            output: FacilityOutput::new(removed.to_string()),
        })
    }

    async fn create_pagefile(
        &self,
        spec: &PagefileSpec,
    ) -> Result<FacilityOutput, ConfigurationError> {
        self.calls
            .lock()
            .unwrap()
            .push(FacilityCall::Create(spec.clone()));
        if *self.auto_managed.lock().unwrap() {
            return Err(ConfigurationError::Rejected {
                operation: FacilityOperation::CreatePagefile,
                detail: AUTO_MANAGED_REJECTION.to_string(),
            });
        }
        *self.registrations.lock().unwrap() += 1;
        Ok(FacilityOutput::default())
    }
}

/// Fixed readings for one volume.
pub struct FakeProbe {
    pub memory: u64,
    pub volume: String,
    pub free: u64,
}

impl FakeProbe {
    pub fn new(volume: &str, memory: u64, free: u64) -> Self {
        Self {
            memory,
            volume: volume.to_string(),
            free,
        }
    }
}

impl SystemProbePort for FakeProbe {
    fn memory_total(&self) -> ProbeResult<u64> {
        Ok(self.memory)
    }

    fn disk_free(&self, volume: &str) -> ProbeResult<u64> {
        if volume == self.volume {
            Ok(self.free)
        } else {
            Err(ProbeError::VolumeNotFound {
                volume: volume.to_string(),
            })
        }
    }
}
