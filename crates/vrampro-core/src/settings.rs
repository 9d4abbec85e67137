//! Provisioning settings and validation.
//!
//! Settings are pure values. Loading reads overrides through an injected
//! lookup so callers (and tests) decide where values come from.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::{CapacityOption, default_capacity_options};

/// Default target volume for the paging file.
pub const DEFAULT_TARGET_VOLUME: &str = "C:";

/// Default delay before the host restarts, in seconds.
pub const DEFAULT_RESTART_DELAY_SECS: u64 = 1;

/// Upper bound accepted for the restart delay, in seconds.
pub const MAX_RESTART_DELAY_SECS: u64 = 600;

/// Environment variable overriding the target volume.
pub const ENV_TARGET_VOLUME: &str = "VRAMPRO_TARGET_VOLUME";

/// Environment variable overriding the restart delay.
pub const ENV_RESTART_DELAY_SECS: &str = "VRAMPRO_RESTART_DELAY_SECS";

/// Settings for one provisioning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionSettings {
    /// Volume that hosts the paging file and is checked for free space.
    pub target_volume: String,

    /// Delay passed to the restart facility.
    pub restart_delay_secs: u64,

    /// Enumerable set of sizes offered to the user.
    pub capacity_options: Vec<CapacityOption>,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            target_volume: DEFAULT_TARGET_VOLUME.to_string(),
            restart_delay_secs: DEFAULT_RESTART_DELAY_SECS,
            capacity_options: default_capacity_options(),
        }
    }
}

impl ProvisionSettings {
    /// Build settings from defaults plus overrides found through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(volume) = lookup(ENV_TARGET_VOLUME) {
            settings.target_volume = volume.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_RESTART_DELAY_SECS) {
            settings.restart_delay_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| SettingsError::InvalidRestartDelayValue {
                        value: raw.clone(),
                    })?;
        }

        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Replace the target volume, keeping every other field.
    #[must_use]
    pub fn with_target_volume(mut self, volume: impl Into<String>) -> Self {
        self.target_volume = volume.into();
        self
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Target volume cannot be empty")]
    EmptyVolume,

    #[error("Restart delay must be at most {MAX_RESTART_DELAY_SECS} seconds, got {0}")]
    InvalidRestartDelay(u64),

    #[error("Restart delay must be a whole number of seconds, got '{value}'")]
    InvalidRestartDelayValue { value: String },

    #[error("At least one capacity option must be configured")]
    NoCapacityOptions,

    #[error("Duplicate capacity option label '{0}'")]
    DuplicateCapacityLabel(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &ProvisionSettings) -> Result<(), SettingsError> {
    if settings.target_volume.trim().is_empty() {
        return Err(SettingsError::EmptyVolume);
    }

    if settings.restart_delay_secs > MAX_RESTART_DELAY_SECS {
        return Err(SettingsError::InvalidRestartDelay(
            settings.restart_delay_secs,
        ));
    }

    if settings.capacity_options.is_empty() {
        return Err(SettingsError::NoCapacityOptions);
    }

    let mut seen = HashSet::new();
    for option in &settings.capacity_options {
        if !seen.insert(option.label().to_ascii_lowercase()) {
            return Err(SettingsError::DuplicateCapacityLabel(
                option.label().to_string(),
            ));
        }
    }

    Ok(())
}
