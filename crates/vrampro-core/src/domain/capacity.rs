//! Capacity options offered for paging-file allocation.
//!
//! A capacity option pairs a human label ("16GB") with the concrete size in
//! megabytes that is written to the paging-file registration.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Megabytes per gigabyte, as used for both labels and the space check.
pub const MB_PER_GB: u64 = 1024;

/// Documented default option sizes, in megabytes.
pub const DEFAULT_CAPACITY_SIZES_MB: [u64; 7] = [4096, 8192, 16384, 32768, 65536, 98304, 131072];

/// Errors raised while building or resolving capacity options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// A capacity option must describe a non-empty paging file.
    #[error("Capacity option '{label}' must have a size greater than zero")]
    ZeroSize { label: String },

    /// The size in megabytes does not fit in a `u64`.
    #[error("Capacity option of {gb}GB is too large")]
    TooLarge { gb: u64 },

    /// The requested label does not match any configured option.
    #[error("Unknown capacity option '{requested}' (available: {available})")]
    UnknownOption {
        requested: String,
        available: String,
    },
}

/// A named paging-file size choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityOption {
    label: String,
    size_mb: u64,
}

impl CapacityOption {
    /// Create an option, rejecting zero sizes.
    pub fn new(label: impl Into<String>, size_mb: u64) -> Result<Self, CapacityError> {
        let label = label.into();
        if size_mb == 0 {
            return Err(CapacityError::ZeroSize { label });
        }
        Ok(Self { label, size_mb })
    }

    /// Create an option labelled `"{gb}GB"`.
    pub fn from_gb(gb: u64) -> Result<Self, CapacityError> {
        let size_mb = gb
            .checked_mul(MB_PER_GB)
            .ok_or(CapacityError::TooLarge { gb })?;
        Self::new(format!("{gb}GB"), size_mb)
    }

    /// Display label, e.g. `"32GB"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Paging-file size in megabytes.
    pub const fn size_mb(&self) -> u64 {
        self.size_mb
    }

    /// Size in gigabytes as compared against free disk space.
    pub fn required_gb(&self) -> f64 {
        self.size_mb as f64 / MB_PER_GB as f64
    }
}

impl fmt::Display for CapacityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} MB)", self.label, self.size_mb)
    }
}

/// The documented default option set: 4GB through 128GB.
pub fn default_capacity_options() -> Vec<CapacityOption> {
    DEFAULT_CAPACITY_SIZES_MB
        .iter()
        .map(|&mb| CapacityOption {
            label: format!("{}GB", mb / MB_PER_GB),
            size_mb: mb,
        })
        .collect()
}

/// Resolve a user-supplied label against the configured options.
///
/// Matching is case-insensitive, and a bare number is read as gigabytes
/// (`"16"` resolves to `"16GB"`).
pub fn find_option<'a>(
    options: &'a [CapacityOption],
    requested: &str,
) -> Result<&'a CapacityOption, CapacityError> {
    let wanted = requested.trim();
    let normalized = if !wanted.is_empty() && wanted.chars().all(|c| c.is_ascii_digit()) {
        format!("{wanted}GB")
    } else {
        wanted.to_string()
    };

    options
        .iter()
        .find(|opt| opt.label.eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| CapacityError::UnknownOption {
            requested: requested.to_string(),
            available: options
                .iter()
                .map(CapacityOption::label)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
