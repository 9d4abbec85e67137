//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services

pub mod console;
pub mod tables;

// Re-export commonly used items
pub use console::{LOG_PREFIX, log, log_line, phase_line, print_json};
pub use tables::{format_size_mb, print_separator};
