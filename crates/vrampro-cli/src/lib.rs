//! Command-line adapter for vrampro.
//!
//! Parses arguments, composes the workflow in [`bootstrap`], and renders
//! phase results as `[V-RAM-PRO]>` progress lines or JSON.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{AllocateArgs, Commands, RebootChoice};
pub use error::CliError;
pub use parser::Cli;
