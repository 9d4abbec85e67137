//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Args, Subcommand};

/// Available commands for paging-file provisioning.
///
/// `prepare` and `allocate` are the two phases; `run` performs both in
/// one session, which is the normal way to use the tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Show physical memory and free space on the target volume
    Status,

    /// List the capacity options that can be allocated
    Options,

    /// Phase 1: disable automatic management and clear existing paging files
    Prepare,

    /// Phase 2: register a fixed-size paging file
    Allocate(AllocateArgs),

    /// Run preparation, then allocation, in one session
    Run(AllocateArgs),
}

/// Arguments shared by `allocate` and `run`.
#[derive(Args, Debug, Clone)]
pub struct AllocateArgs {
    /// Capacity option to allocate (e.g. "16GB", or "16"); prompted for when omitted
    pub option: Option<String>,

    /// Restart immediately after a successful allocation
    #[arg(short, long, conflicts_with = "no_reboot")]
    pub yes: bool,

    /// Do not restart; the new capacity applies after the next reboot
    #[arg(long)]
    pub no_reboot: bool,
}

impl AllocateArgs {
    /// How the reboot prompt should be answered.
    pub const fn reboot_choice(&self) -> RebootChoice {
        if self.yes {
            RebootChoice::Accept
        } else if self.no_reboot {
            RebootChoice::Decline
        } else {
            RebootChoice::Ask
        }
    }
}

/// Answer to the post-allocation reboot prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebootChoice {
    /// Prompt on the terminal.
    Ask,
    Accept,
    Decline,
}
