//! OS-level adapters for vrampro.
//!
//! - [`DefaultSystemProbe`]: host memory and free disk space via sysinfo
//! - [`CimPagefileFacility`]: paging-file configuration via PowerShell CIM
//! - [`ShutdownRestart`]: host restart via `shutdown`
//! - [`DryRunFacility`] / [`DryRunRestart`]: log-only stand-ins
#![deny(unsafe_code)]

pub mod command;
pub mod dry_run;
pub mod pagefile;
pub mod restart;
pub mod system;

pub use command::{CommandExecutor, CommandOutcome, SystemExecutor};
pub use dry_run::{DryRunFacility, DryRunRestart};
pub use pagefile::CimPagefileFacility;
pub use restart::ShutdownRestart;
pub use system::DefaultSystemProbe;
