//! Options command handler.

use anyhow::Result;
use vrampro_core::ProvisionSettings;

use crate::bootstrap::CliContext;
use crate::presentation::{format_size_mb, print_json, print_separator};

/// Execute the options command: list the configured capacity options.
pub fn execute(ctx: &CliContext) -> Result<()> {
    if ctx.json {
        return print_json(&ctx.settings().capacity_options);
    }

    print_table(ctx.settings());
    Ok(())
}

/// Print the option table; also shown before the interactive option prompt.
pub fn print_table(settings: &ProvisionSettings) {
    println!("{:<10} {:>12}", "OPTION", "SIZE");
    print_separator(23);
    for option in &settings.capacity_options {
        println!("{:<10} {:>12}", option.label(), format_size_mb(option.size_mb()));
    }
}
