//! PowerShell CIM scripts for paging-file configuration.

use vrampro_core::PagefileSpec;

/// PowerShell host executable.
pub const POWERSHELL: &str = "powershell";

/// Makes cmdlet errors terminate the script with a non-zero exit.
const STRICT_PREAMBLE: &str = "$ErrorActionPreference = 'Stop'; ";

/// Turn off `AutomaticManagedPagefile` on the computer system instance.
pub fn disable_automatic_management() -> String {
    format!(
        "{STRICT_PREAMBLE}Set-CimInstance -Query 'Select * from Win32_ComputerSystem' \
         -Property @{{AutomaticManagedPagefile=$False}}"
    )
}

/// Remove every `Win32_PageFileSetting` and print how many there were.
pub fn remove_all_pagefiles() -> String {
    format!(
        "{STRICT_PREAMBLE}$existing = @(Get-CimInstance -ClassName Win32_PageFileSetting); \
         $existing | Remove-CimInstance; $existing.Count"
    )
}

/// Create a `Win32_PageFileSetting` for `spec`.
pub fn create_pagefile(spec: &PagefileSpec) -> String {
    format!(
        "{STRICT_PREAMBLE}New-CimInstance -ClassName Win32_PageFileSetting \
         -Property @{{Name='{}'; InitialSize={}; MaximumSize={}}}",
        quote_single(&spec.path),
        spec.initial_mb,
        spec.maximum_mb
    )
}

/// Arguments for running `script` non-interactively.
pub fn powershell_args(script: String) -> Vec<String> {
    vec![
        "-NoProfile".to_string(),
        "-NonInteractive".to_string(),
        "-Command".to_string(),
        script,
    ]
}

/// Parse the trailing count printed by `remove_all_pagefiles`.
pub fn parse_removed_count(stdout: &str) -> usize {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.parse().ok())
        .unwrap_or(0)
}

// Single-quoted PowerShell strings escape a quote by doubling it.
fn quote_single(value: &str) -> String {
    value.replace('\'', "''")
}
