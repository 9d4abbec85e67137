//! Table formatting utilities for CLI output.

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format a megabyte count with a thousands separator.
///
/// # Examples
///
/// ```rust
/// use vrampro_cli::presentation::format_size_mb;
///
/// assert_eq!(format_size_mb(4096), "4,096 MB");
/// assert_eq!(format_size_mb(131072), "131,072 MB");
/// ```
pub fn format_size_mb(size_mb: u64) -> String {
    let digits = size_mb.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} MB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_mb_small() {
        assert_eq!(format_size_mb(512), "512 MB");
        assert_eq!(format_size_mb(0), "0 MB");
    }
}
