//! # Shared Utility Functions
//!
//! Display helpers used by admin front ends when rendering API records.
//!
//! ## Identifiers
//!
//! - [`short_id`] - First `len` characters of an identifier
//!
//! ## Amounts
//!
//! - [`format_vnd`] - Vietnamese dong with `.` thousands separators
//! - [`format_file_size`] - Human readable byte counts
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_vnd, short_id};
//!
//! assert_eq!(short_id("3f2a9c1e-77aa-4bd2", 8), "3f2a9c1e");
//! assert_eq!(format_vnd(1_250_000.0), "1.250.000 đ");
//! ```

/// Return the first `len` characters of `id`.
///
/// Identifiers shorter than `len` are returned unchanged. Works on
/// characters, not bytes, so it never splits a multi-byte code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::short_id;
///
/// assert_eq!(short_id("64b7f0c2a1e9", 8), "64b7f0c2");
/// assert_eq!(short_id("abc", 8), "abc");
/// ```
pub fn short_id(id: &str, len: usize) -> String {
    id.chars().take(len).collect()
}

/// Format an amount in Vietnamese dong, rounded to the unit.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_vnd;
///
/// assert_eq!(format_vnd(0.0), "0 đ");
/// assert_eq!(format_vnd(950_000_000.0), "950.000.000 đ");
/// ```
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-{grouped} đ")
    } else {
        format!("{grouped} đ")
    }
}

/// Format a byte count with a binary unit, two decimals at most.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("3f2a9c1e-77aa-4bd2", 8), "3f2a9c1e");
        assert_eq!(short_id("", 8), "");
        assert_eq!(short_id("đơnhàng-001", 4), "đơnh");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(999.0), "999 đ");
        assert_eq!(format_vnd(1000.0), "1.000 đ");
        assert_eq!(format_vnd(1_234_567.4), "1.234.567 đ");
        assert_eq!(format_vnd(-25_000.0), "-25.000 đ");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3072 GB");
    }
}
