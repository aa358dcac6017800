//! Number formatting utilities for human-readable display.
//!
//! Rounding is half away from zero, matching what browsers do for
//! `Intl.NumberFormat` and `toFixed` on the values the backend sends.

/// Round `value` to `decimals` fractional digits, half away from zero.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // too large to carry fractional digits anyway
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // -0.0 prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Adds thousands separators to the integer part of an already formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format with exactly `decimals` fractional digits and thousands separators.
pub fn display_fixed(value: f64, decimals: usize) -> String {
    let rounded = round_dp(value, decimals as u32);
    group_thousands(&format!("{:.1$}", rounded, decimals))
}
