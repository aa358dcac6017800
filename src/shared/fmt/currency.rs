//! Currency labels for axis ticks and tooltips.

use super::num::display_fixed;
use crate::shared::CurrencyKey;

/// Render `value` as a currency string.
///
/// JPY has no fractional digits (`￥1,235`), USD exactly two (`$1,234.50`).
/// Negative amounts carry a leading `-` unless they round to zero.
pub fn format_currency(key: CurrencyKey, value: f64) -> String {
    let body = display_fixed(value.abs(), key.fraction_digits());
    let is_zero = body.chars().all(|c| matches!(c, '0' | '.' | ','));
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}{}", sign, key.symbol(), body)
}
