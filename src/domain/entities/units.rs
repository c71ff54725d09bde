//! Fixed-point formatting of native-unit balances.

use primitive_types::U256;

/// Formats a raw base-unit quantity as a decimal string with the given
/// number of implied decimals.
///
/// Whole values render with a single trailing zero (`"1.0"`); fractional
/// values keep significant digits with trailing zeros trimmed. A `decimals`
/// whose scale does not fit in 256 bits yields an empty string.
#[must_use]
pub fn format_units(value: U256, decimals: u32) -> String {
    let Some(scale) = U256::from(10u64).checked_pow(U256::from(decimals)) else {
        return String::new();
    };
    let whole = value / scale;
    let frac = value % scale;

    if frac.is_zero() {
        return format!("{whole}.0");
    }

    let mut frac_str = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }

    format!("{whole}.{frac_str}")
}

/// Parses a 0x-prefixed JSON-RPC hex quantity.
#[must_use]
pub fn parse_hex_quantity(value: &str) -> Option<U256> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))?;

    if hex.is_empty() {
        return None;
    }

    U256::from_str_radix(hex, 16).ok()
}
