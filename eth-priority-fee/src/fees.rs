//! Hex/unit conversion and the EIP-1559 priority fee formula.
//!
//! Everything here is pure. Absent or malformed hex quantities decode to zero,
//! so a record missing a field simply contributes nothing to the fee.

use alloy_primitives::U256;

/// Gas unit constants
pub const GWEI: u64 = 1_000_000_000;

/// Wei per gwei as a floating-point divisor
pub const WEI_PER_GWEI: f64 = GWEI as f64;

/// Decode a `0x`-prefixed hexadecimal quantity
///
/// Returns zero for absent or empty input, input without the lowercase `0x`
/// prefix, input with non-hex digits (`_` separators included), and values
/// wider than 256 bits.
pub fn hex_to_int(hex: Option<&str>) -> U256 {
    hex.and_then(|hex| hex.strip_prefix("0x"))
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|digits| U256::from_str_radix(digits, 16).ok())
        .unwrap_or(U256::ZERO)
}

/// Nearest `f64` to an unsigned 256-bit integer
pub fn u256_to_f64(value: U256) -> f64 {
    f64::from(value)
}

/// Convert a hex-encoded wei quantity to gwei, without rounding
pub fn wei_to_gwei(hex: Option<&str>) -> f64 {
    u256_to_f64(hex_to_int(hex)) / WEI_PER_GWEI
}

/// EIP-1559 tip capping: `max(0, min(max_priority_fee, max_fee - base_fee))`
///
/// All three arguments share one unit (gwei in practice). The result never
/// exceeds `max_priority_fee` and is never negative, which covers a base fee
/// above the fee cap.
pub fn effective_tip_per_gas(max_priority_fee: f64, max_fee: f64, base_fee: f64) -> f64 {
    (max_fee - base_fee).min(max_priority_fee).max(0.0)
}

/// Total priority fee paid by a transaction
///
/// The three fee quantities are hex wei, `gas_used` is hex gas units and is
/// used as a raw multiplier on the gwei tip.
pub fn calculate_priority_fee(
    max_priority_fee_per_gas: Option<&str>,
    max_fee_per_gas: Option<&str>,
    base_fee_per_gas: Option<&str>,
    gas_used: Option<&str>,
) -> f64 {
    let tip = effective_tip_per_gas(
        wei_to_gwei(max_priority_fee_per_gas),
        wei_to_gwei(max_fee_per_gas),
        wei_to_gwei(base_fee_per_gas),
    );
    tip * u256_to_f64(hex_to_int(gas_used))
}
