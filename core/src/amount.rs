//! Conversion between human-readable token amounts and base units.
//!
//! Parsing is exact decimal arithmetic; no floating point is involved.

use crate::error::AmountError;

// 10^20 no longer fits in u64.
const MAX_DECIMALS: u8 = 19;

fn ten_pow(decimals: u8) -> Option<u64> {
    10u64.checked_pow(decimals as u32)
}

/// Scales a decimal string such as `"12.5"` into base units of a mint with
/// `decimals` decimals.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<u64, AmountError> {
    let s = amount.trim();
    let invalid = || AmountError::Invalid(amount.to_string());
    let overflow = || AmountError::Overflow {
        amount: amount.to_string(),
        decimals,
    };

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // trailing zeros never lose precision
    let frac = frac.trim_end_matches('0');
    if frac.len() > decimals as usize {
        return Err(AmountError::Precision {
            amount: amount.to_string(),
            decimals,
        });
    }

    // zero needs no scaling, whatever the decimals
    if frac.is_empty() && whole.bytes().all(|b| b == b'0') {
        return Ok(0);
    }

    let scale = ten_pow(decimals).ok_or_else(overflow)?;
    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let frac_units: u64 = if frac.is_empty() {
        0
    } else {
        let pad = ten_pow(decimals - frac.len() as u8).ok_or_else(overflow)?;
        frac.parse::<u64>()
            .map_err(|_| overflow())?
            .checked_mul(pad)
            .ok_or_else(overflow)?
    };

    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(frac_units))
        .ok_or_else(overflow)
}

/// Formats base units of a mint with `decimals` decimals as a decimal string.
pub fn to_ui_amount(units: u64, decimals: u8) -> Result<String, AmountError> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::Overflow {
            amount: units.to_string(),
            decimals,
        });
    }
    if decimals == 0 {
        return Ok(units.to_string());
    }
    let scale = 10u128.pow(decimals as u32);
    let whole = units as u128 / scale;
    let rem = units as u128 % scale;
    Ok(format!("{}.{:0>width$}", whole, rem, width = decimals as usize))
}
