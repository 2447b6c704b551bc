//! Overflow-safe arithmetic helpers for ledger calculations.
//!
//! Every helper returns `BondError::Overflow` instead of wrapping, so callers
//! can propagate with `?` and the invocation aborts without side effects.

use bond_errors::BondError;

/// Denominator for basis-point rates.
pub const BPS_DENOMINATOR: i128 = 10_000;

#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, BondError> {
    a.checked_add(b).ok_or(BondError::Overflow)
}

#[inline]
pub fn sub_u64(a: u64, b: u64) -> Result<u64, BondError> {
    a.checked_sub(b).ok_or(BondError::Overflow)
}

#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_add(b).ok_or(BondError::Overflow)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_sub(b).ok_or(BondError::Overflow)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, BondError> {
    a.checked_mul(b).ok_or(BondError::Overflow)
}

/// Settlement value of `units` bond units: `units * denomination`.
#[inline]
pub fn units_value(units: u64, denomination: i128) -> Result<i128, BondError> {
    mul_i128(i128::from(units), denomination)
}

/// Basis-point share of a non-negative amount, rounded down:
/// `floor(amount * bps / 10_000)`.
#[inline]
pub fn bps(amount: i128, bps: u32) -> Result<i128, BondError> {
    let numerator = mul_i128(amount, i128::from(bps))?;
    Ok(numerator / BPS_DENOMINATOR)
}
