//! Issuance Parameter Validation
//!
//! Every `create_bond` call passes through `validate_issuance` before any
//! state is touched.
//!
//! ## Constraints
//! - `total_face_value` and `denomination` are strictly positive.
//! - `total_face_value` is an exact multiple of `denomination`, and the unit
//!   count fits in `u64`.
//! - `interest_rate_bps` is at most `MAX_INTEREST_RATE_BPS` (100 %).
//! - `payment_frequency` and `maturity_offset` are non-zero.
//! - `issuance height + maturity_offset` does not overflow the ledger sequence.

use bond_errors::BondError;

/// Upper bound on the coupon rate (10_000 bps = 100 %).
pub const MAX_INTEREST_RATE_BPS: u32 = 10_000;

/// Validate the numeric issuance terms and return the unit count.
pub fn validate_issuance(
    total_face_value: i128,
    denomination: i128,
    interest_rate_bps: u32,
    payment_frequency: u32,
    maturity_offset: u32,
) -> Result<u64, BondError> {
    if total_face_value <= 0 || denomination <= 0 {
        return Err(BondError::InvalidParameters);
    }
    if total_face_value % denomination != 0 {
        return Err(BondError::InvalidParameters);
    }
    if interest_rate_bps > MAX_INTEREST_RATE_BPS {
        return Err(BondError::InvalidParameters);
    }
    if payment_frequency == 0 || maturity_offset == 0 {
        return Err(BondError::InvalidParameters);
    }
    u64::try_from(total_face_value / denomination).map_err(|_| BondError::InvalidParameters)
}

/// Maturity height for a bond issued at `issued_at`.
pub fn maturity_height(issued_at: u32, maturity_offset: u32) -> Result<u32, BondError> {
    issued_at
        .checked_add(maturity_offset)
        .ok_or(BondError::InvalidParameters)
}
