//! Coupon computations.
//!
//! Claims are pooled: the amount due depends only on the holder's current
//! units and the bond's rate. There is no per-period entitlement, so a holder
//! may claim again whenever the fund can cover it.

use crate::math;
use crate::types::Bond;
use bond_errors::BondError;

/// Interest owed on `units`: `floor(units * denomination * rate_bps / 10_000)`.
pub fn interest_due(bond: &Bond, units: u64) -> Result<i128, BondError> {
    let principal = math::units_value(units, bond.denomination)?;
    math::bps(principal, bond.interest_rate_bps)
}

/// Next coupon height strictly after `now` on the grid
/// `issued_at + k * payment_frequency`, clamped to the maturity height.
///
/// Returns `None` once `now` has reached maturity.
pub fn next_payment_height(bond: &Bond, now: u32) -> Option<u32> {
    if now >= bond.maturity_height || bond.payment_frequency == 0 {
        return None;
    }
    let frequency = u64::from(bond.payment_frequency);
    let elapsed = u64::from(now.saturating_sub(bond.issued_at));
    let periods = elapsed / frequency + 1;
    let next = u64::from(bond.issued_at) + periods * frequency;
    let clamped = next.min(u64::from(bond.maturity_height));
    u32::try_from(clamped).ok()
}
