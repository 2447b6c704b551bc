//! Tokenized Bond Ledger Contract
//!
//! Manages the lifecycle of tokenized bond issues: issuance by authorized
//! issuers, primary-market purchase, secondary-market transfer, pooled
//! interest funding and claiming, the one-way maturity transition, and
//! principal redemption (at or before maturity).
//!
//! ## Key design decisions
//!
//! - **Fail-fast**: every precondition violation returns a `BondError` and the
//!   host discards all writes made during the invocation.
//! - **Transfer before commit**: settlement-token movements run before any
//!   ledger write, so a failed transfer leaves the ledger untouched.
//! - **Conservation**: `sum(holdings) + remaining_supply == total units` for
//!   every bond; redemption zeroes holdings without touching supply.
//! - **Pooled interest**: claims are gated only by the fund balance and the
//!   holder's current units. No per-period entitlement is tracked.
//! - **Permissionless maturity**: anyone may call `update_bond_maturity`; the
//!   ledger clock is the only gate.
//! - **Live state**: the instance and every persistent entry touched by an
//!   invocation get their TTL bumped, so bonds stay readable through maturity.

#![no_std]

mod access_control;
mod events;
mod interest;
mod math;
mod sequence;
mod settlement;
mod storage;
mod validation;

pub mod types;

pub use bond_errors::{BondError, ErrorCategory, ErrorExt};
pub use types::Bond;

use sequence::BondIdSequence;
use soroban_sdk::{contract, contractimpl, Address, Env};


#[cfg(test)]
mod test_issuance;








// ─── Helpers ───────────────────────────────────────────────────────────────

/// Shared tail of `redeem_bonds` and `early_redemption`.
///
/// Pays `units * denomination` from the issuer to `holder` and zeroes the
/// holding. Returns `(units, amount)`.
fn redeem_holding(e: &Env, holder: &Address, bond: &Bond) -> Result<(u64, i128), BondError> {
    let units = storage::holding(e, bond.id, holder);
    if units == 0 {
        return Err(BondError::NotBondOwner);
    }
    let amount = math::units_value(units, bond.denomination)?;
    settlement::require_balance(e, &bond.issuer, amount)?;

    settlement::transfer_on_behalf(e, &bond.issuer, holder, amount)?;

    storage::set_holding(e, bond.id, holder, 0);
    Ok((units, amount))
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TokenizedBond;

#[contractimpl]
impl TokenizedBond {
    // ── Administration ─────────────────────────────────────────────────────

    /// One-time initialization. Stores the owner and the settlement token and
    /// starts the bond-id sequence at 1.
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), BondError> {
        if storage::require_initialized(&e).is_ok() {
            return Err(BondError::AlreadyInitialized);
        }
        admin.require_auth();

        access_control::set_owner(&e, &admin);
        settlement::set_token(&e, &token);
        BondIdSequence::new(&e).seed();
        storage::extend_instance_ttl(&e);

        events::emit_initialized(&e, &admin, &token);
        Ok(())
    }

    /// Grant or revoke the right to issue bonds. Owner only.
    pub fn set_issuer_authorization(
        e: Env,
        admin: Address,
        issuer: Address,
        authorized: bool,
    ) -> Result<(), BondError> {
        storage::require_initialized(&e)?;
        access_control::require_owner(&e, &admin)?;
        access_control::set_issuer_authorization(&e, &issuer, authorized);
        events::emit_issuer_authorization(&e, &issuer, authorized);
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(e: Env, admin: Address, new_owner: Address) -> Result<(), BondError> {
        storage::require_initialized(&e)?;
        access_control::require_owner(&e, &admin)?;
        access_control::set_owner(&e, &new_owner);
        events::emit_ownership_transferred(&e, &admin, &new_owner);
        Ok(())
    }

    // ── Issuance ───────────────────────────────────────────────────────────

    /// Issue a new bond and return its id.
    ///
    /// Requirements:
    /// - `issuer` is on the authorized-issuer list (`NotAuthorized`)
    /// - issuance terms pass `validate_issuance` (`InvalidParameters`)
    ///
    /// The whole issue starts as primary-market supply:
    /// `remaining_supply = total_face_value / denomination`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_bond(
        e: Env,
        issuer: Address,
        total_face_value: i128,
        denomination: i128,
        interest_rate_bps: u32,
        payment_frequency: u32,
        maturity_offset: u32,
        allow_early_redemption: bool,
    ) -> Result<u64, BondError> {
        storage::require_initialized(&e)?;
        issuer.require_auth();
        access_control::require_authorized_issuer(&e, &issuer)?;

        let units = validation::validate_issuance(
            total_face_value,
            denomination,
            interest_rate_bps,
            payment_frequency,
            maturity_offset,
        )?;
        let issued_at = e.ledger().sequence();
        let maturity_height = validation::maturity_height(issued_at, maturity_offset)?;

        let id = BondIdSequence::new(&e).next()?;
        let bond = Bond {
            id,
            issuer,
            total_face_value,
            denomination,
            interest_rate_bps,
            payment_frequency,
            issued_at,
            maturity_height,
            mature: false,
            remaining_supply: units,
            allow_early_redemption,
        };
        storage::save_bond(&e, &bond);

        events::emit_bond_created(&e, &bond);
        Ok(id)
    }

    // ── Markets ────────────────────────────────────────────────────────────

    /// Buy `units` from the primary market at `denomination` each.
    ///
    /// `buyer` pays the issuer; the units are credited to `recipient` if
    /// given, otherwise to `buyer`. The balance precondition is checked
    /// against the credited holder.
    pub fn purchase_bonds(
        e: Env,
        buyer: Address,
        bond_id: u64,
        units: u64,
        recipient: Option<Address>,
    ) -> Result<u64, BondError> {
        storage::require_initialized(&e)?;
        buyer.require_auth();

        let mut bond = storage::load_bond(&e, bond_id)?;
        if units == 0 {
            return Err(BondError::InvalidAmount);
        }
        if bond.remaining_supply < units {
            return Err(BondError::BondSoldOut);
        }
        let cost = math::units_value(units, bond.denomination)?;
        let holder = recipient.unwrap_or_else(|| buyer.clone());
        settlement::require_balance(&e, &holder, cost)?;

        settlement::transfer(&e, &buyer, &bond.issuer, cost)?;

        let held = storage::holding(&e, bond_id, &holder);
        storage::set_holding(&e, bond_id, &holder, math::add_u64(held, units)?);
        bond.remaining_supply = math::sub_u64(bond.remaining_supply, units)?;
        storage::save_bond(&e, &bond);

        events::emit_bonds_purchased(&e, bond_id, &buyer, &holder, units, cost);
        Ok(units)
    }

    /// Move `amount` units from `sender` to `recipient`. No settlement
    /// currency changes hands.
    pub fn transfer(
        e: Env,
        sender: Address,
        bond_id: u64,
        amount: u64,
        recipient: Address,
    ) -> Result<(), BondError> {
        storage::require_initialized(&e)?;
        sender.require_auth();

        storage::load_bond(&e, bond_id)?;
        if amount == 0 || recipient == sender {
            return Err(BondError::InvalidAmount);
        }
        let sender_units = storage::holding(&e, bond_id, &sender);
        if sender_units < amount {
            return Err(BondError::InsufficientBalance);
        }
        let recipient_units = storage::holding(&e, bond_id, &recipient);
        let credited = math::add_u64(recipient_units, amount)?;

        storage::set_holding(&e, bond_id, &sender, sender_units - amount);
        storage::set_holding(&e, bond_id, &recipient, credited);

        events::emit_bonds_transferred(&e, bond_id, &sender, &recipient, amount);
        Ok(())
    }

    // ── Interest ───────────────────────────────────────────────────────────

    /// Deposit `amount` into the bond's interest fund. Issuer only.
    pub fn fund_interest_payments(
        e: Env,
        issuer: Address,
        bond_id: u64,
        amount: i128,
    ) -> Result<(), BondError> {
        storage::require_initialized(&e)?;
        issuer.require_auth();

        let bond = storage::load_bond(&e, bond_id)?;
        if bond.issuer != issuer {
            return Err(BondError::NotAuthorized);
        }
        if amount <= 0 {
            return Err(BondError::InvalidAmount);
        }
        settlement::require_balance(&e, &issuer, amount)?;

        settlement::transfer_into_custody(&e, &issuer, amount)?;

        let fund = math::add_i128(storage::interest_fund(&e, bond_id), amount)?;
        storage::set_interest_fund(&e, bond_id, fund);

        events::emit_interest_funded(&e, bond_id, amount, fund);
        Ok(())
    }

    /// Pay `holder` interest on their current units out of the fund and
    /// return the amount paid.
    ///
    /// May be called repeatedly while the fund covers it.
    pub fn claim_interest(e: Env, holder: Address, bond_id: u64) -> Result<i128, BondError> {
        storage::require_initialized(&e)?;
        holder.require_auth();

        let bond = storage::load_bond(&e, bond_id)?;
        let units = storage::holding(&e, bond_id, &holder);
        if units == 0 {
            return Err(BondError::NotBondOwner);
        }
        let due = interest::interest_due(&bond, units)?;
        let fund = storage::interest_fund(&e, bond_id);
        if fund < due {
            return Err(BondError::PaymentInsufficient);
        }

        settlement::transfer_from_custody(&e, &holder, due)?;

        let remaining = math::sub_i128(fund, due)?;
        storage::set_interest_fund(&e, bond_id, remaining);

        events::emit_interest_claimed(&e, bond_id, &holder, due, remaining);
        Ok(due)
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    /// Flip the bond to mature once the ledger reaches its maturity height.
    /// Callable by anyone.
    pub fn update_bond_maturity(e: Env, bond_id: u64) -> Result<(), BondError> {
        storage::require_initialized(&e)?;

        let mut bond = storage::load_bond(&e, bond_id)?;
        if bond.mature {
            return Err(BondError::BondAlreadyMature);
        }
        let now = e.ledger().sequence();
        if now < bond.maturity_height {
            return Err(BondError::BondNotMature);
        }
        bond.mature = true;
        storage::save_bond(&e, &bond);

        events::emit_bond_matured(&e, bond_id, now);
        Ok(())
    }

    /// Redeem all of `holder`'s units at face value from the issuer.
    /// Requires the bond to be flagged mature.
    ///
    /// The issuer must have approved this contract as spender for at least
    /// the redemption amount.
    pub fn redeem_bonds(e: Env, holder: Address, bond_id: u64) -> Result<i128, BondError> {
        storage::require_initialized(&e)?;
        holder.require_auth();

        let bond = storage::load_bond(&e, bond_id)?;
        if !bond.mature {
            return Err(BondError::BondNotMature);
        }
        let (units, amount) = redeem_holding(&e, &holder, &bond)?;

        events::emit_bonds_redeemed(&e, bond_id, &holder, units, amount, false);
        Ok(amount)
    }

    /// Redeem before maturity. Only for bonds issued with
    /// `allow_early_redemption`; closed (`NotAuthorized`) once the bond is
    /// flagged mature.
    pub fn early_redemption(e: Env, holder: Address, bond_id: u64) -> Result<i128, BondError> {
        storage::require_initialized(&e)?;
        holder.require_auth();

        let bond = storage::load_bond(&e, bond_id)?;
        if !bond.allow_early_redemption || bond.mature {
            return Err(BondError::NotAuthorized);
        }
        let (units, amount) = redeem_holding(&e, &holder, &bond)?;

        events::emit_bonds_redeemed(&e, bond_id, &holder, units, amount, true);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_bond(e: Env, bond_id: u64) -> Option<Bond> {
        storage::find_bond(&e, bond_id)
    }

    /// Units of `bond_id` held by `holder` (0 if none).
    pub fn get_balance(e: Env, bond_id: u64, holder: Address) -> u64 {
        storage::holding(&e, bond_id, &holder)
    }

    /// The bond's mature flag; `false` for unknown bonds.
    pub fn is_bond_mature(e: Env, bond_id: u64) -> bool {
        storage::find_bond(&e, bond_id)
            .map(|bond| bond.mature)
            .unwrap_or(false)
    }

    /// Next scheduled coupon height, or `None` at/after maturity or for
    /// unknown bonds. Informational; claims do not consult it.
    pub fn get_next_interest_payment(e: Env, bond_id: u64) -> Option<u32> {
        let bond = storage::find_bond(&e, bond_id)?;
        interest::next_payment_height(&bond, e.ledger().sequence())
    }

    pub fn get_interest_payment_fund(e: Env, bond_id: u64) -> i128 {
        storage::interest_fund(&e, bond_id)
    }

    /// Interest `holder` would receive from a claim right now.
    pub fn calculate_interest(e: Env, bond_id: u64, holder: Address) -> Result<i128, BondError> {
        let bond = storage::load_bond(&e, bond_id)?;
        let units = storage::holding(&e, bond_id, &holder);
        interest::interest_due(&bond, units)
    }

    pub fn get_bond_count(e: Env) -> u64 {
        BondIdSequence::new(&e).issued()
    }

    pub fn get_owner(e: Env) -> Result<Address, BondError> {
        access_control::get_owner(&e)
    }

    pub fn get_settlement_token(e: Env) -> Result<Address, BondError> {
        settlement::get_token(&e)
    }

    pub fn is_authorized_issuer(e: Env, issuer: Address) -> bool {
        access_control::is_authorized_issuer(&e, &issuer)
    }
}
