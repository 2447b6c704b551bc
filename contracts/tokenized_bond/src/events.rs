use crate::types::Bond;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the ledger is initialized.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The owner
/// * `Address` - The settlement token
pub fn emit_initialized(e: &Env, owner: &Address, token: &Address) {
    let topics = (Symbol::new(e, "initialized"),);
    let data = (owner.clone(), token.clone());
    e.events().publish(topics, data);
}

/// Emitted when the owner grants or revokes issuer rights.
///
/// # Topics
/// * `Symbol` - "issuer_authorization"
/// * `Address` - The issuer
///
/// # Data
/// * `bool` - The new authorization flag
pub fn emit_issuer_authorization(e: &Env, issuer: &Address, authorized: bool) {
    let topics = (Symbol::new(e, "issuer_authorization"), issuer.clone());
    e.events().publish(topics, authorized);
}

/// Emitted when ownership moves to a new address.
///
/// # Topics
/// * `Symbol` - "ownership_transferred"
///
/// # Data
/// * `Address` - The previous owner
/// * `Address` - The new owner
pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    let topics = (Symbol::new(e, "ownership_transferred"),);
    let data = (previous.clone(), new_owner.clone());
    e.events().publish(topics, data);
}

/// Emitted when a new bond is issued.
///
/// # Topics
/// * `Symbol` - "bond_created"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The issuer
/// * `i128` - Total face value
/// * `i128` - Denomination
/// * `u32` - Maturity height
pub fn emit_bond_created(e: &Env, bond: &Bond) {
    let topics = (Symbol::new(e, "bond_created"), bond.id);
    let data = (
        bond.issuer.clone(),
        bond.total_face_value,
        bond.denomination,
        bond.maturity_height,
    );
    e.events().publish(topics, data);
}

/// Emitted on a primary-market purchase.
///
/// # Topics
/// * `Symbol` - "bonds_purchased"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The payer
/// * `Address` - The holder credited with the units
/// * `u64` - Units purchased
/// * `i128` - Settlement amount paid to the issuer
pub fn emit_bonds_purchased(
    e: &Env,
    bond_id: u64,
    payer: &Address,
    holder: &Address,
    units: u64,
    cost: i128,
) {
    let topics = (Symbol::new(e, "bonds_purchased"), bond_id);
    let data = (payer.clone(), holder.clone(), units, cost);
    e.events().publish(topics, data);
}

/// Emitted on a secondary-market transfer.
///
/// # Topics
/// * `Symbol` - "bonds_transferred"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The sender
/// * `Address` - The recipient
/// * `u64` - Units moved
pub fn emit_bonds_transferred(e: &Env, bond_id: u64, from: &Address, to: &Address, units: u64) {
    let topics = (Symbol::new(e, "bonds_transferred"), bond_id);
    let data = (from.clone(), to.clone(), units);
    e.events().publish(topics, data);
}

/// Emitted when an issuer tops up the interest fund.
///
/// # Topics
/// * `Symbol` - "interest_funded"
/// * `u64` - The bond id
///
/// # Data
/// * `i128` - Amount deposited
/// * `i128` - Fund balance after the deposit
pub fn emit_interest_funded(e: &Env, bond_id: u64, amount: i128, fund: i128) {
    let topics = (Symbol::new(e, "interest_funded"), bond_id);
    e.events().publish(topics, (amount, fund));
}

/// Emitted when a holder claims interest.
///
/// # Topics
/// * `Symbol` - "interest_claimed"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The holder
/// * `i128` - Amount paid
/// * `i128` - Fund balance after the claim
pub fn emit_interest_claimed(e: &Env, bond_id: u64, holder: &Address, amount: i128, fund: i128) {
    let topics = (Symbol::new(e, "interest_claimed"), bond_id);
    let data = (holder.clone(), amount, fund);
    e.events().publish(topics, data);
}

/// Emitted when a bond is flagged mature.
///
/// # Topics
/// * `Symbol` - "bond_matured"
/// * `u64` - The bond id
///
/// # Data
/// * `u32` - Ledger height at which the flag was set
pub fn emit_bond_matured(e: &Env, bond_id: u64, height: u32) {
    let topics = (Symbol::new(e, "bond_matured"), bond_id);
    e.events().publish(topics, height);
}

/// Emitted on redemption. `early` selects the topic:
/// "bonds_redeemed" or "bonds_redeemed_early".
///
/// # Topics
/// * `Symbol` - "bonds_redeemed" or "bonds_redeemed_early"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The holder
/// * `u64` - Units redeemed
/// * `i128` - Principal paid by the issuer
pub fn emit_bonds_redeemed(
    e: &Env,
    bond_id: u64,
    holder: &Address,
    units: u64,
    amount: i128,
    early: bool,
) {
    let name = if early {
        "bonds_redeemed_early"
    } else {
        "bonds_redeemed"
    };
    let topics = (Symbol::new(e, name), bond_id);
    let data = (holder.clone(), units, amount);
    e.events().publish(topics, data);
}
