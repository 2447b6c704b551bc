//! Typed accessors over contract storage.
//!
//! Absent holdings and interest funds read as zero at the call site; absent
//! bonds surface as `BondNotFound`. Every persistent entry that is read or
//! written has its TTL bumped, so bond state outlives the longest maturity.

use crate::types::{Bond, DataKey};
use bond_errors::BondError;
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

/// Remaining TTL below which a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

/// Keep the contract instance (owner, settlement token, id counter) live.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn require_initialized(e: &Env) -> Result<(), BondError> {
    if e.storage().instance().has(&DataKey::Admin) {
        extend_instance_ttl(e);
        Ok(())
    } else {
        Err(BondError::NotInitialized)
    }
}

/// Read a persistent entry and bump its TTL if it exists.
pub fn read_persistent<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let storage = e.storage().persistent();
    let value = storage.get::<_, V>(key);
    if value.is_some() {
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    value
}

/// Write a persistent entry and bump its TTL.
pub fn write_persistent<V>(e: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn find_bond(e: &Env, bond_id: u64) -> Option<Bond> {
    read_persistent(e, &DataKey::Bond(bond_id))
}

pub fn load_bond(e: &Env, bond_id: u64) -> Result<Bond, BondError> {
    find_bond(e, bond_id).ok_or(BondError::BondNotFound)
}

pub fn save_bond(e: &Env, bond: &Bond) {
    write_persistent(e, &DataKey::Bond(bond.id), bond);
}

pub fn holding(e: &Env, bond_id: u64, holder: &Address) -> u64 {
    read_persistent(e, &DataKey::Holding(bond_id, holder.clone())).unwrap_or(0)
}

/// Zero is stored, not removed: an emptied holding stays on the ledger.
pub fn set_holding(e: &Env, bond_id: u64, holder: &Address, units: u64) {
    write_persistent(e, &DataKey::Holding(bond_id, holder.clone()), &units);
}

pub fn interest_fund(e: &Env, bond_id: u64) -> i128 {
    read_persistent(e, &DataKey::InterestFund(bond_id)).unwrap_or(0)
}

pub fn set_interest_fund(e: &Env, bond_id: u64, amount: i128) {
    write_persistent(e, &DataKey::InterestFund(bond_id), &amount);
}
