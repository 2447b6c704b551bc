//! Owner and issuer authorization.
//!
//! The owner (set at `initialize`) maintains the issuer list. The list is
//! consulted only when a bond is created.

use crate::storage;
use crate::types::DataKey;
use bond_errors::BondError;
use soroban_sdk::{Address, Env};

pub fn get_owner(e: &Env) -> Result<Address, BondError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(BondError::NotInitialized)
}

/// Require `caller`'s signature and that `caller` is the current owner.
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), BondError> {
    caller.require_auth();
    let owner = get_owner(e)?;
    if owner != *caller {
        return Err(BondError::NotAuthorized);
    }
    Ok(())
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Admin, owner);
}

pub fn is_authorized_issuer(e: &Env, who: &Address) -> bool {
    storage::read_persistent(e, &DataKey::AuthorizedIssuer(who.clone())).unwrap_or(false)
}

pub fn set_issuer_authorization(e: &Env, issuer: &Address, authorized: bool) {
    storage::write_persistent(e, &DataKey::AuthorizedIssuer(issuer.clone()), &authorized);
}

pub fn require_authorized_issuer(e: &Env, caller: &Address) -> Result<(), BondError> {
    if !is_authorized_issuer(e, caller) {
        return Err(BondError::NotAuthorized);
    }
    Ok(())
}
