//! Settlement-currency integration for the bond ledger.
//! Centralizes token lookup, balance checks and transfers.
//!
//! Every transfer goes through a `try_*` token call so a failed movement
//! surfaces as `InsufficientFunds` rather than aborting the host frame. Callers
//! perform the transfer before writing ledger state.

use crate::types::DataKey;
use bond_errors::BondError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// @notice Stores the settlement token. Called once from `initialize`.
pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

/// @notice Returns the configured settlement token address.
pub fn get_token(e: &Env) -> Result<Address, BondError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(BondError::NotInitialized)
}

fn token_client(e: &Env) -> Result<TokenClient<'_>, BondError> {
    let token = get_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// @notice Settlement balance of `who`.
pub fn balance(e: &Env, who: &Address) -> Result<i128, BondError> {
    Ok(token_client(e)?.balance(who))
}

/// @notice Fails with `InsufficientFunds` unless `who` holds at least `amount`.
pub fn require_balance(e: &Env, who: &Address, amount: i128) -> Result<(), BondError> {
    if balance(e, who)? < amount {
        return Err(BondError::InsufficientFunds);
    }
    Ok(())
}

/// @notice Moves `amount` from `from` to `to`. `from` must have authorized the call.
/// @dev Zero amounts are a no-op.
pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), BondError> {
    if amount < 0 {
        return Err(BondError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    match token_client(e)?.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(BondError::InsufficientFunds),
    }
}

/// @notice Moves `amount` from `from` to `to` using the allowance `from`
///         granted to this contract.
/// @dev Used when the payer is not the invoker (issuer-funded redemptions).
pub fn transfer_on_behalf(
    e: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), BondError> {
    if amount < 0 {
        return Err(BondError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    let spender = e.current_contract_address();
    match token_client(e)?.try_transfer_from(&spender, from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(BondError::InsufficientFunds),
    }
}

/// @notice Moves `amount` from `from` into contract custody.
pub fn transfer_into_custody(e: &Env, from: &Address, amount: i128) -> Result<(), BondError> {
    let contract = e.current_contract_address();
    transfer(e, from, &contract, amount)
}

/// @notice Pays `amount` out of contract custody to `to`.
pub fn transfer_from_custody(e: &Env, to: &Address, amount: i128) -> Result<(), BondError> {
    let contract = e.current_contract_address();
    transfer(e, &contract, to, amount)
}
