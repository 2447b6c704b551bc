//! Bond id allocation.

use crate::types::DataKey;
use bond_errors::BondError;
use soroban_sdk::Env;

/// Monotonic bond-id generator backed by instance storage.
///
/// The counter lives under `DataKey::NextBondId`; the sequence is borrowed
/// from the environment by whoever needs to allocate, so there is exactly one
/// writer per invocation.
pub struct BondIdSequence<'a> {
    e: &'a Env,
}

impl<'a> BondIdSequence<'a> {
    pub const FIRST_ID: u64 = 1;

    pub fn new(e: &'a Env) -> Self {
        Self { e }
    }

    /// Start the sequence at `FIRST_ID`. Called once from `initialize`.
    pub fn seed(&self) {
        self.e
            .storage()
            .instance()
            .set(&DataKey::NextBondId, &Self::FIRST_ID);
    }

    /// The id the next call to `next` will return.
    pub fn peek(&self) -> Result<u64, BondError> {
        self.e
            .storage()
            .instance()
            .get(&DataKey::NextBondId)
            .ok_or(BondError::NotInitialized)
    }

    /// Allocate an id and advance the counter.
    pub fn next(&self) -> Result<u64, BondError> {
        let id = self.peek()?;
        let following = id.checked_add(1).ok_or(BondError::Overflow)?;
        self.e
            .storage()
            .instance()
            .set(&DataKey::NextBondId, &following);
        Ok(id)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.peek()
            .map(|next| next - Self::FIRST_ID)
            .unwrap_or(0)
    }
}
