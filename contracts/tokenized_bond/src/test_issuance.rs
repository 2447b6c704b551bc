//! Initialization, issuer authorization and bond issuance.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{BondError, TokenizedBond, TokenizedBondClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Initialization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_stores_owner_and_token() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(f.client.get_owner(), f.admin);
    assert_eq!(f.client.get_settlement_token(), f.token.address);
    assert_eq!(f.client.get_bond_count(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let f = setup(&e);
    let other = Address::generate(&e);
    assert_eq!(
        f.client.try_initialize(&other, &f.token.address),
        Err(Ok(BondError::AlreadyInitialized))
    );
    assert_eq!(f.client.get_owner(), f.admin);
}

#[test]
fn test_create_bond_before_initialize_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(TokenizedBond, ());
    let client = TokenizedBondClient::new(&e, &contract_id);
    let issuer = Address::generate(&e);
    assert_eq!(
        client.try_create_bond(
            &issuer,
            &FACE_VALUE,
            &DENOMINATION,
            &RATE_BPS,
            &PAYMENT_FREQUENCY,
            &MATURITY_OFFSET,
            &false
        ),
        Err(Ok(BondError::NotInitialized))
    );
    assert_eq!(client.get_bond_count(), 0);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Issuer authorization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_unregistered_issuer_cannot_create() {
    let e = Env::default();
    let f = setup(&e);
    let stranger = Address::generate(&e);
    assert!(!f.client.is_authorized_issuer(&stranger));
    assert_eq!(
        f.client.try_create_bond(
            &stranger,
            &FACE_VALUE,
            &DENOMINATION,
            &RATE_BPS,
            &PAYMENT_FREQUENCY,
            &MATURITY_OFFSET,
            &false
        ),
        Err(Ok(BondError::NotAuthorized))
    );
}

#[test]
fn test_revoked_issuer_cannot_create() {
    let e = Env::default();
    let f = setup(&e);
    f.issue_bond(false);
    f.client
        .set_issuer_authorization(&f.admin, &f.issuer, &false);
    assert!(!f.client.is_authorized_issuer(&f.issuer));
    assert_eq!(
        f.client.try_create_bond(
            &f.issuer,
            &FACE_VALUE,
            &DENOMINATION,
            &RATE_BPS,
            &PAYMENT_FREQUENCY,
            &MATURITY_OFFSET,
            &false
        ),
        Err(Ok(BondError::NotAuthorized))
    );
    // Existing bonds are untouched by revocation.
    assert!(f.client.get_bond(&1).is_some());
}

#[test]
fn test_only_owner_sets_issuer_authorization() {
    let e = Env::default();
    let f = setup(&e);
    let stranger = Address::generate(&e);
    assert_eq!(
        f.client
            .try_set_issuer_authorization(&stranger, &stranger, &true),
        Err(Ok(BondError::NotAuthorized))
    );
    assert!(!f.client.is_authorized_issuer(&stranger));
}

#[test]
fn test_transfer_ownership_moves_admin_rights() {
    let e = Env::default();
    let f = setup(&e);
    let new_owner = Address::generate(&e);
    let new_issuer = Address::generate(&e);

    f.client.transfer_ownership(&f.admin, &new_owner);
    assert_eq!(f.client.get_owner(), new_owner);

    assert_eq!(
        f.client
            .try_set_issuer_authorization(&f.admin, &new_issuer, &true),
        Err(Ok(BondError::NotAuthorized))
    );
    f.client
        .set_issuer_authorization(&new_owner, &new_issuer, &true);
    assert!(f.client.is_authorized_issuer(&new_issuer));
}

// ═══════════════════════════════════════════════════════════════════
// 3. Issuance — happy path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_reference_bond() {
    let e = Env::default();
    let f = setup(&e);

    let id = f.issue_bond(false);
    assert_eq!(id, 1);

    let bond = f.client.get_bond(&id).unwrap();
    assert_eq!(bond.id, 1);
    assert_eq!(bond.issuer, f.issuer);
    assert_eq!(bond.total_face_value, 1_000_000_000);
    assert_eq!(bond.denomination, 1_000_000);
    assert_eq!(bond.interest_rate_bps, 500);
    assert_eq!(bond.payment_frequency, 144);
    assert_eq!(bond.remaining_supply, 1_000);
    assert_eq!(total_units(&bond), 1_000);
    assert!(!bond.mature);
    assert!(!bond.allow_early_redemption);
    assert_eq!(bond.issued_at, START_SEQUENCE);
    assert_eq!(bond.maturity_height, START_SEQUENCE + 52_560);
    assert!(!f.client.is_bond_mature(&id));
}

#[test]
fn test_bond_ids_strictly_increase() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(f.issue_bond(false), 1);
    assert_eq!(f.issue_bond(true), 2);
    assert_eq!(f.issue_bond(false), 3);
    assert_eq!(f.client.get_bond_count(), 3);
}

#[test]
fn test_maturity_height_tracks_issuance_clock() {
    let e = Env::default();
    let f = setup(&e);
    f.set_sequence(5_000);
    let id = f.issue_bond(false);
    let bond = f.client.get_bond(&id).unwrap();
    assert_eq!(bond.issued_at, 5_000);
    assert_eq!(bond.maturity_height, 5_000 + MATURITY_OFFSET);
}

#[test]
fn test_single_unit_issue() {
    let e = Env::default();
    let f = setup(&e);
    let id = f
        .client
        .create_bond(&f.issuer, &1_000, &1_000, &0, &1, &1, &true);
    assert_eq!(f.client.get_bond(&id).unwrap().remaining_supply, 1);
}

#[test]
fn test_get_bond_unknown_is_none() {
    let e = Env::default();
    let f = setup(&e);
    assert!(f.client.get_bond(&42).is_none());
    assert!(!f.client.is_bond_mature(&42));
}

// ═══════════════════════════════════════════════════════════════════
// 4. Issuance — invalid parameters
// ═══════════════════════════════════════════════════════════════════

fn assert_invalid(
    f: &Fixture,
    face: i128,
    denom: i128,
    rate: u32,
    frequency: u32,
    offset: u32,
) {
    assert_eq!(
        f.client
            .try_create_bond(&f.issuer, &face, &denom, &rate, &frequency, &offset, &false),
        Err(Ok(BondError::InvalidParameters))
    );
}

#[test]
fn test_create_rejects_non_positive_face_value() {
    let e = Env::default();
    let f = setup(&e);
    assert_invalid(&f, 0, DENOMINATION, RATE_BPS, PAYMENT_FREQUENCY, MATURITY_OFFSET);
    assert_invalid(&f, -1_000_000, DENOMINATION, RATE_BPS, PAYMENT_FREQUENCY, MATURITY_OFFSET);
}

#[test]
fn test_create_rejects_non_positive_denomination() {
    let e = Env::default();
    let f = setup(&e);
    assert_invalid(&f, FACE_VALUE, 0, RATE_BPS, PAYMENT_FREQUENCY, MATURITY_OFFSET);
    assert_invalid(&f, FACE_VALUE, -1, RATE_BPS, PAYMENT_FREQUENCY, MATURITY_OFFSET);
}

#[test]
fn test_create_rejects_uneven_division() {
    let e = Env::default();
    let f = setup(&e);
    assert_invalid(&f, 1_000_000_001, DENOMINATION, RATE_BPS, PAYMENT_FREQUENCY, MATURITY_OFFSET);
}

#[test]
fn test_create_rejects_bad_schedule() {
    let e = Env::default();
    let f = setup(&e);
    assert_invalid(&f, FACE_VALUE, DENOMINATION, 10_001, PAYMENT_FREQUENCY, MATURITY_OFFSET);
    assert_invalid(&f, FACE_VALUE, DENOMINATION, RATE_BPS, 0, MATURITY_OFFSET);
    assert_invalid(&f, FACE_VALUE, DENOMINATION, RATE_BPS, PAYMENT_FREQUENCY, 0);
}

#[test]
fn test_invalid_issue_consumes_no_id() {
    let e = Env::default();
    let f = setup(&e);
    assert_invalid(&f, 0, DENOMINATION, RATE_BPS, PAYMENT_FREQUENCY, MATURITY_OFFSET);
    assert_eq!(f.client.get_bond_count(), 0);
    assert_eq!(f.issue_bond(false), 1);
}
