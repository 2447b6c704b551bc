#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups ledger errors by domain for monitoring and off-chain display.
/// @dev    Consumers should switch on this value first, then on the specific
///         `BondError` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Bond registry, lifecycle and unit-balance errors (codes 200-299).
    Bond,
    /// Settlement-currency and interest-fund errors (codes 300-399).
    Settlement,
    /// Checked-math errors (codes 700-799).
    Arithmetic,
}

/// @title  BondError
/// @notice Error enum returned by every mutating ledger operation.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1   -  99 : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Bond
///   300 - 399 : Settlement
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BondError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the owner, not an authorized issuer, not the bond's
    /// issuer, or early redemption is disabled or closed for the bond.
    NotAuthorized = 100,

    /// Caller holds zero units of the bond.
    NotBondOwner = 101,

    // --- Bond (200-299) ---
    /// No bond exists for the given id.
    BondNotFound = 200,

    /// Reserved. No current flow produces it.
    BondAlreadyExists = 201,

    /// Remaining primary-market supply is below the requested units.
    BondSoldOut = 202,

    /// Bond has not reached maturity (flag unset or clock below maturity height).
    BondNotMature = 203,

    /// Bond is already flagged mature.
    BondAlreadyMature = 204,

    /// Issuance parameters violate the bond invariants.
    InvalidParameters = 205,

    /// Zero amount, or a transfer to oneself.
    InvalidAmount = 206,

    /// Caller's unit balance is below the requested transfer.
    InsufficientBalance = 207,

    // --- Settlement (300-399) ---
    /// Settlement-currency balance is too low or the token transfer failed.
    InsufficientFunds = 300,

    /// Reserved. No current flow produces it.
    PaymentAlreadyMade = 301,

    /// The bond's interest fund cannot cover the claim.
    PaymentInsufficient = 302,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every BondError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for BondError {
    fn category(&self) -> ErrorCategory {
        match self {
            BondError::NotInitialized | BondError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            BondError::NotAuthorized | BondError::NotBondOwner => ErrorCategory::Authorization,

            BondError::BondNotFound
            | BondError::BondAlreadyExists
            | BondError::BondSoldOut
            | BondError::BondNotMature
            | BondError::BondAlreadyMature
            | BondError::InvalidParameters
            | BondError::InvalidAmount
            | BondError::InsufficientBalance => ErrorCategory::Bond,

            BondError::InsufficientFunds
            | BondError::PaymentAlreadyMade
            | BondError::PaymentInsufficient => ErrorCategory::Settlement,

            BondError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            BondError::NotInitialized => "Contract has not been initialized",
            BondError::AlreadyInitialized => "Contract has already been initialized",
            BondError::NotAuthorized => "Caller is not authorized for this operation",
            BondError::NotBondOwner => "Caller holds no units of this bond",
            BondError::BondNotFound => "No bond found for the given id",
            BondError::BondAlreadyExists => "A bond with this id already exists",
            BondError::BondSoldOut => "Not enough primary-market supply remaining",
            BondError::BondNotMature => "Bond has not reached maturity",
            BondError::BondAlreadyMature => "Bond is already mature",
            BondError::InvalidParameters => "Bond issuance parameters are invalid",
            BondError::InvalidAmount => "Amount must be positive and recipient distinct",
            BondError::InsufficientBalance => "Insufficient bond unit balance",
            BondError::InsufficientFunds => "Insufficient settlement currency",
            BondError::PaymentAlreadyMade => "Payment has already been made",
            BondError::PaymentInsufficient => "Interest fund cannot cover the claim",
            BondError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
