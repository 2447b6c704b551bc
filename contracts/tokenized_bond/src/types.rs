use soroban_sdk::{contracttype, Address};

// ─── Bond record ───────────────────────────────────────────────────────────

/// A single bond issue. Created once by `create_bond` and never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bond {
    /// Sequence-assigned id, starting at 1.
    pub id: u64,
    /// Address that issued the bond and receives primary-market proceeds.
    pub issuer: Address,
    /// Total face value in settlement-currency units.
    pub total_face_value: i128,
    /// Value of one bond unit. Divides `total_face_value` exactly.
    pub denomination: i128,
    /// Coupon rate in basis points (500 = 5 %).
    pub interest_rate_bps: u32,
    /// Ledgers between scheduled coupon dates.
    pub payment_frequency: u32,
    /// Ledger sequence at issuance.
    pub issued_at: u32,
    /// `issued_at + maturity_offset`.
    pub maturity_height: u32,
    /// Set once by `update_bond_maturity`; never cleared.
    pub mature: bool,
    /// Units still available on the primary market.
    pub remaining_supply: u64,
    /// Whether holders may redeem before maturity.
    pub allow_early_redemption: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract owner; manages the issuer list.
    Admin,
    /// Settlement token (Stellar asset / SEP-41) address.
    Token,
    /// Next id handed out by `BondIdSequence`.
    NextBondId,
    /// Bond record by id.
    Bond(u64),
    /// Units held: (bond id, holder) -> u64.
    Holding(u64, Address),
    /// Pre-funded interest pool held in contract custody.
    InterestFund(u64),
    /// Issuer authorization flag.
    AuthorizedIssuer(Address),
}
