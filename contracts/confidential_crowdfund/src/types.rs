//! # Types
//!
//! Shared data structures used across all modules of the campaign contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A campaign is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written at creation; only the owner rewrites it
//!   (goal update, deadline extension, principal changes).
//! - [`CampaignState`] — written on every accepted contribution.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for convenience.
//!
//! ### Encrypted handles
//!
//! [`EncryptedAmount`] and [`EncryptedBool`] wrap the same 32-byte opaque
//! handle but are distinct types, so a comparison result can never be fed
//! back into an addition and vice versa. Neither type exposes a plaintext.
//!
//! ### Lifecycle
//!
//! [`LifecycleState`] is never stored. It is derived on every read from the
//! `finalized` flag and the ledger clock:
//!
//! ```text
//! Active ──(now ≥ deadline)──► Expired
//!    │                            │
//!    └────────(finalize)──────────┴──► Finalized
//! ```

use soroban_sdk::{contracttype, Address, Bytes, BytesN};

/// Opaque handle to an encrypted unsigned 64-bit amount.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptedAmount(pub BytesN<32>);

/// Opaque handle to an encrypted boolean.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptedBool(pub BytesN<32>);

/// Client-produced ciphertext plus the validity proof that binds it to one
/// campaign and one contributor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptedInput {
    pub ciphertext: BytesN<32>,
    pub proof: Bytes,
}

/// Parameters supplied once at campaign creation.
///
/// Amounts are fixed-point with 6 implied decimals.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignParams {
    pub goal: u64,
    pub min_contribution: u64,
    pub max_contribution: u64,
    pub duration_days: u64,
    /// Stellar Asset Contract moved from contributor to treasury.
    pub asset: Address,
    pub treasury: Address,
}

/// Campaign configuration. Rewritten only by owner-gated operations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub owner: Address,
    pub oracle: Address,
    pub coprocessor: Address,
    pub asset: Address,
    pub treasury: Address,
    pub goal: u64,
    pub min_contribution: u64,
    pub max_contribution: u64,
    pub deadline: u64,
}

/// Encrypted campaign aggregate. `Uninitialized` until the first accepted
/// contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AggregateTotal {
    Uninitialized,
    Initialized(EncryptedAmount),
}

impl AggregateTotal {
    pub fn handle(&self) -> Option<&EncryptedAmount> {
        match self {
            AggregateTotal::Uninitialized => None,
            AggregateTotal::Initialized(total) => Some(total),
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, AggregateTotal::Initialized(_))
    }
}

/// Mutable ledger state, updated on every accepted contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub finalized: bool,
    pub contributor_count: u32,
    pub total_raised: AggregateTotal,
    pub goal_reached: EncryptedBool,
}

/// Per-contributor ledger entry.
///
/// A record only exists once the contributor has been credited, so
/// `has_contributed` is always `true` for stored records.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecord {
    pub has_contributed: bool,
    pub encrypted_total: EncryptedAmount,
}

/// Derived lifecycle of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleState {
    /// Before the deadline and not finalized; the only mutable state.
    Active,
    /// Deadline reached, waiting for someone to finalize.
    Expired,
    /// Terminal.
    Finalized,
}

/// Full public view of a campaign.
///
/// Used as the public API return type; reconstructed internally from
/// the split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub owner: Address,
    pub oracle: Address,
    pub asset: Address,
    pub treasury: Address,
    pub goal: u64,
    pub min_contribution: u64,
    pub max_contribution: u64,
    /// Ledger timestamp at which contributions stop being accepted.
    pub deadline: u64,
    pub contributor_count: u32,
    pub aggregate_initialized: bool,
    pub lifecycle: LifecycleState,
}

impl Campaign {
    pub fn from_parts(
        config: CampaignConfig,
        state: &CampaignState,
        lifecycle: LifecycleState,
    ) -> Self {
        Campaign {
            owner: config.owner,
            oracle: config.oracle,
            asset: config.asset,
            treasury: config.treasury,
            goal: config.goal,
            min_contribution: config.min_contribution,
            max_contribution: config.max_contribution,
            deadline: config.deadline,
            contributor_count: state.contributor_count,
            aggregate_initialized: state.total_raised.is_initialized(),
            lifecycle,
        }
    }
}
