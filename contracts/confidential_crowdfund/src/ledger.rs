//! # Encrypted contribution ledger
//!
//! Folds verified encrypted amounts into two accumulators:
//!
//! - the per-contributor [`ContributionRecord`] (persistent, one per address);
//! - the campaign aggregate `total_raised` in [`CampaignState`].
//!
//! Both are append-only homomorphic sums. Nothing here ever subtracts, so
//! the final aggregate is independent of the order contributions land in.
//! Only the first-time flag and the contributor counter depend on order.

use soroban_sdk::{Address, Env};

use crate::fhe::CoprocessorClient;
use crate::storage;
use crate::types::{
    AggregateTotal, CampaignConfig, CampaignState, ContributionRecord, EncryptedAmount,
};
use crate::Error;

/// Result of crediting one contribution.
pub struct Credit {
    pub first_time: bool,
    pub contributor_total: EncryptedAmount,
}

/// Credit `amount` to `contributor` and to the aggregate.
///
/// The caller has already run the lifecycle, bounds, proof and transfer
/// checks. `state` is updated in memory; the per-contributor record is
/// written immediately.
pub fn credit(
    env: &Env,
    config: &CampaignConfig,
    state: &mut CampaignState,
    contributor: &Address,
    amount: &EncryptedAmount,
) -> Result<Credit, Error> {
    let fhe = CoprocessorClient::new(env, &config.coprocessor);

    // The aggregate must never share a handle with a contributor record,
    // otherwise the oracle's aggregate grant would cover that record.
    state.total_raised = AggregateTotal::Initialized(match state.total_raised.handle() {
        None => fhe.add(&fhe.encode_amount(&0), amount),
        Some(total) => fhe.add(total, amount),
    });

    let (first_time, contributor_total) = match storage::load_contribution(env, contributor) {
        None => {
            state.contributor_count = state
                .contributor_count
                .checked_add(1)
                .ok_or(Error::Overflow)?;
            (true, amount.clone())
        }
        Some(record) => (false, fhe.add(&record.encrypted_total, amount)),
    };

    storage::save_contribution(
        env,
        contributor,
        &ContributionRecord {
            has_contributed: true,
            encrypted_total: contributor_total.clone(),
        },
    );

    Ok(Credit {
        first_time,
        contributor_total,
    })
}

/// Current aggregate handle, or `Error::AggregateUninitialized` before the
/// first contribution.
pub fn aggregate_total(state: &CampaignState) -> Result<EncryptedAmount, Error> {
    state
        .total_raised
        .handle()
        .cloned()
        .ok_or(Error::AggregateUninitialized)
}

/// Running total handle for `contributor`.
pub fn contributor_total(env: &Env, contributor: &Address) -> Result<EncryptedAmount, Error> {
    storage::load_contribution(env, contributor)
        .map(|record| record.encrypted_total)
        .ok_or(Error::UnknownContributor)
}

pub fn has_contributed(env: &Env, contributor: &Address) -> bool {
    storage::load_contribution(env, contributor)
        .map(|record| record.has_contributed)
        .unwrap_or(false)
}
