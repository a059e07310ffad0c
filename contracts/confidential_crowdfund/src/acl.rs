//! # Decryption permissions
//!
//! Tracks which principal may ask the oracle to decrypt which handle.
//!
//! ## Scoping rules
//!
//! | Value                  | Contract | Owner | Acting sender | Contributor | Oracle |
//! |------------------------|:--------:|:-----:|:-------------:|:-----------:|:------:|
//! | Per-contributor record |    ✓     |   ✓   |               | own only    |        |
//! | Aggregate total        |    ✓     |   ✓   |       ✓       |             |   ✓    |
//! | Goal status            |    ✓     |   ✓   |       ✓       |             |   ✓    |
//!
//! The two public grant helpers below encode these rows; nothing else in
//! the crate writes a permission. Grants are additive and permanent: there
//! is no revoke path.
//!
//! ## Event emissions
//!
//! Each fresh grant publishes `(allowed, principal)` with the handle as
//! data, so an indexer can rebuild the permission set. Repeat grants are
//! silent no-ops.

use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::storage;
use crate::types::{CampaignConfig, EncryptedAmount, EncryptedBool};

/// Record that `principal` may decrypt `handle`.
///
/// Returns `true` if the grant is new, `false` if it already existed.
pub(crate) fn grant(env: &Env, handle: &BytesN<32>, principal: &Address) -> bool {
    if storage::is_allowed(env, handle, principal) {
        return false;
    }
    storage::set_allowed(env, handle, principal);
    env.events()
        .publish((symbol_short!("allowed"), principal.clone()), handle.clone());
    true
}

pub fn is_allowed(env: &Env, handle: &BytesN<32>, principal: &Address) -> bool {
    storage::is_allowed(env, handle, principal)
}

/// Grant a contributor's running total to the contributor, the campaign and
/// the owner. The oracle is deliberately absent.
pub fn allow_contribution_record(
    env: &Env,
    config: &CampaignConfig,
    contributor: &Address,
    record: &EncryptedAmount,
) {
    grant(env, &record.0, &env.current_contract_address());
    grant(env, &record.0, &config.owner);
    grant(env, &record.0, contributor);
}

/// Grant an aggregate handle to the campaign, the owner, the oracle and,
/// when present, the sender of the current operation.
pub fn allow_aggregate(
    env: &Env,
    config: &CampaignConfig,
    handle: &BytesN<32>,
    sender: Option<&Address>,
) {
    grant(env, handle, &env.current_contract_address());
    grant(env, handle, &config.owner);
    grant(env, handle, &config.oracle);
    if let Some(sender) = sender {
        grant(env, handle, sender);
    }
}

/// Convenience for the two aggregate values currently held by the campaign.
pub fn allow_aggregate_values(
    env: &Env,
    config: &CampaignConfig,
    total: Option<&EncryptedAmount>,
    goal_reached: &EncryptedBool,
    sender: Option<&Address>,
) {
    if let Some(total) = total {
        allow_aggregate(env, config, &total.0, sender);
    }
    allow_aggregate(env, config, &goal_reached.0, sender);
}
