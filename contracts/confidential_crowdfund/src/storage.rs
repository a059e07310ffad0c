//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! campaign contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key       | Type             | Description                               |
//! |-----------|------------------|-------------------------------------------|
//! | `Config`  | `CampaignConfig` | Goal, bounds, deadline, principals        |
//! | `State`   | `CampaignState`  | Aggregate, goal cache, counter, finalized |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                       | Type                 | Description                  |
//! |---------------------------|----------------------|------------------------------|
//! | `Contribution(addr)`      | `ContributionRecord` | Per-contributor encrypted sum |
//! | `Allowed(handle, addr)`   | `bool`               | Decryption permission grant  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Why split Config and State?
//!
//! Contributions are the high-frequency write. They only ever touch
//! `CampaignState`, leaving the larger config entry untouched unless the
//! owner changes it.

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::types::{CampaignConfig, CampaignState, ContributionRecord};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Campaign configuration (Instance).
    Config,
    /// Mutable ledger state (Instance).
    State,
    /// Encrypted running total of one contributor (Persistent).
    Contribution(Address),
    /// `principal` may request decryption of `handle` (Persistent).
    Allowed(BytesN<32>, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Load the campaign configuration.
/// Returns `Error::NotInitialized` before `init`.
pub fn load_config(env: &Env) -> Result<CampaignConfig, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub fn save_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Load the mutable ledger state.
pub fn load_state(env: &Env) -> Result<CampaignState, Error> {
    let state = env
        .storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(state)
}

pub fn save_state(env: &Env, state: &CampaignState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

/// Read config and state together; every mutating entry point needs both.
pub fn load_campaign_pair(env: &Env) -> Result<(CampaignConfig, CampaignState), Error> {
    Ok((load_config(env)?, load_state(env)?))
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn load_contribution(env: &Env, contributor: &Address) -> Option<ContributionRecord> {
    let key = DataKey::Contribution(contributor.clone());
    let record: Option<ContributionRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn save_contribution(env: &Env, contributor: &Address, record: &ContributionRecord) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Grants live as long as the campaign does, so every lookup of an
/// existing grant also extends it.
pub fn is_allowed(env: &Env, handle: &BytesN<32>, principal: &Address) -> bool {
    let key = DataKey::Allowed(handle.clone(), principal.clone());
    let allowed = env.storage().persistent().has(&key);
    if allowed {
        bump_persistent(env, &key);
    }
    allowed
}

pub fn set_allowed(env: &Env, handle: &BytesN<32>, principal: &Address) {
    let key = DataKey::Allowed(handle.clone(), principal.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
