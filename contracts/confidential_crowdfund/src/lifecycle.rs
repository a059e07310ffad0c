//! # Lifecycle guard
//!
//! `Expired` is never stored: it is a predicate over the ledger clock,
//! read fresh on every call. Only `finalized` is persisted.

use soroban_sdk::{log, Env};

use crate::types::{CampaignConfig, CampaignState, LifecycleState};
use crate::Error;

/// Derive the current lifecycle state.
pub fn current(env: &Env, config: &CampaignConfig, state: &CampaignState) -> LifecycleState {
    if state.finalized {
        LifecycleState::Finalized
    } else if env.ledger().timestamp() >= config.deadline {
        LifecycleState::Expired
    } else {
        LifecycleState::Active
    }
}

/// Gate for contributions and goal updates.
pub fn require_active(
    env: &Env,
    config: &CampaignConfig,
    state: &CampaignState,
) -> Result<(), Error> {
    match current(env, config, state) {
        LifecycleState::Active => Ok(()),
        LifecycleState::Expired => Err(Error::CampaignExpired),
        LifecycleState::Finalized => Err(Error::CampaignAlreadyFinalized),
    }
}

/// Gate for deadline extension, which may revive an expired campaign.
pub fn require_not_finalized(state: &CampaignState) -> Result<(), Error> {
    if state.finalized {
        return Err(Error::CampaignAlreadyFinalized);
    }
    Ok(())
}

/// Flip the campaign to `Finalized`.
///
/// Allowed once the deadline has passed, exactly once.
pub fn finalize(
    env: &Env,
    config: &CampaignConfig,
    state: &mut CampaignState,
) -> Result<(), Error> {
    match current(env, config, state) {
        LifecycleState::Expired => {
            state.finalized = true;
            Ok(())
        }
        LifecycleState::Active => {
            log!(env, "finalize rejected, deadline not reached", config.deadline);
            Err(Error::FinalizeTooEarly)
        }
        LifecycleState::Finalized => Err(Error::AlreadyFinalized),
    }
}

/// Seconds until the deadline, zero once it has passed.
pub fn time_remaining(env: &Env, config: &CampaignConfig) -> u64 {
    config.deadline.saturating_sub(env.ledger().timestamp())
}
