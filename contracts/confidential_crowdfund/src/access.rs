//! # Access control
//!
//! A campaign has exactly two named principals besides its contributors:
//!
//! ```text
//! Owner   ── updates goal, extends deadline, sets oracle, hands over ownership
//! Oracle  ── decrypts aggregate values off-chain; never individual records
//! ```
//!
//! Both live in [`CampaignConfig`]; there is no separate role table.
//!
//! ## Event emissions
//!
//! | Event topic | Trigger |
//! |-------------|---------|
//! | `owner`     | Ownership handed over |
//! | `oracle`    | Oracle replaced |
//!
//! ## Threat model notes
//!
//! - The oracle may never be the owner or the campaign itself: the owner
//!   receives every per-contributor record, and the oracle must not.
//! - For the same reason the oracle never contributes, and an existing
//!   contributor cannot be made the oracle.
//! - A principal change grants the newcomer the current aggregate values.
//!   Nothing is revoked from the outgoing principal.

use soroban_sdk::{symbol_short, Address, Env};

use crate::{acl, ledger};
use crate::types::{CampaignConfig, CampaignState};
use crate::Error;

/// Assert that `caller` is the campaign owner.
pub fn require_owner(config: &CampaignConfig, caller: &Address) -> Result<(), Error> {
    if *caller != config.owner {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Reject principal layouts that would leak individual records.
pub fn validate_principals(
    env: &Env,
    owner: &Address,
    oracle: &Address,
) -> Result<(), Error> {
    let this = env.current_contract_address();
    if oracle == owner || *oracle == this || *owner == this {
        return Err(Error::InvalidPrincipal);
    }
    Ok(())
}

/// Hand the campaign over to `new_owner`.
///
/// - `caller` must be the current owner.
/// - `new_owner` is granted the current aggregate values.
pub fn transfer_ownership(
    env: &Env,
    config: &mut CampaignConfig,
    state: &CampaignState,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), Error> {
    require_owner(config, caller)?;
    validate_principals(env, new_owner, &config.oracle)?;

    config.owner = new_owner.clone();
    acl::allow_aggregate_values(env, config, state.total_raised.handle(), &state.goal_reached, None);

    env.events().publish(
        (symbol_short!("owner"), new_owner.clone()),
        caller.clone(),
    );
    Ok(())
}

/// Replace the oracle.
///
/// - `caller` must be the owner.
/// - The new oracle is granted the current aggregate values only.
/// - An address that already holds a contribution record cannot become the
///   oracle.
pub fn set_oracle(
    env: &Env,
    config: &mut CampaignConfig,
    state: &CampaignState,
    caller: &Address,
    oracle: &Address,
) -> Result<(), Error> {
    require_owner(config, caller)?;
    validate_principals(env, &config.owner, oracle)?;
    if ledger::has_contributed(env, oracle) {
        return Err(Error::InvalidPrincipal);
    }

    config.oracle = oracle.clone();
    acl::allow_aggregate_values(env, config, state.total_raised.handle(), &state.goal_reached, None);

    env.events().publish(
        (symbol_short!("oracle"), oracle.clone()),
        caller.clone(),
    );
    Ok(())
}
