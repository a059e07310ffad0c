//! # Confidential Crowdfund Contract
//!
//! One deployed `ConfidentialCrowdfund` instance is one campaign. Contributors
//! fund it with encrypted amounts; the contract keeps encrypted running totals
//! per contributor and in aggregate, and an encrypted "goal reached" flag.
//! Plaintexts are only ever disclosed off-chain by the oracle, and only for
//! handles the contract has granted.
//!
//! | Phase          | Entry Point(s)                                          |
//! |----------------|---------------------------------------------------------|
//! | Bootstrap      | [`ConfidentialCrowdfund::init`]                         |
//! | Owner admin    | `update_goal`, `extend_deadline`, `set_oracle`, `transfer_ownership` |
//! | Funding        | [`ConfidentialCrowdfund::contribute`]                   |
//! | Goal           | `refresh_goal_status`, `get_goal_status`                |
//! | Closing        | [`ConfidentialCrowdfund::finalize`]                     |
//! | Queries        | `get_campaign`, `get_total_raised`, `get_contribution`, `is_allowed`, ... |
//!
//! ## Architecture
//!
//! Encrypted arithmetic is delegated to [`fhe`], the ledger fold to
//! [`ledger`], goal evaluation to [`goal`], decryption permissions to
//! [`acl`], lifecycle gating to [`lifecycle`] and storage to [`storage`].
//! This file contains only the public entry points, in the order each
//! operation runs its checks.
//!
//! Every fallible entry point returns `Result<_, Error>`. A returned error
//! discards all storage writes, events and sub-contract effects of the
//! invocation, so failed operations leave no trace.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env};

pub mod access;
pub mod acl;
pub mod events;
pub mod fhe;
pub mod goal;
pub mod ledger;
pub mod lifecycle;
mod payment;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{
    AggregateTotal, Campaign, CampaignConfig, CampaignParams, CampaignState, ContributionRecord,
    EncryptedAmount, EncryptedBool, EncryptedInput, LifecycleState,
};

/// Seconds in one campaign day.
pub const SECONDS_PER_DAY: u64 = 86_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 1,
    CampaignExpired = 2,
    CampaignAlreadyFinalized = 3,
    InvalidGoal = 4,
    InvalidDeadline = 5,
    InvalidContributionLimits = 6,
    ContributionOutOfBounds = 7,
    TransferFailed = 8,
    ProofVerificationFailed = 9,
    AggregateUninitialized = 10,
    UnknownContributor = 11,
    FinalizeTooEarly = 12,
    AlreadyFinalized = 13,
    AlreadyInitialized = 14,
    NotInitialized = 15,
    InvalidPrincipal = 16,
    InsufficientAllowance = 17,
    InsufficientBalance = 18,
    Overflow = 19,
}

#[contract]
pub struct ConfidentialCrowdfund;

#[contractimpl]
impl ConfidentialCrowdfund {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Create the campaign.
    ///
    /// Must be called exactly once immediately after deployment.
    ///
    /// - `owner` must sign and may later update the goal or extend the deadline.
    /// - `oracle` decrypts aggregate values off-chain; never individual records.
    /// - `coprocessor` performs all encrypted arithmetic and input verification.
    /// - The deadline is the current ledger time plus `params.duration_days`.
    pub fn init(
        env: Env,
        owner: Address,
        oracle: Address,
        coprocessor: Address,
        params: CampaignParams,
    ) -> Result<Campaign, Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        if params.goal == 0 {
            return Err(Error::InvalidGoal);
        }
        if params.min_contribution == 0 || params.min_contribution > params.max_contribution {
            return Err(Error::InvalidContributionLimits);
        }
        if params.duration_days == 0 {
            return Err(Error::InvalidDeadline);
        }

        access::validate_principals(&env, &owner, &oracle)?;
        let this = env.current_contract_address();
        if params.asset == this || params.treasury == this || params.asset == params.treasury {
            return Err(Error::InvalidPrincipal);
        }

        let deadline = params
            .duration_days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|duration| env.ledger().timestamp().checked_add(duration))
            .ok_or(Error::InvalidDeadline)?;

        let config = CampaignConfig {
            owner: owner.clone(),
            oracle,
            coprocessor,
            asset: params.asset,
            treasury: params.treasury,
            goal: params.goal,
            min_contribution: params.min_contribution,
            max_contribution: params.max_contribution,
            deadline,
        };
        let state = CampaignState {
            finalized: false,
            contributor_count: 0,
            total_raised: AggregateTotal::Uninitialized,
            goal_reached: goal::evaluate(&env, &config, None),
        };
        acl::allow_aggregate(&env, &config, &state.goal_reached.0, None);

        storage::save_config(&env, &config);
        storage::save_state(&env, &state);

        events::emit_campaign_created(&env, owner, config.goal, deadline);

        let lifecycle = lifecycle::current(&env, &config, &state);
        Ok(Campaign::from_parts(config, &state, lifecycle))
    }

    // ─────────────────────────────────────────────────────────
    // Owner administration
    // ─────────────────────────────────────────────────────────

    /// Replace the goal and re-evaluate the cached goal status.
    ///
    /// - `caller` must be the owner; the campaign must be `Active`.
    pub fn update_goal(env: Env, caller: Address, new_goal: u64) -> Result<EncryptedBool, Error> {
        caller.require_auth();
        let (mut config, mut state) = storage::load_campaign_pair(&env)?;
        access::require_owner(&config, &caller)?;
        lifecycle::require_active(&env, &config, &state)?;
        if new_goal == 0 {
            return Err(Error::InvalidGoal);
        }

        let old_goal = config.goal;
        config.goal = new_goal;
        let reached = goal::recompute(&env, &config, &mut state);
        acl::allow_aggregate(&env, &config, &reached.0, Some(&caller));

        storage::save_config(&env, &config);
        storage::save_state(&env, &state);

        events::emit_goal_updated(&env, old_goal, new_goal);
        Ok(reached)
    }

    /// Push the deadline forward by `extra_days`. Returns the new deadline.
    ///
    /// - `caller` must be the owner; the campaign must not be finalized.
    /// - An expired campaign becomes `Active` again if the new deadline is
    ///   in the future.
    pub fn extend_deadline(env: Env, caller: Address, extra_days: u64) -> Result<u64, Error> {
        caller.require_auth();
        let (mut config, state) = storage::load_campaign_pair(&env)?;
        access::require_owner(&config, &caller)?;
        lifecycle::require_not_finalized(&state)?;
        if extra_days == 0 {
            return Err(Error::InvalidDeadline);
        }

        let old_deadline = config.deadline;
        let new_deadline = extra_days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|extra| old_deadline.checked_add(extra))
            .ok_or(Error::InvalidDeadline)?;
        config.deadline = new_deadline;
        storage::save_config(&env, &config);

        events::emit_deadline_extended(&env, old_deadline, new_deadline);
        Ok(new_deadline)
    }

    /// Replace the oracle. `caller` must be the owner.
    pub fn set_oracle(env: Env, caller: Address, oracle: Address) -> Result<(), Error> {
        caller.require_auth();
        let (mut config, state) = storage::load_campaign_pair(&env)?;
        access::set_oracle(&env, &mut config, &state, &caller, &oracle)?;
        storage::save_config(&env, &config);
        Ok(())
    }

    /// Hand the campaign to `new_owner`. `caller` must be the owner.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        let (mut config, state) = storage::load_campaign_pair(&env)?;
        access::transfer_ownership(&env, &mut config, &state, &caller, &new_owner)?;
        storage::save_config(&env, &config);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute an encrypted amount.
    ///
    /// `stated_amount` is the plaintext amount pulled from `contributor` to
    /// the treasury; it must lie within the campaign's bounds and must have
    /// been approved for this contract beforehand. `input` is the client-side
    /// encryption of the same amount, bound to this campaign and contributor.
    ///
    /// The oracle cannot contribute.
    ///
    /// Returns `true` for the contributor's first accepted contribution.
    pub fn contribute(
        env: Env,
        contributor: Address,
        input: EncryptedInput,
        stated_amount: u64,
    ) -> Result<bool, Error> {
        contributor.require_auth();
        let (config, mut state) = storage::load_campaign_pair(&env)?;
        if contributor == config.oracle {
            return Err(Error::InvalidPrincipal);
        }
        lifecycle::require_active(&env, &config, &state)?;

        if stated_amount < config.min_contribution || stated_amount > config.max_contribution {
            return Err(Error::ContributionOutOfBounds);
        }

        let amount = fhe::verify_input(&env, &config.coprocessor, &input, &contributor)?;
        payment::collect(&env, &config, &contributor, stated_amount)?;

        let credit = ledger::credit(&env, &config, &mut state, &contributor, &amount)?;
        acl::allow_contribution_record(&env, &config, &contributor, &credit.contributor_total);

        goal::recompute(&env, &config, &mut state);
        acl::allow_aggregate_values(
            &env,
            &config,
            state.total_raised.handle(),
            &state.goal_reached,
            Some(&contributor),
        );
        storage::save_state(&env, &state);

        events::emit_contribution_accepted(&env, contributor, credit.first_time);
        Ok(credit.first_time)
    }

    // ─────────────────────────────────────────────────────────
    // Goal evaluation
    // ─────────────────────────────────────────────────────────

    /// Re-run goal evaluation against the current aggregate.
    ///
    /// Open to anyone. Produces a fresh handle with the same meaning as the
    /// previous one when nothing changed in between.
    pub fn refresh_goal_status(env: Env) -> Result<EncryptedBool, Error> {
        let (config, mut state) = storage::load_campaign_pair(&env)?;
        let reached = goal::recompute(&env, &config, &mut state);
        acl::allow_aggregate(&env, &config, &reached.0, None);
        storage::save_state(&env, &state);
        Ok(reached)
    }

    /// Current cached goal status. Encrypted `false` before any contribution.
    pub fn get_goal_status(env: Env) -> Result<EncryptedBool, Error> {
        Ok(storage::load_state(&env)?.goal_reached)
    }

    // ─────────────────────────────────────────────────────────
    // Closing
    // ─────────────────────────────────────────────────────────

    /// Close the campaign for good once the deadline has passed.
    ///
    /// Open to anyone. Returns the final encrypted goal status.
    pub fn finalize(env: Env) -> Result<EncryptedBool, Error> {
        let (config, mut state) = storage::load_campaign_pair(&env)?;
        lifecycle::finalize(&env, &config, &mut state)?;
        // Re-extends the grants on the values the oracle will disclose.
        acl::allow_aggregate_values(
            &env,
            &config,
            state.total_raised.handle(),
            &state.goal_reached,
            None,
        );
        storage::save_state(&env, &state);

        events::emit_campaign_ended(&env, state.goal_reached.clone());
        Ok(state.goal_reached)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Full campaign view with the lifecycle derived from the current clock.
    pub fn get_campaign(env: Env) -> Result<Campaign, Error> {
        let (config, state) = storage::load_campaign_pair(&env)?;
        let lifecycle = lifecycle::current(&env, &config, &state);
        Ok(Campaign::from_parts(config, &state, lifecycle))
    }

    /// Plaintext funding goal.
    pub fn get_goal(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.goal)
    }

    /// Smallest accepted stated amount.
    pub fn get_min_contribution(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.min_contribution)
    }

    /// Largest accepted stated amount.
    pub fn get_max_contribution(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.max_contribution)
    }

    /// Ledger timestamp at which contributions stop.
    pub fn get_deadline(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.deadline)
    }

    /// Number of distinct contributors.
    pub fn get_contributor_count(env: Env) -> Result<u32, Error> {
        Ok(storage::load_state(&env)?.contributor_count)
    }

    /// Current campaign owner.
    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.owner)
    }

    /// Current decryption oracle.
    pub fn get_oracle(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.oracle)
    }

    /// Lifecycle state as of the current ledger time.
    pub fn get_lifecycle(env: Env) -> Result<LifecycleState, Error> {
        let (config, state) = storage::load_campaign_pair(&env)?;
        Ok(lifecycle::current(&env, &config, &state))
    }

    /// `true` while contributions are accepted.
    pub fn is_active(env: Env) -> Result<bool, Error> {
        Ok(Self::get_lifecycle(env)? == LifecycleState::Active)
    }

    /// `true` once `finalize` has succeeded.
    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(storage::load_state(&env)?.finalized)
    }

    /// Seconds left before the deadline, zero once it has passed.
    pub fn time_remaining(env: Env) -> Result<u64, Error> {
        let config = storage::load_config(&env)?;
        Ok(lifecycle::time_remaining(&env, &config))
    }

    /// `true` once the first contribution has been credited.
    pub fn is_aggregate_initialized(env: Env) -> Result<bool, Error> {
        Ok(storage::load_state(&env)?.total_raised.is_initialized())
    }

    /// `true` if `contributor` has at least one accepted contribution.
    pub fn has_contributed(env: Env, contributor: Address) -> bool {
        ledger::has_contributed(&env, &contributor)
    }

    /// Encrypted aggregate of all accepted contributions.
    ///
    /// Fails with `AggregateUninitialized` before the first contribution.
    pub fn get_total_raised(env: Env) -> Result<EncryptedAmount, Error> {
        let state = storage::load_state(&env)?;
        ledger::aggregate_total(&state)
    }

    /// Encrypted running total of `contributor`.
    pub fn get_contribution(env: Env, contributor: Address) -> Result<EncryptedAmount, Error> {
        ledger::contributor_total(&env, &contributor)
    }

    /// Whether `principal` may have `handle` decrypted by the oracle.
    pub fn is_allowed(env: Env, handle: BytesN<32>, principal: Address) -> bool {
        acl::is_allowed(&env, &handle, &principal)
    }
}
