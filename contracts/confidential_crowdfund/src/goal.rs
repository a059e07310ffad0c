//! # Goal evaluation
//!
//! Caches `total_raised >= goal` as an encrypted boolean. The cache is
//! recomputed after every accepted contribution, every goal update, and on
//! demand. Each run produces a fresh handle even when the underlying answer
//! is unchanged.

use soroban_sdk::Env;

use crate::fhe::CoprocessorClient;
use crate::types::{CampaignConfig, CampaignState, EncryptedAmount, EncryptedBool};

/// Evaluate the goal against `total`.
///
/// With no contributions yet the answer is an encrypted `false`: nothing
/// raised cannot meet a positive goal.
pub fn evaluate(
    env: &Env,
    config: &CampaignConfig,
    total: Option<&EncryptedAmount>,
) -> EncryptedBool {
    let fhe = CoprocessorClient::new(env, &config.coprocessor);
    match total {
        None => fhe.encode_bool(&false),
        Some(total) => {
            let goal = fhe.encode_amount(&config.goal);
            fhe.ge(total, &goal)
        }
    }
}

/// Recompute the cached goal status in `state` and return the new handle.
pub fn recompute(env: &Env, config: &CampaignConfig, state: &mut CampaignState) -> EncryptedBool {
    let reached = evaluate(env, config, state.total_raised.handle());
    state.goal_reached = reached.clone();
    reached
}
