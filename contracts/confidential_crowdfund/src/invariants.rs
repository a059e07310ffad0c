#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, LifecycleState};

/// Contribution bounds are positive and ordered.
pub fn assert_limits_valid(campaign: &Campaign) {
    assert!(
        campaign.min_contribution > 0,
        "zero minimum contribution"
    );
    assert!(
        campaign.min_contribution <= campaign.max_contribution,
        "min {} above max {}",
        campaign.min_contribution,
        campaign.max_contribution
    );
}

/// The goal is always positive.
pub fn assert_goal_positive(campaign: &Campaign) {
    assert!(campaign.goal > 0, "zero goal");
}

/// The aggregate exists exactly when someone has contributed.
pub fn assert_aggregate_tracks_contributors(campaign: &Campaign) {
    assert_eq!(
        campaign.aggregate_initialized,
        campaign.contributor_count > 0,
        "aggregate_initialized={} with {} contributors",
        campaign.aggregate_initialized,
        campaign.contributor_count
    );
}

/// The contributor counter moves by one on a first contribution and
/// not at all otherwise.
pub fn assert_count_step(before: u32, after: u32, first_time: bool) {
    let expected = if first_time { before + 1 } else { before };
    assert_eq!(
        after, expected,
        "count {} -> {} with first_time={}",
        before, after, first_time
    );
}

/// Lifecycle transitions. `Finalized` is terminal; `Expired` can
/// only go back to `Active` through a deadline extension.
pub fn assert_valid_lifecycle_transition(from: &LifecycleState, to: &LifecycleState) {
    let valid = from == to
        || matches!(
            (from, to),
            (LifecycleState::Active, LifecycleState::Expired)
                | (LifecycleState::Active, LifecycleState::Finalized)
                | (LifecycleState::Expired, LifecycleState::Finalized)
                | (LifecycleState::Expired, LifecycleState::Active)
        );

    assert!(
        valid,
        "invalid lifecycle transition from {:?} to {:?}",
        from, to
    );
}

/// The deadline never moves backwards.
pub fn assert_deadline_not_shortened(before: &Campaign, after: &Campaign) {
    assert!(
        after.deadline >= before.deadline,
        "deadline shortened from {} to {}",
        before.deadline,
        after.deadline
    );
}

/// Contributions never touch the configuration.
pub fn assert_config_unchanged(original: &Campaign, current: &Campaign) {
    assert_eq!(original.owner, current.owner, "owner changed");
    assert_eq!(original.oracle, current.oracle, "oracle changed");
    assert_eq!(original.asset, current.asset, "asset changed");
    assert_eq!(
        original.treasury, current.treasury,
        "treasury changed"
    );
    assert_eq!(original.goal, current.goal, "goal changed");
    assert_eq!(
        original.min_contribution, current.min_contribution,
        "min_contribution changed"
    );
    assert_eq!(
        original.max_contribution, current.max_contribution,
        "max_contribution changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "deadline changed"
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_limits_valid(campaign);
    assert_goal_positive(campaign);
    assert_aggregate_tracks_contributors(campaign);
}
