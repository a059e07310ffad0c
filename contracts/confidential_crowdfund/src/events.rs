use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::EncryptedBool;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub owner: Address,
    pub goal: u64,
    pub deadline: u64,
}

/// Amounts are confidential; only who, whether first-time, and when.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionAccepted {
    pub contributor: Address,
    pub first_time: bool,
    pub timestamp: u64,
}

/// The goal-met flag is the encrypted cache; the oracle discloses it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignEnded {
    pub goal_reached: EncryptedBool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalUpdated {
    pub old_goal: u64,
    pub new_goal: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeadlineExtended {
    pub old_deadline: u64,
    pub new_deadline: u64,
}

pub fn emit_campaign_created(env: &Env, owner: Address, goal: u64, deadline: u64) {
    let topics = (symbol_short!("created"),);
    let data = CampaignCreated {
        owner,
        goal,
        deadline,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution_accepted(env: &Env, contributor: Address, first_time: bool) {
    let topics = (symbol_short!("contrib"), contributor.clone());
    let data = ContributionAccepted {
        contributor,
        first_time,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_ended(env: &Env, goal_reached: EncryptedBool) {
    let topics = (symbol_short!("ended"),);
    let data = CampaignEnded {
        goal_reached,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn emit_goal_updated(env: &Env, old_goal: u64, new_goal: u64) {
    let topics = (symbol_short!("goal_upd"),);
    let data = GoalUpdated { old_goal, new_goal };
    env.events().publish(topics, data);
}

pub fn emit_deadline_extended(env: &Env, old_deadline: u64, new_deadline: u64) {
    let topics = (symbol_short!("extended"),);
    let data = DeadlineExtended {
        old_deadline,
        new_deadline,
    };
    env.events().publish(topics, data);
}
