extern crate std;

use soroban_sdk::{
    symbol_short, testutils::Address as _, testutils::Events, vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{
    CampaignCreated, CampaignEnded, ContributionAccepted, DeadlineExtended, GoalUpdated,
};
use crate::testutils::*;
use crate::SECONDS_PER_DAY;

#[test]
fn test_campaign_created_event() {
    let h = setup_uninit();
    let campaign = h.client.init(&h.owner, &h.oracle, &h.fhe.address, &h.params());

    let all_events = h.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"),)
    assert_eq!(last_event.0, h.client.address);
    let expected_topics = vec![&h.env, symbol_short!("created").into_val(&h.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&h.env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            owner: h.owner.clone(),
            goal: GOAL,
            deadline: campaign.deadline,
        }
    );
}

#[test]
fn test_contribution_accepted_event() {
    let h = setup();
    let alice = Address::generate(&h.env);
    h.set_time(12_345);

    for first_time in [true, false] {
        h.contribute(&alice, 10_000_000);

        let all_events = h.env.events().all();
        let last_event = all_events.last().expect("No events found");

        // Topic: (symbol_short!("contrib"), contributor)
        assert_eq!(last_event.0, h.client.address);
        let expected_topics = vec![
            &h.env,
            symbol_short!("contrib").into_val(&h.env),
            alice.into_val(&h.env),
        ];
        assert_eq!(last_event.1, expected_topics);

        let event_data: ContributionAccepted = last_event.2.try_into_val(&h.env).unwrap();
        assert_eq!(
            event_data,
            ContributionAccepted {
                contributor: alice.clone(),
                first_time,
                timestamp: 12_345,
            }
        );
    }
}

#[test]
fn test_campaign_ended_event() {
    let h = setup();
    let end = h.deadline() + 1;
    h.set_time(end);
    let status = h.client.finalize();

    let all_events = h.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, h.client.address);
    let expected_topics = vec![&h.env, symbol_short!("ended").into_val(&h.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignEnded = last_event.2.try_into_val(&h.env).unwrap();
    assert_eq!(
        event_data,
        CampaignEnded {
            goal_reached: status,
            timestamp: end,
        }
    );
}

#[test]
fn test_refresh_after_finalize_matches_ended_event() {
    let h = setup();
    let alice = Address::generate(&h.env);
    h.contribute(&alice, GOAL);
    h.set_time(h.deadline());
    h.client.finalize();

    let all_events = h.env.events().all();
    let last_event = all_events.last().expect("No events found");
    let ended: CampaignEnded = last_event.2.try_into_val(&h.env).unwrap();

    let refreshed = h.client.refresh_goal_status();
    assert_ne!(refreshed, ended.goal_reached);
    assert!(h.client.is_finalized());
    assert_eq!(
        h.decrypt_bool(&h.oracle, &refreshed),
        h.decrypt_bool(&h.oracle, &ended.goal_reached)
    );
    assert_eq!(h.decrypt_bool(&h.oracle, &refreshed), Some(true));
}

#[test]
fn test_goal_updated_event() {
    let h = setup();
    h.client.update_goal(&h.owner, &2_000_000_000);

    let all_events = h.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&h.env, symbol_short!("goal_upd").into_val(&h.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: GoalUpdated = last_event.2.try_into_val(&h.env).unwrap();
    assert_eq!(
        event_data,
        GoalUpdated {
            old_goal: GOAL,
            new_goal: 2_000_000_000,
        }
    );
}

#[test]
fn test_deadline_extended_event() {
    let h = setup();
    let old_deadline = h.deadline();
    h.client.extend_deadline(&h.owner, &2);

    let all_events = h.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&h.env, symbol_short!("extended").into_val(&h.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DeadlineExtended = last_event.2.try_into_val(&h.env).unwrap();
    assert_eq!(
        event_data,
        DeadlineExtended {
            old_deadline,
            new_deadline: old_deadline + 2 * SECONDS_PER_DAY,
        }
    );
}

#[test]
fn test_allowed_events_only_for_fresh_grants() {
    let h = setup();
    let status = h.client.refresh_goal_status();

    let allowed = symbol_short!("allowed");
    let grants_for_status = h
        .env
        .events()
        .all()
        .iter()
        .filter(|event| {
            let topic: Option<soroban_sdk::Symbol> =
                event.1.get(0).and_then(|v| v.try_into_val(&h.env).ok());
            let handle: Option<soroban_sdk::BytesN<32>> = event.2.try_into_val(&h.env).ok();
            topic == Some(allowed.clone()) && handle == Some(status.0.clone())
        })
        .count();

    // Campaign, owner and oracle.
    assert_eq!(grants_for_status, 3);
}
