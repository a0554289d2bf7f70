use crate::engine::{compute_card_game_net, debts_from_assignments, NetMap};
use crate::error::FairwayError;
use crate::models::{CardAssignment, CardKind, CardValues, PenaltyCard, StandardCard};
use crate::money::Cents;
use crate::tests::pid;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

fn debts(entries: &[(u128, Cents)]) -> NetMap {
    entries.iter().map(|&(n, d)| (pid(n), d)).collect()
}

#[test]
fn worked_scenario_from_the_group_ledger() {
    // Debts A:$11, B:$2, C:$4, D:$2. Baseline is B and D at $2; the $11
    // pot splits $5.50 each.
    let net = compute_card_game_net(&debts(&[(1, 1100), (2, 200), (3, 400), (4, 200)]));
    assert_eq!(net[&pid(1)], -900);
    assert_eq!(net[&pid(2)], 550);
    assert_eq!(net[&pid(3)], -200);
    assert_eq!(net[&pid(4)], 550);
    assert_eq!(net.values().sum::<Cents>(), 0);
}

#[test]
fn single_clean_player_collects_the_whole_pot() {
    let net = compute_card_game_net(&debts(&[(1, 0), (2, 500), (3, 500), (4, 500)]));
    assert_eq!(net[&pid(1)], 1500);
    assert_eq!(net[&pid(2)], -500);
    assert_eq!(net.values().sum::<Cents>(), 0);
}

#[test]
fn all_players_tied_means_no_money_moves() {
    let net = compute_card_game_net(&debts(&[(1, 500), (2, 500), (3, 500), (4, 500)]));
    assert!(net.values().all(|&v| v == 0));
}

#[test]
fn empty_roster_yields_empty_map() {
    assert!(compute_card_game_net(&NetMap::new()).is_empty());
}

#[test]
fn uneven_pot_split_still_sums_to_zero() {
    // $1.00 of excess split across three baseline players leaves a
    // residual cent on the last of them.
    let net = compute_card_game_net(&debts(&[(1, 0), (2, 0), (3, 0), (4, 100)]));
    assert_eq!(net[&pid(1)], 33);
    assert_eq!(net[&pid(2)], 33);
    assert_eq!(net[&pid(3)], 34);
    assert_eq!(net[&pid(4)], -100);
    assert_eq!(net.values().sum::<Cents>(), 0);
}

#[test]
fn reassignment_moves_liability_to_the_new_holder() {
    let card = PenaltyCard {
        id: Uuid::from_u128(100),
        kind: CardKind::Standard {
            card: StandardCard::Snake,
        },
    };
    let values = CardValues::new(
        HashMap::from([(StandardCard::Snake, 300)]),
        HashMap::new(),
    );
    let players = vec![pid(1), pid(2)];
    let assignments = vec![
        CardAssignment {
            card_id: card.id,
            player_id: pid(1),
            hole: 3,
            assigned_at: Utc::now(),
        },
        CardAssignment {
            card_id: card.id,
            player_id: pid(2),
            hole: 7,
            assigned_at: Utc::now(),
        },
    ];

    let debts =
        debts_from_assignments(&players, std::slice::from_ref(&card), &assignments, &values)
            .unwrap();
    assert_eq!(debts[&pid(1)], 0, "prior holder's liability is discarded");
    assert_eq!(debts[&pid(2)], 300);
}

#[test]
fn custom_cards_resolve_through_the_value_table() {
    let card = PenaltyCard {
        id: Uuid::from_u128(100),
        kind: CardKind::Custom {
            name: "shank".to_string(),
        },
    };
    let values = CardValues::new(HashMap::new(), HashMap::from([("shank".to_string(), 250)]));
    let assignments = vec![CardAssignment {
        card_id: card.id,
        player_id: pid(1),
        hole: 1,
        assigned_at: Utc::now(),
    }];

    let debts = debts_from_assignments(
        &[pid(1)],
        std::slice::from_ref(&card),
        &assignments,
        &values,
    )
    .unwrap();
    assert_eq!(debts[&pid(1)], 250);
}

#[test]
fn unknown_custom_card_is_a_reference_error() {
    let card = PenaltyCard {
        id: Uuid::from_u128(100),
        kind: CardKind::Custom {
            name: "gimme".to_string(),
        },
    };
    let values = CardValues::new(HashMap::new(), HashMap::new());
    let assignments = vec![CardAssignment {
        card_id: card.id,
        player_id: pid(1),
        hole: 1,
        assigned_at: Utc::now(),
    }];

    let result = debts_from_assignments(
        &[pid(1)],
        std::slice::from_ref(&card),
        &assignments,
        &values,
    );
    assert!(matches!(result, Err(FairwayError::UnknownCustomCard(_))));
}

#[test]
fn assignment_of_a_foreign_card_is_rejected() {
    let values = CardValues::default();
    let assignments = vec![CardAssignment {
        card_id: Uuid::from_u128(999),
        player_id: pid(1),
        hole: 1,
        assigned_at: Utc::now(),
    }];

    let result = debts_from_assignments(&[pid(1)], &[], &assignments, &values);
    assert!(matches!(result, Err(FairwayError::CardNotInSession(_))));
}
