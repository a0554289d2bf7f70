use crate::engine::compute_points_game_net;
use crate::models::PlayerId;
use crate::money::Cents;
use crate::tests::pid;
use std::collections::BTreeMap;

fn scores(entries: &[(u128, f64)]) -> BTreeMap<PlayerId, f64> {
    entries.iter().map(|&(n, s)| (pid(n), s)).collect()
}

#[test]
fn two_players_settle_the_difference_at_the_rate() {
    // A:10, B:4 at $1/point: six points across.
    let net = compute_points_game_net(&scores(&[(1, 10.0), (2, 4.0)]), 100);
    assert_eq!(net[&pid(1)], 600);
    assert_eq!(net[&pid(2)], -600);
}

#[test]
fn every_unordered_pair_is_settled_once() {
    // A:5, B:3, C:1 at $2/point.
    // A collects 2*200 from B and 4*200 from C; B collects 2*200 from C.
    let net = compute_points_game_net(&scores(&[(1, 5.0), (2, 3.0), (3, 1.0)]), 200);
    assert_eq!(net[&pid(1)], 1200);
    assert_eq!(net[&pid(2)], 0);
    assert_eq!(net[&pid(3)], -1200);
    assert_eq!(net.values().sum::<Cents>(), 0);
}

#[test]
fn fractional_scores_are_supported() {
    // Half-point spreads show up in some point tables.
    let net = compute_points_game_net(&scores(&[(1, 2.0), (2, 1.5), (3, 1.5), (4, 9.0)]), 100);
    assert_eq!(net.values().sum::<Cents>(), 0);
    assert_eq!(net[&pid(4)], 2200); // (7 + 7.5 + 7.5) points collected
}

#[test]
fn tied_scores_move_no_money() {
    let net = compute_points_game_net(&scores(&[(1, 4.0), (2, 4.0), (3, 4.0)]), 100);
    assert!(net.values().all(|&v| v == 0));
}

#[test]
fn single_player_and_empty_inputs_are_degenerate_not_errors() {
    assert_eq!(compute_points_game_net(&scores(&[(1, 7.0)]), 100)[&pid(1)], 0);
    assert!(compute_points_game_net(&scores(&[]), 100).is_empty());
}

#[test]
fn recomputation_is_deterministic() {
    let input = scores(&[(1, 5.0), (2, 3.0), (3, 1.0), (4, 8.0)]);
    let first = compute_points_game_net(&input, 150);
    let second = compute_points_game_net(&input, 150);
    assert_eq!(first, second);
}
