use crate::engine::{compute_fbt_game_net, tally_category_winners};
use crate::models::{CategoryWinners, PlayerId, SegmentScores};
use crate::money::Cents;
use crate::tests::pid;
use std::collections::BTreeMap;

fn segment(entries: &[(u128, f64)]) -> BTreeMap<PlayerId, f64> {
    entries.iter().map(|&(n, s)| (pid(n), s)).collect()
}

#[test]
fn winner_takes_the_pot_from_the_field() {
    // One front winner over two losers, $10 pot per segment; back and
    // total all tied.
    let segments = SegmentScores {
        front: segment(&[(1, 20.0), (2, 15.0), (3, 12.0)]),
        back: segment(&[(1, 10.0), (2, 10.0), (3, 10.0)]),
        total: segment(&[(1, 30.0), (2, 30.0), (3, 30.0)]),
    };
    let net = compute_fbt_game_net(&segments, 1000);
    assert_eq!(net[&pid(1)], 1000);
    assert_eq!(net[&pid(2)], -500);
    assert_eq!(net[&pid(3)], -500);
    assert_eq!(net.values().sum::<Cents>(), 0);
}

#[test]
fn tied_winners_split_the_pot() {
    let segments = SegmentScores {
        front: segment(&[(1, 20.0), (2, 20.0), (3, 12.0), (4, 11.0)]),
        ..SegmentScores::default()
    };
    let net = compute_fbt_game_net(&segments, 1000);
    assert_eq!(net[&pid(1)], 500);
    assert_eq!(net[&pid(2)], 500);
    assert_eq!(net[&pid(3)], -500);
    assert_eq!(net[&pid(4)], -500);
}

#[test]
fn all_tied_segment_contributes_nothing() {
    let segments = SegmentScores {
        front: segment(&[(1, 9.0), (2, 9.0), (3, 9.0)]),
        back: segment(&[(1, 9.0), (2, 9.0), (3, 9.0)]),
        total: segment(&[(1, 18.0), (2, 18.0), (3, 18.0)]),
    };
    let net = compute_fbt_game_net(&segments, 1000);
    assert!(net.values().all(|&v| v == 0));
}

#[test]
fn uneven_loser_split_still_balances_the_segment() {
    // $10 pot funded by three losers: 333/333/334.
    let segments = SegmentScores {
        front: segment(&[(1, 20.0), (2, 5.0), (3, 4.0), (4, 3.0)]),
        ..SegmentScores::default()
    };
    let net = compute_fbt_game_net(&segments, 1000);
    assert_eq!(net[&pid(1)], 1000);
    assert_eq!(net.values().sum::<Cents>(), 0);
    let debits: Vec<Cents> = [2, 3, 4].iter().map(|&n| -net[&pid(n)]).collect();
    assert_eq!(debits.iter().sum::<Cents>(), 1000);
    assert!(debits.iter().all(|&d| d == 333 || d == 334));
}

#[test]
fn three_segments_accumulate_per_player() {
    let segments = SegmentScores {
        front: segment(&[(1, 5.0), (2, 3.0)]),
        back: segment(&[(1, 2.0), (2, 6.0)]),
        total: segment(&[(1, 7.0), (2, 9.0)]),
    };
    let net = compute_fbt_game_net(&segments, 500);
    // Player 1 wins front, player 2 wins back and total.
    assert_eq!(net[&pid(1)], 500 - 500 - 500);
    assert_eq!(net[&pid(2)], -500 + 500 + 500);
}

#[test]
fn empty_segments_yield_an_empty_map() {
    assert!(compute_fbt_game_net(&SegmentScores::default(), 1000).is_empty());
}

#[test]
fn category_tally_splits_front_and_back_and_ignores_none() {
    let players = [pid(1), pid(2), pid(3)];
    let holes = vec![
        CategoryWinners {
            hole: 1,
            bingo: Some(pid(1)),
            bango: Some(pid(2)),
            bongo: None,
        },
        CategoryWinners {
            hole: 9,
            bingo: Some(pid(1)),
            bango: None,
            bongo: Some(pid(1)),
        },
        CategoryWinners {
            hole: 10,
            bingo: Some(pid(2)),
            bango: Some(pid(2)),
            bongo: Some(pid(1)),
        },
    ];

    let tally = tally_category_winners(&players, &holes);
    assert_eq!(tally.front[&pid(1)], 3.0);
    assert_eq!(tally.front[&pid(2)], 1.0);
    assert_eq!(tally.back[&pid(1)], 1.0);
    assert_eq!(tally.back[&pid(2)], 2.0);
    assert_eq!(tally.total[&pid(1)], 4.0);
    assert_eq!(tally.total[&pid(2)], 3.0);
    // Roster players with no wins are present at zero.
    assert_eq!(tally.total[&pid(3)], 0.0);
}
