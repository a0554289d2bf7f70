//! Nassau: independent front, back, and total pots.

use crate::engine::NetMap;
use crate::models::{PlayerId, SegmentScores};
use crate::money::{split_evenly, Cents};
use log::debug;
use std::collections::BTreeMap;

/// Each segment's pot is split evenly among the top scorers and funded
/// evenly by everyone else. A segment where every player ties moves no
/// money.
pub fn compute_fbt_game_net(segments: &SegmentScores, pot_cents: Cents) -> NetMap {
    let mut net = NetMap::new();
    for (name, scores) in [
        ("front", &segments.front),
        ("back", &segments.back),
        ("total", &segments.total),
    ] {
        apply_segment(&mut net, name, scores, pot_cents);
    }
    net
}

fn apply_segment(
    net: &mut NetMap,
    name: &str,
    scores: &BTreeMap<PlayerId, f64>,
    pot_cents: Cents,
) {
    for &player in scores.keys() {
        net.entry(player).or_insert(0);
    }

    let Some(best) = scores.values().copied().reduce(f64::max) else {
        return;
    };

    let winners: Vec<PlayerId> = scores
        .iter()
        .filter(|&(_, &s)| s == best)
        .map(|(&id, _)| id)
        .collect();
    let losers: Vec<PlayerId> = scores
        .iter()
        .filter(|&(_, &s)| s != best)
        .map(|(&id, _)| id)
        .collect();

    if losers.is_empty() {
        debug!("nassau segment {}: all players tied, no transfer", name);
        return;
    }

    for (player, share) in winners.iter().zip(split_evenly(pot_cents, winners.len())) {
        *net.entry(*player).or_insert(0) += share;
    }
    for (player, share) in losers.iter().zip(split_evenly(pot_cents, losers.len())) {
        *net.entry(*player).or_insert(0) -= share;
    }
}
