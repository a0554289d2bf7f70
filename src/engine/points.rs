//! Stroke-points game: pairwise difference settlement.

use crate::engine::NetMap;
use crate::models::PlayerId;
use crate::money::Cents;
use std::collections::BTreeMap;

/// For every unordered pair the higher scorer collects the difference
/// times the per-point rate. Each transfer is rounded to a whole cent and
/// applied with opposite signs, so the output sums to exactly zero.
pub fn compute_points_game_net(scores: &BTreeMap<PlayerId, f64>, rate_cents: Cents) -> NetMap {
    let entries: Vec<(PlayerId, f64)> = scores.iter().map(|(&id, &s)| (id, s)).collect();
    let mut net: NetMap = entries.iter().map(|&(id, _)| (id, 0)).collect();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, score_a) = entries[i];
            let (b, score_b) = entries[j];
            let transfer = ((score_a - score_b) * rate_cents as f64).round() as Cents;
            *net.get_mut(&a).unwrap() += transfer;
            *net.get_mut(&b).unwrap() -= transfer;
        }
    }
    net
}
