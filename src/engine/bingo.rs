//! Bingo-Bango-Bongo category tallies.
//!
//! Each hole awards up to three points, one per category (first on the
//! green, closest to the pin once all balls are on, first to hole out).
//! The tally only counts wins; turning points into money is the job of
//! the pairwise or Nassau calculator, selected by the session's payout
//! mode.

use crate::constants::FRONT_NINE_LAST_HOLE;
use crate::models::{CategoryWinners, PlayerId, SegmentScores};

/// Tallies per-hole category winners into front/back/total point maps.
/// A `None` category on a hole awards nothing. Every roster player is
/// present in each map, at zero if they won no categories, so downstream
/// pot splits see the full field.
pub fn tally_category_winners(
    players: &[PlayerId],
    holes: &[CategoryWinners],
) -> SegmentScores {
    let mut tally = SegmentScores::default();
    for &player in players {
        tally.front.insert(player, 0.0);
        tally.back.insert(player, 0.0);
        tally.total.insert(player, 0.0);
    }

    for hole in holes {
        for winner in hole.winners() {
            let segment = if hole.hole <= FRONT_NINE_LAST_HOLE {
                &mut tally.front
            } else {
                &mut tally.back
            };
            *segment.entry(winner).or_insert(0.0) += 1.0;
            *tally.total.entry(winner).or_insert(0.0) += 1.0;
        }
    }
    tally
}
