use crate::models::player::PlayerId;
use crate::money::Cents;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One player's tallied score for one hole in the stroke-points game.
/// Scores arrive already tallied; the engine never re-derives them from
/// raw stroke entries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HoleScore {
    pub player_id: PlayerId,
    pub hole: u8,
    pub points: f64,
}

/// Per-hole bingo/bango/bongo winners. Each category names at most one
/// player; `None` means the category was not won on that hole.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryWinners {
    pub hole: u8,
    pub bingo: Option<PlayerId>,
    pub bango: Option<PlayerId>,
    pub bongo: Option<PlayerId>,
}

impl CategoryWinners {
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        [self.bingo, self.bango, self.bongo].into_iter().flatten()
    }
}

/// How category points turn into money: settled pairwise at a rate per
/// point, or as front/back/total pots.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PointsPayout {
    PerPoint { rate_cents: Cents },
    FrontBackTotal { pot_cents: Cents },
}

/// Pre-aggregated front/back/total score maps, the input shape of the
/// Nassau calculator.
#[derive(Clone, Debug, Default)]
pub struct SegmentScores {
    pub front: BTreeMap<PlayerId, f64>,
    pub back: BTreeMap<PlayerId, f64>,
    pub total: BTreeMap<PlayerId, f64>,
}
