use crate::models::card::{CardValues, PenaltyCard};
use crate::models::player::Player;
use crate::models::scoring::PointsPayout;
use crate::money::Cents;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Cards,
    Points,
    Nassau,
    BingoBangoBongo,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameKind::Cards => "cards",
            GameKind::Points => "points",
            GameKind::Nassau => "nassau",
            GameKind::BingoBangoBongo => "bingo_bango_bongo",
        };
        write!(f, "{}", s)
    }
}

/// Stakes for every game a session may run. Passed in explicitly at
/// session creation; the engine has no built-in pricing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionStakes {
    pub card_values: CardValues,
    /// Dollar-per-point rate for the stroke-points game, in cents.
    pub points_rate_cents: Cents,
    /// Pot per Nassau segment, in cents.
    pub nassau_pot_cents: Cents,
    pub bbb_payout: PointsPayout,
}

/// One round of golf for a group, with the side games it is running.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
    pub active_games: Vec<GameKind>,
    pub deck: Vec<PenaltyCard>,
    pub stakes: SessionStakes,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn has_game(&self, game: GameKind) -> bool {
        self.active_games.contains(&game)
    }
}
