use crate::models::player::PlayerId;
use crate::money::Cents;
use serde::{Deserialize, Serialize};

/// One payment leg: `from` pays `to`. Amount is always positive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub from: PlayerId,
    pub to: PlayerId,
    pub amount_cents: Cents,
}

/// A player's signed balance after combining all games; positive means
/// they are owed money.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetPosition {
    pub player_id: PlayerId,
    pub player_name: String,
    pub amount_cents: Cents,
}

/// The full settlement for a session: per-player nets plus the minimal
/// who-owes-who list. Recomputed from stored game state on every request;
/// never a source of truth.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettlementReport {
    pub session_id: String,
    pub nets: Vec<NetPosition>,
    pub transactions: Vec<Transaction>,
}
