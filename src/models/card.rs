use crate::error::FairwayError;
use crate::models::player::PlayerId;
use crate::money::Cents;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// The well-known trash cards every group plays with.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StandardCard {
    /// Three-putt
    Snake,
    /// Bunker shot
    Camel,
    /// Ball in the water
    Frog,
    /// Hit a tree
    Woody,
}

impl std::fmt::Display for StandardCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StandardCard::Snake => "snake",
            StandardCard::Camel => "camel",
            StandardCard::Frog => "frog",
            StandardCard::Woody => "woody",
        };
        write!(f, "{}", s)
    }
}

/// A card is either one of the standard types or a group-defined custom
/// card identified by name. Both resolve to a penalty value through
/// [`CardValues::value_of`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    Standard { card: StandardCard },
    Custom { name: String },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PenaltyCard {
    pub id: Uuid,
    pub kind: CardKind,
}

/// One hand-off of a card to a player. Only the latest assignment per card
/// counts toward debt; reassignment discards the prior holder's liability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardAssignment {
    pub card_id: Uuid,
    pub player_id: PlayerId,
    pub hole: u8,
    pub assigned_at: DateTime<Utc>,
}

/// Penalty values per card, supplied by the caller when the session is
/// created. There is deliberately no global pricing table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardValues {
    standard: HashMap<StandardCard, Cents>,
    custom: HashMap<String, Cents>,
}

impl CardValues {
    pub fn new(standard: HashMap<StandardCard, Cents>, custom: HashMap<String, Cents>) -> Self {
        CardValues { standard, custom }
    }

    /// Resolves a card to its penalty value in cents.
    pub fn value_of(&self, kind: &CardKind) -> Result<Cents, FairwayError> {
        match kind {
            CardKind::Standard { card } => self
                .standard
                .get(card)
                .copied()
                .ok_or_else(|| FairwayError::UnknownStandardCard(card.to_string())),
            CardKind::Custom { name } => self
                .custom
                .get(name)
                .copied()
                .ok_or_else(|| FairwayError::UnknownCustomCard(name.clone())),
        }
    }
}

impl Default for CardValues {
    /// A typical table: every standard card costs a dollar, no customs.
    fn default() -> Self {
        let standard = [
            (StandardCard::Snake, 100),
            (StandardCard::Camel, 100),
            (StandardCard::Frog, 100),
            (StandardCard::Woody, 100),
        ]
        .into_iter()
        .collect();
        CardValues {
            standard,
            custom: HashMap::new(),
        }
    }
}
