//! Pure settlement math. Every function here is synchronous, stateless,
//! and deterministic: identical inputs always produce identical outputs.
//! Net maps are `BTreeMap` keyed by player id so iteration order (and with
//! it reconciliation targets and tie-breaks) never depends on hash seeds.

pub mod bingo;
pub mod card;
pub mod combine;
pub mod nassau;
pub mod points;
pub mod settle;

pub use bingo::tally_category_winners;
pub use card::{compute_card_game_net, debts_from_assignments};
pub use combine::combine_nets;
pub use nassau::compute_fbt_game_net;
pub use points::compute_points_game_net;
pub use settle::settle;

use crate::models::PlayerId;
use crate::money::Cents;
use std::collections::BTreeMap;

/// Signed per-player balance in cents. Each calculator returns one of
/// these summing to exactly zero.
pub type NetMap = BTreeMap<PlayerId, Cents>;
