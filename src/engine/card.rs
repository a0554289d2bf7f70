//! Penalty-card game: everyone pays their excess over the minimum debt
//! into a pot, which the baseline players split.

use crate::engine::NetMap;
use crate::error::FairwayError;
use crate::models::{CardAssignment, CardValues, PenaltyCard, PlayerId};
use crate::money::{split_evenly, Cents};
use log::debug;
use std::collections::HashMap;

/// Builds the per-player debt map from the assignment history. Only the
/// latest assignment per card counts; every roster player appears, with
/// zero debt if they hold nothing.
pub fn debts_from_assignments(
    players: &[PlayerId],
    deck: &[PenaltyCard],
    assignments: &[CardAssignment],
    values: &CardValues,
) -> Result<NetMap, FairwayError> {
    let kinds: HashMap<_, _> = deck.iter().map(|c| (c.id, &c.kind)).collect();

    // Last write wins per card; assignments are in recording order.
    let mut holder: HashMap<uuid::Uuid, PlayerId> = HashMap::new();
    for assignment in assignments {
        if !kinds.contains_key(&assignment.card_id) {
            return Err(FairwayError::CardNotInSession(assignment.card_id.to_string()));
        }
        holder.insert(assignment.card_id, assignment.player_id);
    }

    let mut debts: NetMap = players.iter().map(|&id| (id, 0)).collect();
    for (card_id, player_id) in &holder {
        let value = values.value_of(kinds[card_id])?;
        let debt = debts
            .get_mut(player_id)
            .ok_or_else(|| FairwayError::PlayerNotInRoster(player_id.to_string()))?;
        *debt += value;
    }
    Ok(debts)
}

/// Baseline players (those at the minimum debt) split the total excess
/// evenly; everyone else owes exactly their excess. All tied means zero
/// excess and all-zero nets.
pub fn compute_card_game_net(debts: &NetMap) -> NetMap {
    let Some(min_debt) = debts.values().copied().min() else {
        return NetMap::new();
    };

    let total_excess: Cents = debts.values().map(|&d| (d - min_debt).max(0)).sum();
    let baseline_count = debts.values().filter(|&&d| d == min_debt).count();
    debug!(
        "card game: min debt {} cents, pot {} cents, {} baseline player(s)",
        min_debt, total_excess, baseline_count
    );

    let shares = split_evenly(total_excess, baseline_count);
    let mut net = NetMap::new();
    let mut share_iter = shares.into_iter();
    for (&player, &debt) in debts {
        if debt == min_debt {
            // split_evenly puts the remainder on the trailing shares.
            net.insert(player, share_iter.next().unwrap_or(0));
        } else {
            net.insert(player, -(debt - min_debt));
        }
    }
    net
}
