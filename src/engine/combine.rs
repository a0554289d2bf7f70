//! Ledger combiner: folds per-game net maps into one ledger per player.

use crate::constants::COMBINE_TOLERANCE_CENTS;
use crate::engine::NetMap;
use crate::error::FairwayError;
use crate::money::Cents;
use log::{debug, error};

/// Merges per-game net maps into one ledger. A residual under the
/// tolerance is reconciled against the largest-magnitude entry; at or past
/// the tolerance an upstream calculator is broken and the settlement
/// aborts.
pub fn combine_nets(nets: &[NetMap]) -> Result<NetMap, FairwayError> {
    let mut combined = NetMap::new();
    for net in nets {
        for (&player, &amount) in net {
            *combined.entry(player).or_insert(0) += amount;
        }
    }

    let residual: Cents = combined.values().sum();
    if residual.abs() >= COMBINE_TOLERANCE_CENTS {
        error!(
            "combined ledger off by {} cents, inputs: {:?}, combined: {:?}",
            residual, nets, combined
        );
        return Err(FairwayError::InvariantViolation(format!(
            "combined net map sums to {} cents across {} game(s)",
            residual,
            nets.len()
        )));
    }

    if residual != 0 {
        // First-in-order among equal magnitudes keeps this deterministic.
        let mut target = None;
        let mut best: Cents = -1;
        for (&player, &amount) in &combined {
            if amount.abs() > best {
                best = amount.abs();
                target = Some(player);
            }
        }
        if let Some(player) = target {
            debug!(
                "reconciling {} cent residual against player {}",
                residual, player
            );
            *combined.get_mut(&player).unwrap() -= residual;
        }
    }
    Ok(combined)
}
