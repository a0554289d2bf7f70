//! Settlement reducer: turns a balanced net map into the who-owes-who
//! transaction list.

use crate::constants::MIN_TRANSACTION_CENTS;
use crate::engine::NetMap;
use crate::error::FairwayError;
use crate::models::{PlayerId, Transaction};
use crate::money::Cents;
use log::{debug, error};

/// Greedy matching: repeatedly pair the largest remaining debtor with the
/// largest remaining creditor. At most `players - 1` transactions.
pub fn settle(net: &NetMap) -> Result<Vec<Transaction>, FairwayError> {
    let mut payers: Vec<(PlayerId, Cents)> = net
        .iter()
        .filter(|&(_, &v)| v < 0)
        .map(|(&id, &v)| (id, -v))
        .collect();
    let mut receivers: Vec<(PlayerId, Cents)> = net
        .iter()
        .filter(|&(_, &v)| v > 0)
        .map(|(&id, &v)| (id, v))
        .collect();

    // Stable sort keeps equal magnitudes in map order.
    payers.sort_by(|a, b| b.1.cmp(&a.1));
    receivers.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transactions = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < payers.len() && j < receivers.len() {
        let amount = payers[i].1.min(receivers[j].1);

        if amount >= MIN_TRANSACTION_CENTS {
            transactions.push(Transaction {
                from: payers[i].0,
                to: receivers[j].0,
                amount_cents: amount,
            });
        }

        payers[i].1 -= amount;
        receivers[j].1 -= amount;

        if payers[i].1 == 0 {
            i += 1;
        }
        if receivers[j].1 == 0 {
            j += 1;
        }
    }

    // With integer cents a leftover can only mean a non-zero-sum input.
    let leftover: Cents = payers[i..].iter().map(|p| p.1).sum::<Cents>()
        + receivers[j..].iter().map(|r| r.1).sum::<Cents>();
    if leftover != 0 {
        error!(
            "settlement left {} cents unmatched, net map: {:?}",
            leftover, net
        );
        return Err(FairwayError::InvariantViolation(format!(
            "{} cents left unmatched after settlement",
            leftover
        )));
    }

    debug!("settled {} player(s) in {} transaction(s)", net.len(), transactions.len());
    Ok(transactions)
}
