use crate::money::{cents_from_dollars, dollars_from_cents, split_evenly, Cents};

#[test]
fn split_evenly_sums_to_total() {
    for total in [0, 1, 99, 100, 101, 1100] {
        for n in 1..=6 {
            let shares = split_evenly(total, n);
            assert_eq!(shares.len(), n);
            assert_eq!(shares.iter().sum::<Cents>(), total);
            let min = shares.iter().min().unwrap();
            let max = shares.iter().max().unwrap();
            assert!(max - min <= 1, "shares differ by more than a cent");
        }
    }
}

#[test]
fn split_evenly_puts_remainder_on_trailing_shares() {
    assert_eq!(split_evenly(100, 3), vec![33, 33, 34]);
    assert_eq!(split_evenly(1100, 2), vec![550, 550]);
}

#[test]
fn split_evenly_with_no_participants_is_empty() {
    assert!(split_evenly(500, 0).is_empty());
}

#[test]
fn dollar_conversions_round_to_the_nearest_cent() {
    assert_eq!(cents_from_dollars(5.5), 550);
    assert_eq!(cents_from_dollars(0.015), 2);
    assert_eq!(dollars_from_cents(-900), -9.0);
    assert_eq!(dollars_from_cents(550), 5.5);
}
