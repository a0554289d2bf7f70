//! Money is carried as scaled-integer cents everywhere inside the engine.
//! Dollars (`f64`) exist only at the serialization boundary.

/// Signed amount in cents.
pub type Cents = i64;

/// Converts a dollar amount to cents, rounding half away from zero.
pub fn cents_from_dollars(dollars: f64) -> Cents {
    (dollars * 100.0).round() as Cents
}

/// Converts cents back to dollars for client display.
pub fn dollars_from_cents(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Splits `total` into `n` shares differing by at most one cent and
/// summing to exactly `total`. Empty for `n == 0`.
pub fn split_evenly(total: Cents, n: usize) -> Vec<Cents> {
    if n == 0 {
        return Vec::new();
    }
    let n_i64 = n as i64;
    let base = total.div_euclid(n_i64);
    let remainder = total.rem_euclid(n_i64);
    // rem_euclid is in 0..n; the last `remainder` shares get one extra cent.
    (0..n_i64)
        .map(|i| if i >= n_i64 - remainder { base + 1 } else { base })
        .collect()
}
