//! Canonical rounding for monetary amounts.

/// Round an amount to two fractional digits, half away from zero.
///
/// This is the single rounding rule for purchase amounts: it is applied when
/// a request is accepted, and again when a converted amount is derived, so
/// persisted, cached and returned representations always agree.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
