//! Currency unit conversion.
//!
//! The payment provider accepts amounts only as integers in the smallest
//! currency unit (cents for USD). Prices are stored that way too; the major
//! conversion exists for display and for ingesting legacy fixture data that
//! carries decimal prices.

/// Converts a major-unit amount (e.g. `25.00` dollars) to minor units (`2500`).
///
/// Rounds to the nearest cent, so `40.995` becomes `4100`.
#[must_use]
pub fn to_minor_units(amount_major: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (amount_major * 100.0).round() as i64
    }
}

/// Converts minor units back to a major-unit amount for display.
#[must_use]
pub fn from_minor_units(amount_minor: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        amount_minor as f64 / 100.0
    }
}
