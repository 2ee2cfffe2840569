//! # Money Module
//!
//! Rounding rules and rate types for monetary report fields.
//!
//! ## Why Floats Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ACCUMULATE RAW, ROUND ONCE                                             │
//! │                                                                         │
//! │  Revenue and bonus policies are caller-supplied numeric functions,      │
//! │  and a discounted line (e.g. 3 × 9.99 at 7%) is not a whole number of   │
//! │  cents. Rounding every line would drift the seller totals.              │
//! │                                                                         │
//! │  So aggregates stay f64 while the fold runs, and the Projector rounds   │
//! │  revenue, profit and bonus to cents exactly once.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::money::{round_to_cents, BonusRate};
//!
//! assert_eq!(round_to_cents(10.004), 10.0);
//! assert_eq!(round_to_cents(2.675), 2.67);  // stored as 2.67499999...
//! assert_eq!(round_to_cents(0.125), 0.13);  // exact tie, away from zero
//!
//! let rate = BonusRate::from_bps(1500); // 15%
//! assert_eq!(rate.apply(200.0), 30.0);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Basis points in one whole (100%).
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds an amount to two decimal places.
///
/// Rounding works on the exact binary value of `amount`, not on its shortest
/// decimal spelling: `2.675` is stored as `2.67499999...` and becomes `2.67`.
/// Exact halves (`0.125`) round away from zero. A result of negative zero is
/// normalised to `0.0` so it serializes as `0.0`.
///
/// Non-finite amounts and magnitudes beyond `Decimal` range come back
/// unchanged; at that size an `f64` has no fractional digits anyway.
pub fn round_to_cents(amount: f64) -> f64 {
    let rounded = Decimal::from_f64_retain(amount)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .map(|cents| cents.mantissa() as f64 / 10f64.powi(cents.scale() as i32))
        .unwrap_or(amount);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

// =============================================================================
// Bonus Rate
// =============================================================================

/// Bonus rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1500 bps = 15%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusRate(u32);

impl BonusRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        BonusRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction of one (1500 bps → 0.15).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / BPS_SCALE as f64
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        BonusRate(0)
    }

    /// Applies the rate to an amount.
    ///
    /// The fraction is computed first so `from_bps(1500).apply(x)` is exactly
    /// `x * 0.15`.
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.fraction()
    }
}

impl Default for BonusRate {
    fn default() -> Self {
        BonusRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(10.0), 10.0);
        assert_eq!(round_to_cents(1.234), 1.23);
        assert_eq!(round_to_cents(1.236), 1.24);
        assert_eq!(round_to_cents(-3.456), -3.46);
        assert_eq!(round_to_cents(1523.718_000_000_1), 1523.72);
    }

    #[test]
    fn test_round_uses_exact_stored_value() {
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.115), 1.11);
        assert_eq!(round_to_cents(10.235), 10.23);
        assert_eq!(round_to_cents(1.005), 1.0);
    }

    #[test]
    fn test_round_exact_halves_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(0.375), 0.38);
    }

    #[test]
    fn test_round_passes_through_non_finite() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_cents(1e30), 1e30);
    }

    #[test]
    fn test_round_normalises_negative_zero() {
        let rounded = round_to_cents(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_bonus_rate_fraction_matches_literal() {
        assert_eq!(BonusRate::from_bps(1500).fraction(), 0.15);
        assert_eq!(BonusRate::from_bps(1000).fraction(), 0.1);
        assert_eq!(BonusRate::from_bps(500).fraction(), 0.05);
        assert_eq!(BonusRate::zero().fraction(), 0.0);
    }

    #[test]
    fn test_bonus_rate_apply() {
        assert_eq!(BonusRate::from_bps(1500).apply(10.0), 10.0 * 0.15);
        assert_eq!(BonusRate::zero().apply(999.0), 0.0);
    }
}
