//! # Policy Module
//!
//! Pluggable revenue and bonus formulas.
//!
//! ## Where Policies Plug In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Analysis Pipeline                                │
//! │                                                                         │
//! │  Validate ──► Index ──► Accumulate ──► Rank ──► Project                │
//! │                             │            │                              │
//! │                             │            └── BonusPolicy                │
//! │                             │                (rank, total, seller)      │
//! │                             │                once per seller, after     │
//! │                             │                the final sort             │
//! │                             │                                           │
//! │                             └── RevenuePolicy                           │
//! │                                 (line item, product)                    │
//! │                                 once per line item                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both traits are implemented for closures, so ad-hoc policies need no
//! named type:
//!
//! ```rust
//! use sales_core::policy::{AnalysisOptions, TieredBonus};
//! use sales_core::types::{LineItem, ProductView};
//!
//! let options = AnalysisOptions::new()
//!     .with_revenue(|item: &LineItem, product: &ProductView| {
//!         product.sale_price * item.quantity as f64
//!     })
//!     .with_bonus(TieredBonus::default());
//! assert!(options.is_complete());
//! ```

use std::fmt;

use crate::error::{AnalysisError, AnalysisResult};
use crate::money::BonusRate;
use crate::types::{LineItem, ProductView, SellerAggregate};

// =============================================================================
// Policy Traits
// =============================================================================

/// Computes the monetary revenue of one line item.
pub trait RevenuePolicy: Send + Sync {
    fn line_revenue(&self, item: &LineItem, product: &ProductView) -> f64;
}

/// Computes a seller's bonus from their profit rank.
///
/// `rank` is 0-based (0 = highest profit) and `total` is the number of
/// sellers in the report.
pub trait BonusPolicy: Send + Sync {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAggregate) -> f64;
}

impl<F> RevenuePolicy for F
where
    F: Fn(&LineItem, &ProductView) -> f64 + Send + Sync,
{
    fn line_revenue(&self, item: &LineItem, product: &ProductView) -> f64 {
        self(item, product)
    }
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerAggregate) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAggregate) -> f64 {
        self(rank, total, seller)
    }
}

// =============================================================================
// Default Revenue Policy
// =============================================================================

/// `sale_price × quantity × (1 − discount / 100)`.
///
/// Uses the receipt's unit price, or the catalogue price when the line item
/// does not carry one.
///
/// ## Example
/// ```rust
/// use sales_core::policy::{RevenuePolicy, SimpleRevenue};
/// use sales_core::types::{LineItem, ProductView};
///
/// let product = ProductView {
///     name: "Tea".into(),
///     category: "Drinks".into(),
///     sku: "SKU_001".into(),
///     purchase_price: 2.0,
///     sale_price: 4.0,
/// };
/// let item = LineItem {
///     sku: "SKU_001".into(),
///     quantity: 3,
///     sale_price: Some(5.0),
///     discount: 10.0,
/// };
/// assert_eq!(SimpleRevenue.line_revenue(&item, &product), 13.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenuePolicy for SimpleRevenue {
    fn line_revenue(&self, item: &LineItem, product: &ProductView) -> f64 {
        let unit_price = item.sale_price.unwrap_or(product.sale_price);
        unit_price * item.quantity as f64 * (1.0 - item.discount / 100.0)
    }
}

// =============================================================================
// Default Bonus Policy
// =============================================================================

/// Profit-rank bonus tiers.
///
/// ## Tier Selection
/// ```text
/// rank == 0            → first      (15%)
/// rank == 1 or 2       → runner_up  (10%)
/// rank == total - 1    → last       (0%)
/// otherwise            → standard   (5%)
/// ```
///
/// Checks run top to bottom and the first match wins. A lone seller is both
/// rank 0 and rank `total - 1` and gets the `first` rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredBonus {
    pub first: BonusRate,
    pub runner_up: BonusRate,
    pub standard: BonusRate,
    pub last: BonusRate,
}

impl TieredBonus {
    /// Returns the rate that applies at `rank` out of `total`.
    pub fn rate_for(&self, rank: usize, total: usize) -> BonusRate {
        if rank == 0 {
            self.first
        } else if rank == 1 || rank == 2 {
            self.runner_up
        } else if rank + 1 == total {
            self.last
        } else {
            self.standard
        }
    }
}

impl Default for TieredBonus {
    fn default() -> Self {
        TieredBonus {
            first: BonusRate::from_bps(1500),
            runner_up: BonusRate::from_bps(1000),
            standard: BonusRate::from_bps(500),
            last: BonusRate::zero(),
        }
    }
}

impl BonusPolicy for TieredBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAggregate) -> f64 {
        self.rate_for(rank, total).apply(seller.profit)
    }
}

// =============================================================================
// Analysis Options
// =============================================================================

/// The two policies an analysis needs.
///
/// Both start out unset; [`crate::analysis::analyze`] fails with
/// [`AnalysisError::MissingPolicy`] if either is still unset.
#[derive(Default)]
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenuePolicy>>,
    calculate_bonus: Option<Box<dyn BonusPolicy>>,
}

impl AnalysisOptions {
    /// Options with no policies set.
    pub fn new() -> Self {
        Self::default()
    }

    /// [`SimpleRevenue`] and the default [`TieredBonus`].
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(TieredBonus::default())
    }

    pub fn with_revenue(mut self, policy: impl RevenuePolicy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(policy));
        self
    }

    pub fn with_bonus(mut self, policy: impl BonusPolicy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(policy));
        self
    }

    pub fn is_complete(&self) -> bool {
        self.calculate_revenue.is_some() && self.calculate_bonus.is_some()
    }

    /// Both policies, or `MissingPolicy` naming the first one absent.
    pub(crate) fn policies(&self) -> AnalysisResult<(&dyn RevenuePolicy, &dyn BonusPolicy)> {
        let revenue = self
            .calculate_revenue
            .as_deref()
            .ok_or(AnalysisError::MissingPolicy {
                policy: "calculate_revenue",
            })?;
        let bonus = self
            .calculate_bonus
            .as_deref()
            .ok_or(AnalysisError::MissingPolicy {
                policy: "calculate_bonus",
            })?;
        Ok((revenue, bonus))
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
