//! Profit ranking, bonus assignment and best-seller lists.

use std::cmp::Ordering;

use crate::policy::BonusPolicy;
use crate::types::SellerAggregate;
use crate::TOP_PRODUCTS_LIMIT;

/// Sorts sellers by profit (highest first), assigns bonuses, and builds each
/// seller's top-products list.
///
/// The sort is stable, so sellers with equal profit keep their index order.
/// A NaN profit (from a policy or a non-finite price) ranks below every
/// number.
/// The bonus policy runs once per seller, only after the order is final.
pub(crate) fn rank(aggregates: &mut [SellerAggregate], bonus_policy: &dyn BonusPolicy) {
    aggregates.sort_by(|a, b| by_profit_descending(a, b));

    let total = aggregates.len();
    for (rank, seller) in aggregates.iter_mut().enumerate() {
        seller.bonus = bonus_policy.bonus(rank, total, seller);
        seller.top_products = seller.products_sold.top(TOP_PRODUCTS_LIMIT);
    }
}

// Total order: numbers high to low, `0.0 == -0.0`, NaN after every number.
fn by_profit_descending(a: &SellerAggregate, b: &SellerAggregate) -> Ordering {
    match (a.profit.is_nan(), b.profit.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if a.profit > b.profit => Ordering::Less,
        (false, false) if a.profit < b.profit => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}
