//! Aggregates → report entries.

use crate::money::round_to_cents;
use crate::types::{ReportEntry, SellerAggregate};

/// Maps ranked aggregates to report entries, keeping their order.
///
/// Revenue, profit and bonus are rounded to cents; everything else is copied.
pub(crate) fn project(aggregates: Vec<SellerAggregate>) -> Vec<ReportEntry> {
    aggregates.into_iter().map(ReportEntry::from).collect()
}

impl From<SellerAggregate> for ReportEntry {
    fn from(seller: SellerAggregate) -> Self {
        ReportEntry {
            seller_id: seller.id,
            name: seller.name,
            revenue: round_to_cents(seller.revenue),
            profit: round_to_cents(seller.profit),
            sales_count: seller.sales_count,
            top_products: seller.top_products,
            bonus: round_to_cents(seller.bonus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Seller, TopProduct};

    #[test]
    fn test_projection_rounds_money_fields() {
        let mut aggregate = SellerAggregate::new(&Seller {
            id: "seller_7".into(),
            first_name: "Ivan".to_string(),
            last_name: "Sidorov".to_string(),
        });
        aggregate.revenue = 1234.5678;
        aggregate.profit = 99.994;
        aggregate.bonus = 14.999_1;
        aggregate.sales_count = 12;
        aggregate.top_products = vec![TopProduct {
            sku: "SKU_001".to_string(),
            quantity: 4,
        }];

        let entries = project(vec![aggregate]);
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.seller_id.as_str(), "seller_7");
        assert_eq!(entry.name, "Ivan Sidorov");
        assert_eq!(entry.revenue, 1234.57);
        assert_eq!(entry.profit, 99.99);
        assert_eq!(entry.bonus, 15.0);
        assert_eq!(entry.sales_count, 12);
        assert_eq!(entry.top_products[0].sku, "SKU_001");
    }
}
