//! Property tests for ordering, conservation and determinism.

use proptest::prelude::*;
use sales_core::types::{LineItem, Product, PurchaseRecord, SalesData, Seller};
use sales_core::{analyze, AnalysisOptions, TOP_PRODUCTS_LIMIT};
use serde_json::json;

const SELLER_COUNT: usize = 4;
const PRODUCT_COUNT: usize = 14;

fn catalogue() -> Vec<Product> {
    (0..PRODUCT_COUNT)
        .map(|n| Product {
            sku: format!("SKU_{n:03}"),
            name: format!("Product {n}"),
            category: "General".to_string(),
            purchase_price: 1.0 + n as f64 * 0.75,
            sale_price: 2.0 + n as f64 * 1.25,
        })
        .collect()
}

fn sellers() -> Vec<Seller> {
    (0..SELLER_COUNT)
        .map(|n| Seller {
            id: format!("seller_{n}").into(),
            first_name: format!("First{n}"),
            last_name: format!("Last{n}"),
        })
        .collect()
}

fn line_item() -> impl Strategy<Value = LineItem> {
    (0..PRODUCT_COUNT, 1u32..20, prop_oneof![Just(0.0), 0.0f64..50.0]).prop_map(
        |(product, quantity, discount)| LineItem {
            sku: format!("SKU_{product:03}"),
            quantity,
            sale_price: None,
            discount,
        },
    )
}

fn purchase_record() -> impl Strategy<Value = PurchaseRecord> {
    (0..SELLER_COUNT, 0.0f64..500.0, prop::collection::vec(line_item(), 0..6)).prop_map(
        |(seller, total_amount, items)| PurchaseRecord {
            receipt_id: None,
            seller_id: format!("seller_{seller}").into(),
            customer_id: None,
            total_amount,
            items,
        },
    )
}

fn dataset() -> impl Strategy<Value = SalesData> {
    prop::collection::vec(purchase_record(), 1..40).prop_map(|purchase_records| SalesData {
        customers: vec![json!({ "id": "c1" })],
        products: catalogue(),
        sellers: sellers(),
        purchase_records,
    })
}

/// Σ (revenue − cost) over every line item, computed independently.
fn expected_total_profit(data: &SalesData) -> f64 {
    data.purchase_records
        .iter()
        .flat_map(|r| &r.items)
        .map(|item| {
            let product = data.products.iter().find(|p| p.sku == item.sku).unwrap();
            let qty = item.quantity as f64;
            product.sale_price * qty * (1.0 - item.discount / 100.0) - product.purchase_price * qty
        })
        .sum()
}

proptest! {
    #[test]
    fn prop_profit_is_conserved(data in dataset()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        let reported: f64 = report.iter().map(|e| e.profit).sum();
        // each entry is rounded to the cent independently
        prop_assert!((reported - expected_total_profit(&data)).abs() <= 0.005 * SELLER_COUNT as f64 + 1e-6);
    }

    #[test]
    fn prop_report_sorted_by_profit(data in dataset()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        prop_assert_eq!(report.len(), SELLER_COUNT);
        prop_assert!(report.windows(2).all(|w| w[0].profit >= w[1].profit));
    }

    #[test]
    fn prop_top_products_bounded_and_sorted(data in dataset()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        for entry in &report {
            prop_assert!(entry.top_products.len() <= TOP_PRODUCTS_LIMIT);
            prop_assert!(entry.top_products.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        }
    }

    #[test]
    fn prop_totals_independent_of_record_order(data in dataset()) {
        let mut reversed = data.clone();
        reversed.purchase_records.reverse();

        let forward = analyze(&data, &AnalysisOptions::standard()).unwrap();
        let backward = analyze(&reversed, &AnalysisOptions::standard()).unwrap();

        for entry in &forward {
            let other = backward.iter().find(|e| e.seller_id == entry.seller_id).unwrap();
            prop_assert_eq!(entry.sales_count, other.sales_count);
            prop_assert!((entry.revenue - other.revenue).abs() <= 0.011);
            prop_assert!((entry.profit - other.profit).abs() <= 0.011);
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(data in dataset()) {
        let options = AnalysisOptions::standard();
        let first = serde_json::to_string(&analyze(&data, &options).unwrap()).unwrap();
        let second = serde_json::to_string(&analyze(&data, &options).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
