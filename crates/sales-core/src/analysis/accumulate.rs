//! Left fold over purchase records into seller aggregates.

use tracing::trace;

use super::index::{ProductIndex, SellerIndex};
use crate::error::{AnalysisError, AnalysisResult, ReferenceKind};
use crate::policy::RevenuePolicy;
use crate::types::PurchaseRecord;

/// Folds every purchase record, and every line item within it, into the
/// seller aggregates.
///
/// Per record: `sales_count += 1`, `revenue += total_amount`.
/// Per line item: `profit += revenue_policy(item, product) − purchase_price × quantity`
/// and the SKU's sold quantity grows by `quantity`.
///
/// An unknown seller id or SKU aborts the fold with `DanglingReference`.
pub(crate) fn accumulate(
    records: &[PurchaseRecord],
    sellers: &mut SellerIndex,
    products: &ProductIndex,
    revenue_policy: &dyn RevenuePolicy,
) -> AnalysisResult<()> {
    for record in records {
        let seller =
            sellers
                .get_mut(&record.seller_id)
                .ok_or_else(|| AnalysisError::DanglingReference {
                    kind: ReferenceKind::Seller,
                    id: record.seller_id.to_string(),
                })?;

        seller.sales_count += 1;
        seller.revenue += record.total_amount;

        for item in &record.items {
            let product = products
                .get(&item.sku)
                .ok_or_else(|| AnalysisError::DanglingReference {
                    kind: ReferenceKind::Product,
                    id: item.sku.clone(),
                })?;

            let cost = product.purchase_price * item.quantity as f64;
            let revenue = revenue_policy.line_revenue(item, product);
            seller.profit += revenue - cost;
            seller.products_sold.add(&item.sku, u64::from(item.quantity));
        }

        trace!(
            seller_id = %record.seller_id,
            receipt_id = record.receipt_id.as_deref().unwrap_or("-"),
            items = record.items.len(),
            "Folded purchase record"
        );
    }

    Ok(())
}
