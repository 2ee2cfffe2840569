//! # Domain Types
//!
//! Input records, derived aggregates, and report entries.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (deserialized)                                                   │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────────────────┐   │
//! │  │   Seller     │  │   Product    │  │     PurchaseRecord          │   │
//! │  │  id          │  │  sku         │  │  seller_id (FK → Seller)    │   │
//! │  │  first_name  │  │  name        │  │  total_amount               │   │
//! │  │  last_name   │  │  prices      │  │  items: [LineItem]          │   │
//! │  └──────────────┘  └──────────────┘  │    sku (FK → Product)       │   │
//! │                                      │    quantity, discount       │   │
//! │                                      └─────────────────────────────┘   │
//! │                                                                         │
//! │  DERIVED                             OUTPUT (serialized)               │
//! │  ┌──────────────────────┐           ┌──────────────────────┐           │
//! │  │  SellerAggregate     │──project─►│    ReportEntry       │           │
//! │  │  revenue, profit     │           │  rounded to cents    │           │
//! │  │  products_sold       │           │  top_products ≤ 10   │           │
//! │  └──────────────────────┘           └──────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

// =============================================================================
// Entity Id
// =============================================================================

/// Identifier for sellers and customers.
///
/// Datasets in the wild use both `"seller_1"` and `1`; both are accepted and
/// kept as text so lookups do not depend on the source's choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId(id)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        EntityId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => EntityId(text),
            RawId::Signed(n) => EntityId(n.to_string()),
            RawId::Unsigned(n) => EntityId(n.to_string()),
        })
    }
}

// =============================================================================
// Input Records
// =============================================================================

/// A customer record.
///
/// Customers are required to be present but the analysis never reads them,
/// so their shape is left to the data source.
pub type Customer = Value;

/// A seller whose performance is being reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name shown in the report: `"first last"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - business identifier.
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// What the shop paid per unit.
    pub purchase_price: f64,
    /// Catalogue price per unit.
    pub sale_price: f64,
}

/// One product line inside a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    /// Unit price charged on this receipt. Absent means catalogue price.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Discount in percent (7.5 = 7.5% off).
    #[serde(default)]
    pub discount: f64,
}

/// A receipt: one sale by one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRecord {
    #[serde(default)]
    pub receipt_id: Option<String>,
    pub seller_id: EntityId,
    #[serde(default)]
    pub customer_id: Option<EntityId>,
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

/// The complete analysis input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Derived Types
// =============================================================================

/// Lightweight product view held by the product index and handed to
/// revenue policies.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub name: String,
    pub category: String,
    pub sku: String,
    pub purchase_price: f64,
    pub sale_price: f64,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        ProductView {
            name: product.name.clone(),
            category: product.category.clone(),
            sku: product.sku.clone(),
            purchase_price: product.purchase_price,
            sale_price: product.sale_price,
        }
    }
}

/// Per-seller SKU → quantity tally that remembers first-insertion order.
///
/// Insertion order is the tie-breaker when ranking top products, so a plain
/// `HashMap` is not enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoldQuantities {
    positions: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl SoldQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the SKU's tally, starting it at 0 on first sight.
    pub fn add(&mut self, sku: &str, quantity: u64) {
        match self.positions.get(sku) {
            Some(&pos) => self.entries[pos].1 += quantity,
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(sku, quantity)` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(sku, qty)| (sku.as_str(), *qty))
    }

    /// Best sellers by quantity, descending, at most `limit` long.
    ///
    /// The sort is stable: equal quantities keep first-insertion order.
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<TopProduct> = self
            .iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.to_string(),
                quantity,
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

/// Working state for one seller while the analysis runs.
///
/// Created by the indexer, mutated by the accumulator and ranker, then
/// consumed by the projector.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAggregate {
    pub id: EntityId,
    pub name: String,
    /// Sum of purchase-record totals.
    pub revenue: f64,
    /// Sum of per-line (revenue − cost).
    pub profit: f64,
    /// Number of purchase records.
    pub sales_count: usize,
    pub products_sold: SoldQuantities,
    /// Filled by the ranker.
    pub top_products: Vec<TopProduct>,
    /// Filled by the ranker.
    pub bonus: f64,
}

impl SellerAggregate {
    /// Zeroed aggregate for a seller.
    pub fn new(seller: &Seller) -> Self {
        SellerAggregate {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: SoldQuantities::new(),
            top_products: Vec::new(),
            bonus: 0.0,
        }
    }
}

// =============================================================================
// Report Types
// =============================================================================

/// One row of a seller's best-seller list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    #[ts(type = "number")]
    pub quantity: u64,
}

/// One seller's line in the final report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportEntry {
    pub seller_id: EntityId,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    #[ts(type = "number")]
    pub sales_count: usize,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
