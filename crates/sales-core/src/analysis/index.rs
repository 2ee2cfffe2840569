//! Seller and product lookups, rebuilt for every analysis call.

use std::collections::HashMap;

use crate::types::{EntityId, Product, ProductView, Seller, SellerAggregate};
use crate::validation::{ensure_unique, ValidationResult};

/// Seller aggregates in input order, plus an id → position map.
///
/// The aggregates live in a `Vec` so the ranker can stable-sort them in
/// index order without a second pass.
#[derive(Debug)]
pub(crate) struct SellerIndex {
    aggregates: Vec<SellerAggregate>,
    positions: HashMap<EntityId, usize>,
}

impl SellerIndex {
    pub(crate) fn build(sellers: &[Seller]) -> ValidationResult<Self> {
        ensure_unique("seller id", sellers.iter().map(|s| s.id.as_str()))?;

        let aggregates: Vec<SellerAggregate> = sellers.iter().map(SellerAggregate::new).collect();
        let positions = aggregates
            .iter()
            .enumerate()
            .map(|(pos, aggregate)| (aggregate.id.clone(), pos))
            .collect();

        Ok(SellerIndex {
            aggregates,
            positions,
        })
    }

    pub(crate) fn get_mut(&mut self, id: &EntityId) -> Option<&mut SellerAggregate> {
        let pos = *self.positions.get(id)?;
        self.aggregates.get_mut(pos)
    }

    pub(crate) fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub(crate) fn into_aggregates(self) -> Vec<SellerAggregate> {
        self.aggregates
    }
}

/// SKU → product view.
#[derive(Debug)]
pub(crate) struct ProductIndex {
    by_sku: HashMap<String, ProductView>,
}

impl ProductIndex {
    pub(crate) fn build(products: &[Product]) -> ValidationResult<Self> {
        ensure_unique("sku", products.iter().map(|p| p.sku.as_str()))?;

        let by_sku = products
            .iter()
            .map(|product| (product.sku.clone(), ProductView::from(product)))
            .collect();

        Ok(ProductIndex { by_sku })
    }

    pub(crate) fn get(&self, sku: &str) -> Option<&ProductView> {
        self.by_sku.get(sku)
    }

    pub(crate) fn len(&self) -> usize {
        self.by_sku.len()
    }
}
