//! Point-in-time view of the shop collections and product lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pasieka_core::ProductId;
use pasieka_parties::Customer;
use pasieka_products::Product;
use pasieka_sales::Order;

/// Immutable view of the three collections at one refresh.
///
/// Collection order is the order the entity store delivered; first-seen
/// groupings depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Snapshot {
    pub fn new(orders: Vec<Order>, products: Vec<Product>, customers: Vec<Customer>) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    pub fn catalog(&self) -> ProductCatalog<'_> {
        ProductCatalog::new(&self.products)
    }
}

/// Product lookup by id for resolving order lines.
///
/// When the store holds two products with the same id the first one wins.
#[derive(Debug, Clone)]
pub struct ProductCatalog<'a> {
    by_id: HashMap<&'a ProductId, &'a Product>,
}

impl<'a> ProductCatalog<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for product in products {
            by_id.entry(&product.id).or_insert(product);
        }
        Self { by_id }
    }

    pub fn resolve(&self, id: &ProductId) -> Option<&'a Product> {
        self.by_id.get(id).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use pasieka_products::ProductType;

    #[test]
    fn catalog_resolves_first_product_with_an_id() {
        let products = vec![
            product("p1", ProductType::Honey, 10.0, 5.0),
            product("p1", ProductType::Propolis, 99.0, 1.0),
            product("p2", ProductType::BeePollen, 30.0, 12.0),
        ];
        let catalog = ProductCatalog::new(&products);
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.resolve(&ProductId::from_raw("p1")).map(|p| &p.kind),
            Some(&ProductType::Honey)
        );
        assert!(catalog.resolve(&ProductId::from_raw("gone")).is_none());
    }

    #[test]
    fn snapshot_json_defaults_missing_collections() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"orders": []}"#).unwrap();
        assert!(snapshot.products.is_empty());
        assert!(snapshot.customers.is_empty());
    }
}
