//! Revenue grouped by a categorical attribute (seller, product type).

use serde::{Deserialize, Serialize};

use pasieka_core::Money;
use pasieka_sales::Order;

use crate::snapshot::ProductCatalog;

/// Revenue summed within one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTotal {
    pub name: String,
    pub revenue: Money,
}

fn add_to_group(groups: &mut Vec<DimensionTotal>, name: &str, amount: Money) {
    match groups.iter_mut().find(|g| g.name == name) {
        Some(group) => group.revenue += amount,
        None => groups.push(DimensionTotal {
            name: name.to_string(),
            revenue: amount,
        }),
    }
}

/// Sum every order's `total` per seller.
///
/// The canonical sellers come first, always present (zero when they sold
/// nothing); any other seller found in the data follows in first-seen order.
pub fn revenue_by_seller(orders: &[Order], canonical_sellers: &[String]) -> Vec<DimensionTotal> {
    let mut groups: Vec<DimensionTotal> = Vec::with_capacity(canonical_sellers.len());
    for seller in canonical_sellers {
        add_to_group(&mut groups, seller, Money::ZERO);
    }
    for order in orders {
        add_to_group(&mut groups, &order.seller, order.total);
    }
    groups
}

/// Sum `price × quantity` of every line of every order per product type.
///
/// Lines whose product no longer exists in the catalog are skipped; they do
/// not form a bucket of their own. Types appear in first-seen order.
pub fn revenue_by_product_type(
    orders: &[Order],
    catalog: &ProductCatalog<'_>,
) -> Vec<DimensionTotal> {
    let mut groups = Vec::new();
    for item in orders.iter().flat_map(|o| o.products.iter()) {
        if let Some(product) = catalog.resolve(&item.product_id) {
            add_to_group(&mut groups, product.kind.label(), item.line_total());
        }
    }
    groups
}
