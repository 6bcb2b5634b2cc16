//! Realized revenue, profit and average order value.

use serde::{Deserialize, Serialize};

use pasieka_core::Money;
use pasieka_sales::Order;

use crate::snapshot::ProductCatalog;

/// Headline revenue figures over realized orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    /// Orders whose fulfillment status counts as realized.
    pub relevant_order_count: usize,
    pub total_revenue: Money,
    /// Catalog cost of every line of every realized order.
    pub cost_of_goods: Money,
    pub profit: Money,
    pub average_order_value: Money,
}

/// Orders that count toward realized revenue (paid, shipped, completed).
pub fn relevant_orders(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|o| o.is_realized())
}

/// Compute revenue, profit and AOV.
///
/// Revenue reads each order's stored `total`. Cost walks the lines of the same
/// orders and prices them at the catalog's current `cost`; a line whose
/// product is gone costs nothing. AOV is zero when nothing is realized.
pub fn summarize_revenue(orders: &[Order], catalog: &ProductCatalog<'_>) -> RevenueSummary {
    let mut relevant_order_count = 0usize;
    let mut total_revenue = Money::ZERO;
    let mut cost_of_goods = Money::ZERO;

    for order in relevant_orders(orders) {
        relevant_order_count += 1;
        total_revenue += order.total;
        cost_of_goods += order
            .products
            .iter()
            .filter_map(|item| {
                catalog
                    .resolve(&item.product_id)
                    .map(|product| product.cost.times(item.quantity))
            })
            .sum();
    }

    RevenueSummary {
        relevant_order_count,
        total_revenue,
        cost_of_goods,
        profit: total_revenue - cost_of_goods,
        average_order_value: total_revenue.split(relevant_order_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::*;
    use pasieka_products::ProductType;
    use pasieka_sales::FulfillmentStatus;
    use proptest::prelude::*;

    #[test]
    fn only_realized_orders_count() {
        let orders = vec![
            order("o1", 100.0, FulfillmentStatus::Paid),
            order("o2", 50.0, FulfillmentStatus::New),
        ];
        let summary = summarize_revenue(&orders, &ProductCatalog::new(&[]));

        assert_eq!(summary.total_revenue, Money::from_major(100.0));
        assert_eq!(summary.average_order_value, Money::from_major(100.0));
        assert_eq!(summary.relevant_order_count, 1);
    }

    #[test]
    fn average_is_zero_without_realized_orders() {
        let orders = vec![
            order("o1", 70.0, FulfillmentStatus::Cancelled),
            order("o2", 30.0, FulfillmentStatus::AwaitingPayment),
        ];
        let summary = summarize_revenue(&orders, &ProductCatalog::new(&[]));
        assert_eq!(summary.average_order_value, Money::ZERO);
        assert_eq!(summary.total_revenue, Money::ZERO);
        assert_eq!(summary.profit, Money::ZERO);
    }

    #[test]
    fn profit_uses_catalog_cost_and_ignores_dangling_lines() {
        let products = vec![product("p1", ProductType::Honey, 40.0, 15.0)];
        let mut shipped = order("o1", 130.0, FulfillmentStatus::Shipped);
        shipped.products = vec![line("p1", 40.0, 3), line("deleted", 10.0, 1)];

        let summary = summarize_revenue(&[shipped], &ProductCatalog::new(&products));

        // Revenue reads the stored total, not the lines.
        assert_eq!(summary.total_revenue, Money::from_major(130.0));
        assert_eq!(summary.cost_of_goods, Money::from_major(45.0));
        assert_eq!(summary.profit, Money::from_major(85.0));
    }

    #[test]
    fn unrealized_lines_do_not_add_cost() {
        let products = vec![product("p1", ProductType::Honey, 40.0, 15.0)];
        let mut fresh = order("o1", 40.0, FulfillmentStatus::New);
        fresh.products = vec![line("p1", 40.0, 1)];

        let summary = summarize_revenue(&[fresh], &ProductCatalog::new(&products));
        assert_eq!(summary.cost_of_goods, Money::ZERO);
    }

    fn arb_status() -> impl Strategy<Value = FulfillmentStatus> {
        (0usize..8).prop_map(|idx| {
            FulfillmentStatus::ALL
                .get(idx)
                .cloned()
                .unwrap_or_else(|| FulfillmentStatus::Unlisted("Inny".to_string()))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: revenue is the sum of totals over exactly the realized orders.
        #[test]
        fn revenue_is_sum_of_realized_totals(
            rows in prop::collection::vec((0i64..1_000_000i64, arb_status()), 0..30)
        ) {
            let orders: Vec<Order> = rows
                .iter()
                .enumerate()
                .map(|(idx, (total, status))| {
                    let mut o = order(&format!("o{idx}"), 0.0, status.clone());
                    o.total = Money::from_minor(*total);
                    o
                })
                .collect();

            let summary = summarize_revenue(&orders, &ProductCatalog::new(&[]));
            let expected: i64 = rows
                .iter()
                .filter(|(_, s)| s.is_realized())
                .map(|(t, _)| *t)
                .sum();
            let expected_count = rows.iter().filter(|(_, s)| s.is_realized()).count();

            prop_assert_eq!(summary.total_revenue.minor(), expected);
            prop_assert_eq!(summary.relevant_order_count, expected_count);
            prop_assert!(relevant_orders(&orders).all(|o| o.is_realized()));
            if expected_count == 0 {
                prop_assert_eq!(summary.average_order_value, Money::ZERO);
            }
        }
    }
}
