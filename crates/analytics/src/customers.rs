//! Per-customer statistics recomputed from the order list.

use serde::{Deserialize, Serialize};

use pasieka_core::{CustomerId, Money};
use pasieka_parties::Customer;
use pasieka_sales::Order;

use crate::locale::order_count_label;

/// Customer row as reported by the dashboard and the customer list.
///
/// `order_count` and `total_spent` are derived from orders, never read from
/// the cached counters on the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub order_count: u64,
    pub total_spent: Money,
    /// e.g. `"3 zamówienia"`.
    pub order_count_label: String,
}

/// Orders placed under a customer's name (case-insensitive), in input order.
pub fn orders_for_customer<'a>(orders: &'a [Order], customer_name: &str) -> Vec<&'a Order> {
    orders.iter().filter(|o| o.belongs_to(customer_name)).collect()
}

/// Recompute order count and spend for every customer, keeping input order.
pub fn summarize_customers(customers: &[Customer], orders: &[Order]) -> Vec<CustomerSummary> {
    customers
        .iter()
        .map(|customer| {
            let matching = orders_for_customer(orders, &customer.name);
            let order_count = matching.len() as u64;
            let total_spent: Money = matching.iter().map(|o| o.total).sum();

            if order_count != u64::from(customer.order_count) || total_spent != customer.total_spent {
                tracing::debug!(
                    customer = %customer.id,
                    cached_count = customer.order_count,
                    order_count,
                    "customer counters drifted from orders"
                );
            }

            CustomerSummary {
                id: customer.id.clone(),
                name: customer.name.clone(),
                email: customer.email.clone(),
                order_count,
                total_spent,
                order_count_label: order_count_label(order_count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::*;
    use pasieka_sales::FulfillmentStatus;

    #[test]
    fn stats_are_recomputed_from_orders_not_cache() {
        // Stored counters claim 999 zł; the orders say otherwise.
        let customers = vec![customer("Jan Kowalski", 999.0), customer("Ewa", 0.0)];
        let mut other = order("o3", 5.0, FulfillmentStatus::New);
        other.customer_name = "Ewa".to_string();
        let mut shouting = order("o2", 20.0, FulfillmentStatus::Cancelled);
        shouting.customer_name = "JAN KOWALSKI".to_string();
        let orders = vec![order("o1", 10.0, FulfillmentStatus::Paid), shouting, other];

        let summaries = summarize_customers(&customers, &orders);
        assert_eq!(summaries[0].order_count, 2);
        assert_eq!(summaries[0].total_spent, Money::from_major(30.0));
        assert_eq!(summaries[0].order_count_label, "2 zamówienia");
        assert_eq!(summaries[1].order_count, 1);
        assert_eq!(summaries[1].order_count_label, "1 zamówienie");
    }

    #[test]
    fn customer_without_orders_has_zero_stats() {
        let summaries = summarize_customers(&[customer("Nowy", 50.0)], &[]);
        assert_eq!(summaries[0].order_count, 0);
        assert_eq!(summaries[0].total_spent, Money::ZERO);
        assert_eq!(summaries[0].order_count_label, "0 zamówień");
    }

    #[test]
    fn orders_for_customer_is_case_insensitive() {
        let mut a = order("o1", 1.0, FulfillmentStatus::New);
        a.customer_name = "anna".to_string();
        let b = order("o2", 1.0, FulfillmentStatus::New);
        let orders = vec![a, b];
        let found = orders_for_customer(&orders, "ANNA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "o1");
    }
}
