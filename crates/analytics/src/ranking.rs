//! Top-N lists for the dashboard.

use chrono::{DateTime, Utc};

use pasieka_sales::Order;

use crate::customers::CustomerSummary;

/// Length of every dashboard ranking.
pub const TOP_N: usize = 5;

/// The `n` highest items by `key`, descending, ties in input order.
///
/// Sorts references, so the caller's slice is never reordered.
fn top_by<T, K, F>(items: &[T], n: usize, key: F) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut refs: Vec<&T> = items.iter().collect();
    // `sort_by` is stable: equal keys keep their input order.
    refs.sort_by(|a, b| key(b).cmp(&key(a)));
    refs.truncate(n);
    refs
}

/// Customers with the highest spend.
pub fn top_customers(customers: &[CustomerSummary]) -> Vec<&CustomerSummary> {
    top_by(customers, TOP_N, |c| c.total_spent)
}

/// Newest orders first; an unparseable date ranks as the oldest possible.
pub fn recent_orders(orders: &[Order]) -> Vec<&Order> {
    top_by(orders, TOP_N, |o| {
        o.date.instant().unwrap_or(DateTime::<Utc>::MIN_UTC)
    })
}
