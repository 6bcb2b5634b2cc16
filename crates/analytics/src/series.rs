//! Revenue over time, bucketed by calendar month.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use pasieka_core::Money;
use pasieka_sales::Order;

use crate::locale::short_month_name;

/// How month buckets are keyed and ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrder {
    /// Buckets keyed by month name alone, in the order the months first
    /// appear in the order list. January 2024 and January 2025 share a bucket.
    #[default]
    FirstSeen,
    /// Buckets keyed by year and month, sorted oldest first.
    Chronological,
}

impl core::str::FromStr for MonthOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_seen" | "first-seen" => Ok(MonthOrder::FirstSeen),
            "chronological" => Ok(MonthOrder::Chronological),
            other => Err(format!(
                "unknown month order '{other}' (expected first_seen or chronological)"
            )),
        }
    }
}

/// One point of the revenue-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// Short Polish month name, e.g. `"sty"`.
    pub label: String,
    /// Set only for chronological buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub month: u32,
    pub revenue: Money,
}

/// Sum every order's `total` per month of its date.
///
/// All orders count regardless of status. Orders whose date does not parse
/// are left out of the series.
pub fn monthly_revenue(orders: &[Order], order: MonthOrder) -> Vec<MonthlyRevenue> {
    let mut buckets: Vec<MonthlyRevenue> = Vec::new();

    for o in orders {
        let Some(at) = o.date.instant() else {
            continue;
        };
        let month = at.month();
        let year = match order {
            MonthOrder::FirstSeen => None,
            MonthOrder::Chronological => Some(at.year()),
        };

        match buckets
            .iter_mut()
            .find(|b| b.month == month && b.year == year)
        {
            Some(bucket) => bucket.revenue += o.total,
            None => buckets.push(MonthlyRevenue {
                label: short_month_name(month).to_string(),
                year,
                month,
                revenue: o.total,
            }),
        }
    }

    if order == MonthOrder::Chronological {
        buckets.sort_by_key(|b| (b.year, b.month));
    }

    buckets
}
