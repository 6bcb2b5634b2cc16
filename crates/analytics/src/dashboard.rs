//! The full dashboard view computed from one snapshot.

use serde::{Deserialize, Serialize};

use pasieka_core::Money;
use pasieka_sales::Order;

use crate::breakdown::{DimensionTotal, revenue_by_product_type, revenue_by_seller};
use crate::customers::{CustomerSummary, summarize_customers};
use crate::ranking::{recent_orders, top_customers};
use crate::revenue::summarize_revenue;
use crate::series::{MonthOrder, MonthlyRevenue, monthly_revenue};
use crate::snapshot::Snapshot;

/// Knobs for [`Dashboard::compute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    #[serde(default)]
    pub month_order: MonthOrder,
    /// Sellers shown in the seller breakdown even without sales.
    #[serde(default = "default_sellers")]
    pub sellers: Vec<String>,
}

fn default_sellers() -> Vec<String> {
    vec!["Kacper".to_string(), "Julian".to_string()]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            month_order: MonthOrder::default(),
            sellers: default_sellers(),
        }
    }
}

/// Headline amounts rendered for display (`"1234.50 zł"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub total_revenue: String,
    pub profit: String,
    pub average_order_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_revenue: Money,
    pub profit: Money,
    pub average_order_value: Money,
    /// Every order in the snapshot, whatever its status.
    pub order_count: usize,
    pub relevant_order_count: usize,
    pub revenue_over_time: Vec<MonthlyRevenue>,
    pub revenue_by_seller: Vec<DimensionTotal>,
    pub revenue_by_product_type: Vec<DimensionTotal>,
    pub top_customers: Vec<CustomerSummary>,
    pub recent_orders: Vec<Order>,
    pub formatted: FormattedTotals,
}

impl Dashboard {
    /// Derive every dashboard figure from `snapshot`.
    ///
    /// Pure: the snapshot is only read, and the same inputs always give the
    /// same dashboard.
    pub fn compute(snapshot: &Snapshot, config: &DashboardConfig) -> Self {
        let catalog = snapshot.catalog();
        let revenue = summarize_revenue(&snapshot.orders, &catalog);
        let customers = summarize_customers(&snapshot.customers, &snapshot.orders);

        let dashboard = Self {
            total_revenue: revenue.total_revenue,
            profit: revenue.profit,
            average_order_value: revenue.average_order_value,
            order_count: snapshot.orders.len(),
            relevant_order_count: revenue.relevant_order_count,
            revenue_over_time: monthly_revenue(&snapshot.orders, config.month_order),
            revenue_by_seller: revenue_by_seller(&snapshot.orders, &config.sellers),
            revenue_by_product_type: revenue_by_product_type(&snapshot.orders, &catalog),
            top_customers: top_customers(&customers).into_iter().cloned().collect(),
            recent_orders: recent_orders(&snapshot.orders).into_iter().cloned().collect(),
            formatted: FormattedTotals {
                total_revenue: revenue.total_revenue.to_string(),
                profit: revenue.profit.to_string(),
                average_order_value: revenue.average_order_value.to_string(),
            },
        };

        tracing::debug!(
            orders = dashboard.order_count,
            relevant = dashboard.relevant_order_count,
            products = catalog.len(),
            months = dashboard.revenue_over_time.len(),
            "dashboard computed"
        );

        dashboard
    }
}
