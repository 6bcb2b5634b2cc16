//! `pasieka-analytics` — derived sales metrics for the dashboard.
//!
//! Every function here is a pure computation over an immutable [`Snapshot`]
//! of the three collections. Nothing fails: dangling product references,
//! unparseable dates and unknown statuses contribute zero instead of raising.
//!
//! - `revenue`: realized revenue, profit, average order value
//! - `series`: revenue bucketed by calendar month
//! - `breakdown`: revenue by seller and by product type
//! - `customers`: per-customer stats recomputed from orders
//! - `ranking`: top customers and most recent orders
//! - `locale`: Polish month names and order-count plurals
//! - `dashboard`: the bundle the dashboard view renders

pub mod breakdown;
pub mod customers;
pub mod dashboard;
pub mod locale;
pub mod ranking;
pub mod revenue;
pub mod series;
pub mod snapshot;

pub use breakdown::{DimensionTotal, revenue_by_product_type, revenue_by_seller};
pub use customers::{CustomerSummary, orders_for_customer, summarize_customers};
pub use dashboard::{Dashboard, DashboardConfig, FormattedTotals};
pub use locale::{order_count_label, pluralize_orders, short_month_name};
pub use ranking::{TOP_N, recent_orders, top_customers};
pub use revenue::{RevenueSummary, relevant_orders, summarize_revenue};
pub use series::{MonthOrder, MonthlyRevenue, monthly_revenue};
pub use snapshot::{ProductCatalog, Snapshot};
