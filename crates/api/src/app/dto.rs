use serde::{Deserialize, Serialize};

use pasieka_analytics::CustomerSummary;
use pasieka_products::Product;
use pasieka_sales::Order;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Catalog row with its stock warning.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub low_stock: bool,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            low_stock: product.is_low_stock(),
            product,
        }
    }
}

/// Customer with recomputed stats and their orders.
#[derive(Debug, Serialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub summary: CustomerSummary,
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}
