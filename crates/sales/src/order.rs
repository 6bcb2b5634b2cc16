use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pasieka_core::{DomainError, DomainResult, Entity, Money, OrderId, ProductId, ValueObject};
use pasieka_products::Product;

use crate::date::OrderDate;
use crate::status::{FulfillmentStatus, PaymentStatus};

/// Order line: a product reference plus the name, weight and price copied
/// from the catalog when the line was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weight: String,
    pub price: Money,
    pub quantity: u32,
}

impl ValueObject for LineItem {}

impl LineItem {
    /// Snapshot a catalog product into a new order line.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            weight: product.weight.clone(),
            price: product.price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Sum of `price × quantity` over a set of lines.
pub fn line_items_total(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// Order record.
///
/// `total` is whatever was computed when the order was saved. It normally
/// equals [`line_items_total`] of `products`, but nothing downstream may
/// assume so: revenue figures always read `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub seller: String,
    pub date: OrderDate,
    pub total: Money,
    pub payment_status: PaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    pub products: Vec<LineItem>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: PlaceOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub customer_name: String,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub products: Vec<LineItem>,
}

/// Command: ChangeFulfillmentStatus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeFulfillmentStatus {
    pub status: FulfillmentStatus,
}

impl Order {
    /// Place a new order.
    ///
    /// The total is computed from the submitted lines; the order starts as
    /// `Nowe` awaiting payment. `default_seller` fills in a missing seller and
    /// `now` a missing date.
    pub fn place(
        id: OrderId,
        cmd: PlaceOrder,
        default_seller: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let customer_name = cmd.customer_name.trim();
        if customer_name.is_empty() {
            return Err(DomainError::validation("customer name must not be blank"));
        }

        if cmd.products.is_empty() {
            return Err(DomainError::validation("order must contain at least one product"));
        }

        for (idx, item) in cmd.products.iter().enumerate() {
            if item.quantity == 0 {
                return Err(DomainError::validation("quantity must be at least 1"));
            }
            if item.price.is_negative() {
                return Err(DomainError::validation("price must not be negative"));
            }
            if cmd.products[..idx]
                .iter()
                .any(|earlier| earlier.product_id == item.product_id)
            {
                return Err(DomainError::conflict(format!(
                    "product {} appears twice in the order",
                    item.product_id
                )));
            }
        }

        let seller = cmd
            .seller
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(default_seller)
            .to_string();

        Ok(Self {
            id,
            customer_name: customer_name.to_string(),
            seller,
            date: OrderDate::from_instant(cmd.date.unwrap_or(now)),
            total: line_items_total(&cmd.products),
            payment_status: PaymentStatus::AwaitingPayment,
            fulfillment_status: FulfillmentStatus::New,
            products: cmd.products,
        })
    }

    /// Move the order to another fulfillment status.
    pub fn with_fulfillment_status(&self, cmd: ChangeFulfillmentStatus) -> DomainResult<Self> {
        if let FulfillmentStatus::Unlisted(label) = &cmd.status {
            return Err(DomainError::validation(format!(
                "unknown fulfillment status: {label}"
            )));
        }
        Ok(Self {
            fulfillment_status: cmd.status,
            ..self.clone()
        })
    }

    pub fn is_realized(&self) -> bool {
        self.fulfillment_status.is_realized()
    }

    /// Case-insensitive match against a customer's display name.
    pub fn belongs_to(&self, customer_name: &str) -> bool {
        self.customer_name.to_lowercase() == customer_name.to_lowercase()
    }
}
