//! Sales orders domain module.
//!
//! This crate contains the order record, its status vocabularies and the
//! rules for placing an order and moving it through fulfillment, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod date;
pub mod order;
pub mod status;

pub use date::OrderDate;
pub use order::{ChangeFulfillmentStatus, LineItem, Order, PlaceOrder, line_items_total};
pub use status::{FulfillmentStatus, PaymentStatus};
