//! Product catalog domain module.
//!
//! Products are plain records owned by the entity store; this crate holds the
//! record shape, the enumerated product types and the validation rules applied
//! when staff create or edit a product (no IO, no HTTP, no storage).

pub mod product;

pub use product::{LOW_STOCK_THRESHOLD, Product, ProductDetails, ProductType};
