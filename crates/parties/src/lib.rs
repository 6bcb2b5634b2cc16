//! Customers domain module.
//!
//! This crate contains the customer record, the name-derived customer key and
//! the rules for registering and editing customers, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{ContactDetails, Customer};
