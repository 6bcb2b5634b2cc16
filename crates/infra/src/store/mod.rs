//! Entity store boundary.
//!
//! The API reads and writes the three shop collections through
//! [`EntityStore`] without knowing whether a document database or a
//! spreadsheet sits behind it. Every implementation keeps records in the
//! order they were first written; first-seen groupings in the dashboard
//! depend on that.

pub mod in_memory;
pub mod sheet;

use std::sync::Arc;

use pasieka_analytics::Snapshot;
use pasieka_core::{CustomerId, OrderId, ProductId};
use pasieka_parties::Customer;
use pasieka_products::Product;
use pasieka_sales::Order;

use crate::error::StoreError;

pub use in_memory::InMemoryEntityStore;
pub use sheet::SheetEntityStore;

/// Read/write access to orders, products and customers.
///
/// `insert_*` fails with [`StoreError::Conflict`] when the id is taken;
/// `update_*` fails with [`StoreError::NotFound`] when it is not.
pub trait EntityStore: Send + Sync {
    /// All three collections as of now.
    fn snapshot(&self) -> Result<Snapshot, StoreError>;

    fn order(&self, id: &OrderId) -> Result<Option<Order>, StoreError>;
    fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;
    fn customer(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError>;

    fn insert_order(&self, order: Order) -> Result<(), StoreError>;
    fn update_order(&self, order: Order) -> Result<(), StoreError>;

    fn insert_product(&self, product: Product) -> Result<(), StoreError>;
    fn update_product(&self, product: Product) -> Result<(), StoreError>;

    fn insert_customer(&self, customer: Customer) -> Result<(), StoreError>;
    fn update_customer(&self, customer: Customer) -> Result<(), StoreError>;

    /// Save a new order and record it on its customer in one step.
    ///
    /// The customer with `first_order_customer.id` gets its counters bumped
    /// by the order total; when there is none, `first_order_customer` (which
    /// already counts this order) is inserted. Nothing is written when the
    /// order id is taken. Returns the customer as stored.
    fn record_order(&self, order: Order, first_order_customer: Customer) -> Result<Customer, StoreError>;
}

impl<S> EntityStore for Arc<S>
where
    S: EntityStore + ?Sized,
{
    fn snapshot(&self) -> Result<Snapshot, StoreError> {
        (**self).snapshot()
    }

    fn order(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        (**self).order(id)
    }

    fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        (**self).product(id)
    }

    fn customer(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).customer(id)
    }

    fn insert_order(&self, order: Order) -> Result<(), StoreError> {
        (**self).insert_order(order)
    }

    fn update_order(&self, order: Order) -> Result<(), StoreError> {
        (**self).update_order(order)
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        (**self).insert_product(product)
    }

    fn update_product(&self, product: Product) -> Result<(), StoreError> {
        (**self).update_product(product)
    }

    fn insert_customer(&self, customer: Customer) -> Result<(), StoreError> {
        (**self).insert_customer(customer)
    }

    fn update_customer(&self, customer: Customer) -> Result<(), StoreError> {
        (**self).update_customer(customer)
    }

    fn record_order(&self, order: Order, first_order_customer: Customer) -> Result<Customer, StoreError> {
        (**self).record_order(order, first_order_customer)
    }
}

/// Behaviour every store must share, run against each implementation.
#[cfg(test)]
pub(crate) mod contract {
    use super::*;
    use pasieka_core::Money;
    use pasieka_products::ProductType;
    use pasieka_sales::{FulfillmentStatus, OrderDate, PaymentStatus};

    pub fn order(id: &str, total: f64) -> Order {
        Order {
            id: OrderId::from_raw(id),
            customer_name: "Jan Kowalski".to_string(),
            seller: "Kacper".to_string(),
            date: OrderDate::parse("2025-01-15T10:00:00.000Z"),
            total: Money::from_major(total),
            payment_status: PaymentStatus::AwaitingPayment,
            fulfillment_status: FulfillmentStatus::New,
            products: Vec::new(),
        }
    }

    pub fn product(id: &str) -> Product {
        Product {
            id: ProductId::from_raw(id),
            name: format!("Miód {id}"),
            kind: ProductType::Honey,
            weight: "1kg".to_string(),
            price: Money::from_major(40.0),
            cost: Money::from_major(15.0),
            stock: 12,
        }
    }

    pub fn customer(name: &str) -> Customer {
        Customer {
            id: CustomerId::from_name(name),
            name: name.to_string(),
            email: None,
            order_count: 1,
            total_spent: Money::from_major(10.0),
        }
    }

    pub fn insert_then_read_back(store: &dyn EntityStore) {
        store.insert_order(order("o2", 20.0)).unwrap();
        store.insert_order(order("o1", 10.0)).unwrap();
        store.insert_product(product("p1")).unwrap();
        store.insert_customer(customer("Jan Kowalski")).unwrap();

        let snapshot = store.snapshot().unwrap();
        let ids: Vec<&str> = snapshot.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o1"], "insertion order is kept");
        assert_eq!(snapshot.products, vec![product("p1")]);
        assert_eq!(snapshot.customers, vec![customer("Jan Kowalski")]);

        assert_eq!(store.order(&OrderId::from_raw("o1")).unwrap(), Some(order("o1", 10.0)));
        assert!(store.product(&ProductId::from_raw("nope")).unwrap().is_none());
    }

    pub fn duplicate_insert_conflicts(store: &dyn EntityStore) {
        store.insert_product(product("p1")).unwrap();
        let err = store.insert_product(product("p1")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { kind: "product", .. }));
    }

    pub fn update_replaces_in_place(store: &dyn EntityStore) {
        store.insert_order(order("o1", 10.0)).unwrap();
        store.insert_order(order("o2", 20.0)).unwrap();

        let mut shipped = order("o1", 10.0);
        shipped.fulfillment_status = FulfillmentStatus::Shipped;
        store.update_order(shipped.clone()).unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.orders[0], shipped);
        assert_eq!(snapshot.orders.len(), 2);
    }

    pub fn update_missing_is_not_found(store: &dyn EntityStore) {
        let err = store.update_customer(customer("Ewa")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "customer", .. }));

        store.insert_customer(customer("Jan")).unwrap();
        let err = store.update_customer(customer("Ewa")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "customer", .. }));
    }

    pub fn record_order_creates_then_bumps_customer(store: &dyn EntityStore) {
        let first = Customer::from_first_order("Anna Nowak", Money::from_major(10.0)).unwrap();
        let mut second_order = order("o2", 15.5);
        second_order.customer_name = "Anna Nowak".to_string();
        let mut first_order = order("o1", 10.0);
        first_order.customer_name = "Anna Nowak".to_string();

        let created = store.record_order(first_order, first.clone()).unwrap();
        assert_eq!(created, first);

        let bumped = store.record_order(second_order, first.clone()).unwrap();
        assert_eq!(bumped.order_count, 2);
        assert_eq!(bumped.total_spent, Money::from_major(25.5));

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.orders.len(), 2);
        assert_eq!(snapshot.customers, vec![bumped]);
    }

    pub fn record_order_with_taken_id_writes_nothing(store: &dyn EntityStore) {
        store.insert_order(order("o1", 10.0)).unwrap();
        let newcomer = Customer::from_first_order("Ewa", Money::from_major(5.0)).unwrap();

        let err = store.record_order(order("o1", 5.0), newcomer).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { kind: "order", .. }));
        assert!(store.customer(&CustomerId::from_name("Ewa")).unwrap().is_none());
        assert_eq!(store.snapshot().unwrap().orders, vec![order("o1", 10.0)]);
    }

    pub fn concurrent_orders_are_all_counted(store: &dyn EntityStore) {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 25;

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                scope.spawn(move || {
                    for n in 0..PER_THREAD {
                        let mut placed = order(&format!("o-{t}-{n}"), 2.0);
                        placed.customer_name = "Jan Kowalski".to_string();
                        let first =
                            Customer::from_first_order("Jan Kowalski", Money::from_major(2.0)).unwrap();
                        store.record_order(placed, first).unwrap();
                    }
                });
            }
        });

        let total = THREADS * PER_THREAD;
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.orders.len(), total);
        assert_eq!(snapshot.customers.len(), 1);
        assert_eq!(snapshot.customers[0].order_count as usize, total);
        assert_eq!(snapshot.customers[0].total_spent, Money::from_major(2.0 * total as f64));
    }
}
