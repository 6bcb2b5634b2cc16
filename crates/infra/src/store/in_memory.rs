use std::sync::{RwLock, RwLockWriteGuard};

use pasieka_analytics::Snapshot;
use pasieka_core::{CustomerId, Entity, OrderId, ProductId};
use pasieka_parties::Customer;
use pasieka_products::Product;
use pasieka_sales::Order;

use super::EntityStore;
use crate::error::StoreError;

/// One keyed collection in insertion order.
#[derive(Debug)]
struct Collection<T> {
    kind: &'static str,
    rows: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Entity + Clone,
    T::Id: PartialEq + ToString,
{
    fn new(kind: &'static str, rows: Vec<T>) -> Self {
        Self {
            kind,
            rows: RwLock::new(rows),
        }
    }

    fn poisoned(&self) -> StoreError {
        StoreError::Unavailable(format!("{} collection lock poisoned", self.kind))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, StoreError> {
        self.rows.write().map_err(|_| self.poisoned())
    }

    fn list(&self) -> Result<Vec<T>, StoreError> {
        let rows = self.rows.read().map_err(|_| self.poisoned())?;
        Ok(rows.clone())
    }

    fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let rows = self.rows.read().map_err(|_| self.poisoned())?;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, record: T) -> Result<(), StoreError> {
        let mut rows = self.write()?;
        if rows.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::conflict(self.kind, record.id().to_string()));
        }
        rows.push(record);
        Ok(())
    }

    fn update(&self, record: T) -> Result<(), StoreError> {
        let mut rows = self.write()?;
        match rows.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::not_found(self.kind, record.id().to_string())),
        }
    }
}

/// In-memory document store.
///
/// Intended for tests/dev and for running the API from a JSON seed file.
#[derive(Debug)]
pub struct InMemoryEntityStore {
    orders: Collection<Order>,
    products: Collection<Product>,
    customers: Collection<Customer>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::default())
    }

    /// Start from existing collections, keeping their order.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            orders: Collection::new("order", snapshot.orders),
            products: Collection::new("product", snapshot.products),
            customers: Collection::new("customer", snapshot.customers),
        }
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for InMemoryEntityStore {
    fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot::new(
            self.orders.list()?,
            self.products.list()?,
            self.customers.list()?,
        ))
    }

    fn order(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        self.orders.get(id)
    }

    fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.products.get(id)
    }

    fn customer(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError> {
        self.customers.get(id)
    }

    fn insert_order(&self, order: Order) -> Result<(), StoreError> {
        self.orders.insert(order)
    }

    fn update_order(&self, order: Order) -> Result<(), StoreError> {
        self.orders.update(order)
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        self.products.insert(product)
    }

    fn update_product(&self, product: Product) -> Result<(), StoreError> {
        self.products.update(product)
    }

    fn insert_customer(&self, customer: Customer) -> Result<(), StoreError> {
        self.customers.insert(customer)
    }

    fn update_customer(&self, customer: Customer) -> Result<(), StoreError> {
        self.customers.update(customer)
    }

    fn record_order(&self, order: Order, first_order_customer: Customer) -> Result<Customer, StoreError> {
        // Orders before customers, the only place both locks are held.
        let mut orders = self.orders.write()?;
        let mut customers = self.customers.write()?;
        if orders.iter().any(|o| o.id == order.id) {
            return Err(StoreError::conflict(self.orders.kind, order.id.as_str()));
        }

        let customer = match customers.iter().position(|c| c.id == first_order_customer.id) {
            Some(idx) => {
                let updated = customers[idx].with_order_recorded(order.total);
                customers[idx] = updated.clone();
                updated
            }
            None => {
                customers.push(first_order_customer.clone());
                first_order_customer
            }
        };
        orders.push(order);
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::contract;

    #[test]
    fn insert_then_read_back() {
        contract::insert_then_read_back(&InMemoryEntityStore::new());
    }

    #[test]
    fn duplicate_insert_conflicts() {
        contract::duplicate_insert_conflicts(&InMemoryEntityStore::new());
    }

    #[test]
    fn update_replaces_in_place() {
        contract::update_replaces_in_place(&InMemoryEntityStore::new());
    }

    #[test]
    fn update_missing_is_not_found() {
        contract::update_missing_is_not_found(&InMemoryEntityStore::new());
    }

    #[test]
    fn record_order_creates_then_bumps_customer() {
        contract::record_order_creates_then_bumps_customer(&InMemoryEntityStore::new());
    }

    #[test]
    fn record_order_with_taken_id_writes_nothing() {
        contract::record_order_with_taken_id_writes_nothing(&InMemoryEntityStore::new());
    }

    #[test]
    fn concurrent_orders_are_all_counted() {
        contract::concurrent_orders_are_all_counted(&InMemoryEntityStore::new());
    }

    #[test]
    fn seeded_store_serves_seed_snapshot() {
        let seed = Snapshot::new(vec![contract::order("o1", 5.0)], vec![], vec![]);
        let store = InMemoryEntityStore::from_snapshot(seed.clone());
        assert_eq!(store.snapshot().unwrap(), seed);
    }
}
