//! Spreadsheet-backed store: three tables of string rows.
//!
//! Each table starts with a header row; data rows are addressed by the id in
//! their `ID` column. Reads re-parse the whole table through the sheet
//! ingestion, so a row edited by hand shows up exactly as the next refresh of
//! the spreadsheet would. Writes lay cells out under the table's own header,
//! whatever order its columns are in.

use std::sync::{RwLock, RwLockWriteGuard};

use pasieka_analytics::Snapshot;
use pasieka_core::{CustomerId, OrderId, ProductId};
use pasieka_parties::Customer;
use pasieka_products::Product;
use pasieka_sales::Order;

use super::EntityStore;
use crate::error::StoreError;
use crate::ingest::sheet::{
    CUSTOMER_HEADERS, CUSTOMERS_TABLE, ORDER_HEADERS, ORDERS_TABLE, PRODUCT_HEADERS,
    PRODUCTS_TABLE, Row, Workbook, column_index, customer_to_row, customers_from_rows,
    fit_to_header, header_row, order_to_row, orders_from_rows, product_to_row,
    products_from_rows,
};

#[derive(Debug)]
struct Table {
    name: &'static str,
    kind: &'static str,
    headers: &'static [&'static str],
    rows: RwLock<Vec<Row>>,
}

impl Table {
    fn new(
        name: &'static str,
        kind: &'static str,
        headers: &'static [&'static str],
        rows: Vec<Row>,
    ) -> Self {
        Self {
            name,
            kind,
            headers,
            rows: RwLock::new(rows),
        }
    }

    fn poisoned(&self) -> StoreError {
        StoreError::Unavailable(format!("sheet {} lock poisoned", self.name))
    }

    fn read<T>(&self, parse: impl Fn(&[Row]) -> Vec<T>) -> Result<Vec<T>, StoreError> {
        let rows = self.rows.read().map_err(|_| self.poisoned())?;
        Ok(parse(rows.as_slice()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Row>>, StoreError> {
        self.rows.write().map_err(|_| self.poisoned())
    }

    /// Data row whose `ID` cell is `id`.
    fn row_index(rows: &[Row], id: &str) -> Option<usize> {
        let column = rows.first().and_then(|header| column_index(header, "ID"))?;
        rows.iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| row.get(column).map(String::as_str) == Some(id))
            .map(|(idx, _)| idx)
    }

    /// Append a data row, writing the header first into an empty sheet.
    fn append_row(&self, rows: &mut Vec<Row>, id: &str, record: Row) -> Result<(), StoreError> {
        if Self::row_index(rows, id).is_some() {
            return Err(StoreError::conflict(self.kind, id));
        }
        if rows.is_empty() {
            rows.push(header_row(self.headers));
        }
        let row = fit_to_header(record, self.headers, &rows[0], None);
        rows.push(row);
        tracing::debug!(sheet = self.name, id, "row appended");
        Ok(())
    }

    /// Overwrite the row whose `ID` cell is `id`.
    fn overwrite_row(&self, rows: &mut [Row], id: &str, record: Row) -> Result<(), StoreError> {
        if rows.len() < 2 {
            return Err(StoreError::not_found(self.kind, format!("{id} (sheet {} is empty)", self.name)));
        }
        let idx = Self::row_index(rows, id).ok_or_else(|| StoreError::not_found(self.kind, id))?;
        let row = fit_to_header(record, self.headers, &rows[0], Some(&rows[idx]));
        rows[idx] = row;
        tracing::debug!(sheet = self.name, id, row = idx + 1, "row updated");
        Ok(())
    }

    fn append(&self, id: &str, record: Row) -> Result<(), StoreError> {
        let mut rows = self.write()?;
        self.append_row(&mut rows, id, record)
    }

    fn overwrite(&self, id: &str, record: Row) -> Result<(), StoreError> {
        let mut rows = self.write()?;
        self.overwrite_row(&mut rows, id, record)
    }

    fn snapshot_rows(&self) -> Result<Vec<Row>, StoreError> {
        let rows = self.rows.read().map_err(|_| self.poisoned())?;
        Ok(rows.clone())
    }
}

/// Entity store over the shop spreadsheet (`Zamówienia`, `Produkty`, `Klienci`).
#[derive(Debug)]
pub struct SheetEntityStore {
    orders: Table,
    products: Table,
    customers: Table,
}

impl SheetEntityStore {
    /// Empty workbook: every table holds just its header row.
    pub fn new() -> Self {
        Self::from_workbook(Workbook {
            orders: vec![header_row(&ORDER_HEADERS)],
            products: vec![header_row(&PRODUCT_HEADERS)],
            customers: vec![header_row(&CUSTOMER_HEADERS)],
        })
    }

    /// Serve existing tables as they are, including their header layout.
    pub fn from_workbook(workbook: Workbook) -> Self {
        Self {
            orders: Table::new(ORDERS_TABLE, "order", &ORDER_HEADERS, workbook.orders),
            products: Table::new(PRODUCTS_TABLE, "product", &PRODUCT_HEADERS, workbook.products),
            customers: Table::new(
                CUSTOMERS_TABLE,
                "customer",
                &CUSTOMER_HEADERS,
                workbook.customers,
            ),
        }
    }

    /// Current raw contents of all three tables.
    pub fn workbook(&self) -> Result<Workbook, StoreError> {
        Ok(Workbook {
            orders: self.orders.snapshot_rows()?,
            products: self.products.snapshot_rows()?,
            customers: self.customers.snapshot_rows()?,
        })
    }
}

impl Default for SheetEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for SheetEntityStore {
    fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot::new(
            self.orders.read(orders_from_rows)?,
            self.products.read(products_from_rows)?,
            self.customers.read(customers_from_rows)?,
        ))
    }

    fn order(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        Ok(self.orders.read(orders_from_rows)?.into_iter().find(|o| &o.id == id))
    }

    fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.products.read(products_from_rows)?.into_iter().find(|p| &p.id == id))
    }

    fn customer(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError> {
        Ok(self.customers.read(customers_from_rows)?.into_iter().find(|c| &c.id == id))
    }

    fn insert_order(&self, order: Order) -> Result<(), StoreError> {
        self.orders.append(order.id.as_str(), order_to_row(&order))
    }

    fn update_order(&self, order: Order) -> Result<(), StoreError> {
        self.orders.overwrite(order.id.as_str(), order_to_row(&order))
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        self.products.append(product.id.as_str(), product_to_row(&product))
    }

    fn update_product(&self, product: Product) -> Result<(), StoreError> {
        self.products.overwrite(product.id.as_str(), product_to_row(&product))
    }

    fn insert_customer(&self, customer: Customer) -> Result<(), StoreError> {
        self.customers.append(customer.id.as_str(), customer_to_row(&customer))
    }

    fn update_customer(&self, customer: Customer) -> Result<(), StoreError> {
        self.customers.overwrite(customer.id.as_str(), customer_to_row(&customer))
    }

    fn record_order(&self, order: Order, first_order_customer: Customer) -> Result<Customer, StoreError> {
        let mut orders = self.orders.write()?;
        let mut customers = self.customers.write()?;
        if Table::row_index(&orders, order.id.as_str()).is_some() {
            return Err(StoreError::conflict(self.orders.kind, order.id.as_str()));
        }

        let existing = customers_from_rows(customers.as_slice())
            .into_iter()
            .find(|c| c.id == first_order_customer.id);
        let customer = match existing {
            Some(customer) => {
                let updated = customer.with_order_recorded(order.total);
                self.customers
                    .overwrite_row(&mut customers, updated.id.as_str(), customer_to_row(&updated))?;
                updated
            }
            None => {
                self.customers.append_row(
                    &mut customers,
                    first_order_customer.id.as_str(),
                    customer_to_row(&first_order_customer),
                )?;
                first_order_customer
            }
        };

        self.orders
            .append_row(&mut orders, order.id.as_str(), order_to_row(&order))?;
        Ok(customer)
    }
}
