//! Boundary ingestion: loosely-typed store payloads into typed records.
//!
//! Two payload families reach the service: JSON documents from the document
//! database and string rows from spreadsheet tables. Both may miss fields or
//! carry numbers as text. Everything is defaulted here (missing text → empty,
//! missing or unparseable numbers → 0) so the analytics never see a partial
//! record. Each defaulted field is counted and reported once per collection
//! at `warn` level.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use pasieka_analytics::Snapshot;
use pasieka_core::{CustomerId, Money, OrderId, ProductId};
use pasieka_parties::Customer;
use pasieka_products::{Product, ProductType};
use pasieka_sales::{FulfillmentStatus, LineItem, Order, OrderDate, PaymentStatus};

use crate::error::IngestError;

/// Order document as stored. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrder {
    pub id: Value,
    pub customer_name: Value,
    pub seller: Value,
    pub date: Value,
    pub total: Value,
    pub payment_status: Value,
    pub fulfillment_status: Value,
    pub products: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLineItem {
    pub product_id: Value,
    pub name: Value,
    pub weight: Value,
    pub price: Value,
    pub quantity: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub id: Value,
    pub name: Value,
    #[serde(rename = "type")]
    pub kind: Value,
    pub weight: Value,
    pub price: Value,
    pub cost: Value,
    pub stock: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCustomer {
    pub id: Value,
    pub name: Value,
    pub email: Value,
    pub order_count: Value,
    pub total_spent: Value,
}

/// Counts of defaulted fields for one collection.
#[derive(Debug, Default)]
struct Defaults {
    counts: BTreeMap<&'static str, usize>,
}

impl Defaults {
    fn note(&mut self, field: &'static str) {
        *self.counts.entry(field).or_insert(0) += 1;
    }

    fn text(&mut self, field: &'static str, value: &Value) -> String {
        text_of(value).unwrap_or_else(|| {
            self.note(field);
            String::new()
        })
    }

    fn money(&mut self, field: &'static str, value: &Value) -> Money {
        match number_of(value) {
            Some(n) => Money::from_major(n),
            None => {
                self.note(field);
                Money::ZERO
            }
        }
    }

    fn integer(&mut self, field: &'static str, value: &Value) -> i64 {
        match number_of(value) {
            Some(n) => n.trunc() as i64,
            None => {
                self.note(field);
                0
            }
        }
    }

    fn quantity(&mut self, value: &Value) -> u32 {
        let n = self.integer("quantity", value);
        u32::try_from(n.max(0)).unwrap_or(u32::MAX)
    }

    fn report(&self, collection: &'static str) {
        for (field, count) in &self.counts {
            tracing::warn!(collection, field, count, "defaulted missing or malformed fields");
        }
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Parse numeric text; accepts a decimal comma (`"12,50"`).
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Id from the record, else from the enclosing map key, else a fresh one.
fn record_id(defaults: &mut Defaults, value: &Value, key: Option<&str>) -> String {
    match text_of(value).filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => match key {
            Some(key) => key.to_string(),
            None => {
                defaults.note("id");
                OrderId::generate().to_string()
            }
        },
    }
}

fn line_items(defaults: &mut Defaults, value: &Value) -> Vec<LineItem> {
    let Value::Array(items) = value else {
        if !value.is_null() {
            defaults.note("products");
        }
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<RawLineItem>(item.clone()) {
            Ok(raw) => Some(line_item(defaults, raw)),
            Err(_) => {
                defaults.note("products");
                None
            }
        })
        .collect()
}

fn line_item(defaults: &mut Defaults, raw: RawLineItem) -> LineItem {
    LineItem {
        product_id: ProductId::from_raw(defaults.text("productId", &raw.product_id)),
        name: text_of(&raw.name).unwrap_or_default(),
        weight: text_of(&raw.weight).unwrap_or_default(),
        price: defaults.money("price", &raw.price),
        quantity: defaults.quantity(&raw.quantity),
    }
}

fn order(defaults: &mut Defaults, raw: RawOrder, key: Option<&str>) -> Order {
    Order {
        id: OrderId::from_raw(record_id(defaults, &raw.id, key)),
        customer_name: defaults.text("customerName", &raw.customer_name),
        seller: defaults.text("seller", &raw.seller),
        date: OrderDate::parse(defaults.text("date", &raw.date)),
        total: defaults.money("total", &raw.total),
        payment_status: PaymentStatus::from(defaults.text("paymentStatus", &raw.payment_status)),
        fulfillment_status: FulfillmentStatus::from(
            defaults.text("fulfillmentStatus", &raw.fulfillment_status),
        ),
        products: line_items(defaults, &raw.products),
    }
}

fn product(defaults: &mut Defaults, raw: RawProduct, key: Option<&str>) -> Product {
    Product {
        id: ProductId::from_raw(record_id(defaults, &raw.id, key)),
        name: defaults.text("name", &raw.name),
        kind: ProductType::from(defaults.text("type", &raw.kind)),
        weight: text_of(&raw.weight).unwrap_or_default(),
        price: defaults.money("price", &raw.price),
        cost: defaults.money("cost", &raw.cost),
        stock: defaults.integer("stock", &raw.stock),
    }
}

fn customer(defaults: &mut Defaults, raw: RawCustomer, key: Option<&str>) -> Customer {
    let name = defaults.text("name", &raw.name);
    let id = match text_of(&raw.id).filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => key
            .map(str::to_string)
            .unwrap_or_else(|| CustomerId::from_name(&name).to_string()),
    };
    Customer {
        id: CustomerId::from_raw(id),
        email: text_of(&raw.email).filter(|e| !e.trim().is_empty()),
        order_count: u32::try_from(defaults.integer("orderCount", &raw.order_count).max(0))
            .unwrap_or(u32::MAX),
        total_spent: defaults.money("totalSpent", &raw.total_spent),
        name,
    }
}

/// Walk a collection given either as an array or as an id → record map.
///
/// Map entries are visited in key order. Entries that are not objects are
/// dropped.
fn collection<R, T>(
    value: &Value,
    name: &'static str,
    convert: impl Fn(&mut Defaults, R, Option<&str>) -> T,
) -> Vec<T>
where
    R: for<'de> Deserialize<'de>,
{
    let mut defaults = Defaults::default();
    let entries: Vec<(Option<&str>, &Value)> = match value {
        Value::Array(items) => items.iter().map(|v| (None, v)).collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (Some(k.as_str()), v)).collect(),
        Value::Null => Vec::new(),
        _ => {
            defaults.note("collection");
            Vec::new()
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        match serde_json::from_value::<R>(entry.clone()) {
            Ok(raw) => records.push(convert(&mut defaults, raw, key)),
            Err(_) => defaults.note("record"),
        }
    }
    defaults.report(name);
    records
}

pub fn orders_from_value(value: &Value) -> Vec<Order> {
    collection(value, "orders", order)
}

pub fn products_from_value(value: &Value) -> Vec<Product> {
    collection(value, "products", product)
}

pub fn customers_from_value(value: &Value) -> Vec<Customer> {
    collection(value, "customers", customer)
}

/// Read a whole `{orders, products, customers}` document.
///
/// Missing collections are empty. Only a non-object top level is an error.
pub fn snapshot_from_value(value: &Value) -> Result<Snapshot, IngestError> {
    let Value::Object(doc) = value else {
        return Err(IngestError::Shape(
            "expected an object with orders, products and customers".to_string(),
        ));
    };
    let field = |name: &str| doc.get(name).unwrap_or(&Value::Null);
    Ok(Snapshot::new(
        orders_from_value(field("orders")),
        products_from_value(field("products")),
        customers_from_value(field("customers")),
    ))
}

pub fn snapshot_from_json(json: &str) -> Result<Snapshot, IngestError> {
    let value: Value = serde_json::from_str(json)?;
    snapshot_from_value(&value)
}

pub mod sheet {
    //! Spreadsheet tables: a header row followed by string rows.

    use std::collections::HashMap;

    use serde_json::Value;

    use super::{Defaults, customer, order, parse_number, product};
    use super::{RawCustomer, RawOrder, RawProduct};
    use crate::error::IngestError;
    use pasieka_core::Money;
    use pasieka_parties::Customer;
    use pasieka_products::Product;
    use pasieka_sales::{LineItem, Order};

    pub const ORDERS_TABLE: &str = "Zamówienia";
    pub const PRODUCTS_TABLE: &str = "Produkty";
    pub const CUSTOMERS_TABLE: &str = "Klienci";

    pub const ORDER_HEADERS: [&str; 8] = [
        "ID",
        "Klient",
        "Sprzedawca",
        "Data",
        "Suma",
        "StatusPłatności",
        "StatusRealizacji",
        "Produkty",
    ];
    pub const PRODUCT_HEADERS: [&str; 7] =
        ["ID", "Nazwa", "Typ", "Waga", "Cena", "Koszt", "StanMagazynowy"];
    pub const CUSTOMER_HEADERS: [&str; 5] =
        ["ID", "Nazwa", "Email", "LiczbaZamówień", "SumaWydana"];

    pub type Row = Vec<String>;

    /// A named-column view over one data row.
    struct Cells<'a> {
        columns: &'a HashMap<&'a str, usize>,
        row: &'a [String],
    }

    impl Cells<'_> {
        fn get(&self, header: &str) -> &str {
            self.columns
                .get(header)
                .and_then(|idx| self.row.get(*idx))
                .map(String::as_str)
                .unwrap_or("")
        }

        /// Text cell; an empty cell reads as absent.
        fn text(&self, header: &str) -> Value {
            match self.get(header) {
                "" => Value::Null,
                cell => Value::String(cell.to_string()),
            }
        }

        /// Numeric cell; unparseable text reads as absent (→ 0).
        fn number(&self, header: &str) -> Value {
            parse_number(self.get(header))
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }

        /// JSON array cell; empty or malformed reads as `[]`.
        fn json_array(&self, header: &str) -> Value {
            match serde_json::from_str::<Value>(self.get(header)) {
                Ok(value @ Value::Array(_)) => value,
                _ => Value::Array(Vec::new()),
            }
        }
    }

    /// Map each header to its column index. The first occurrence wins.
    fn header_map(header: &[String]) -> HashMap<&str, usize> {
        let mut columns = HashMap::with_capacity(header.len());
        for (idx, name) in header.iter().enumerate() {
            columns.entry(name.trim()).or_insert(idx);
        }
        columns
    }

    /// Rows are addressed by their `ID` cell, so a blank one stays blank
    /// instead of getting a generated id.
    const KEEP_BLANK_ID: Option<&str> = Some("");

    fn parse_table<T>(
        rows: &[Row],
        name: &'static str,
        convert: impl Fn(&mut Defaults, Cells<'_>) -> T,
    ) -> Vec<T> {
        // A table needs a header plus at least one data row.
        if rows.len() < 2 {
            return Vec::new();
        }
        let columns = header_map(&rows[0]);
        let mut defaults = Defaults::default();
        let records = rows[1..]
            .iter()
            .map(|row| convert(&mut defaults, Cells { columns: &columns, row }))
            .collect();
        defaults.report(name);
        records
    }

    pub fn orders_from_rows(rows: &[Row]) -> Vec<Order> {
        parse_table(rows, ORDERS_TABLE, |defaults, cells| {
            let raw = RawOrder {
                id: cells.text("ID"),
                customer_name: cells.text("Klient"),
                seller: cells.text("Sprzedawca"),
                date: cells.text("Data"),
                total: cells.number("Suma"),
                payment_status: cells.text("StatusPłatności"),
                fulfillment_status: cells.text("StatusRealizacji"),
                products: cells.json_array("Produkty"),
            };
            order(defaults, raw, KEEP_BLANK_ID)
        })
    }

    pub fn products_from_rows(rows: &[Row]) -> Vec<Product> {
        parse_table(rows, PRODUCTS_TABLE, |defaults, cells| {
            let raw = RawProduct {
                id: cells.text("ID"),
                name: cells.text("Nazwa"),
                kind: cells.text("Typ"),
                weight: cells.text("Waga"),
                price: cells.number("Cena"),
                cost: cells.number("Koszt"),
                stock: cells.number("StanMagazynowy"),
            };
            product(defaults, raw, KEEP_BLANK_ID)
        })
    }

    pub fn customers_from_rows(rows: &[Row]) -> Vec<Customer> {
        parse_table(rows, CUSTOMERS_TABLE, |defaults, cells| {
            let raw = RawCustomer {
                id: cells.text("ID"),
                name: cells.text("Nazwa"),
                email: cells.text("Email"),
                order_count: cells.number("LiczbaZamówień"),
                total_spent: cells.number("SumaWydana"),
            };
            customer(defaults, raw, None)
        })
    }

    fn money_cell(amount: Money) -> String {
        amount.to_major().to_string()
    }

    fn line_items_cell(items: &[LineItem]) -> String {
        serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Encode in [`ORDER_HEADERS`] column order.
    pub fn order_to_row(order: &Order) -> Row {
        vec![
            order.id.to_string(),
            order.customer_name.clone(),
            order.seller.clone(),
            order.date.raw().to_string(),
            money_cell(order.total),
            order.payment_status.label().to_string(),
            order.fulfillment_status.label().to_string(),
            line_items_cell(&order.products),
        ]
    }

    /// Encode in [`PRODUCT_HEADERS`] column order.
    pub fn product_to_row(product: &Product) -> Row {
        vec![
            product.id.to_string(),
            product.name.clone(),
            product.kind.label().to_string(),
            product.weight.clone(),
            money_cell(product.price),
            money_cell(product.cost),
            product.stock.to_string(),
        ]
    }

    /// Encode in [`CUSTOMER_HEADERS`] column order.
    pub fn customer_to_row(customer: &Customer) -> Row {
        vec![
            customer.id.to_string(),
            customer.name.clone(),
            customer.email.clone().unwrap_or_default(),
            customer.order_count.to_string(),
            money_cell(customer.total_spent),
        ]
    }

    pub fn header_row(headers: &[&str]) -> Row {
        headers.iter().map(|h| h.to_string()).collect()
    }

    /// Column of `name` in a sheet's header row, matched like the readers do.
    pub fn column_index(header: &[String], name: &str) -> Option<usize> {
        header_map(header).get(name).copied()
    }

    /// Lay out `record` (encoded in `headers` order) under a sheet's own
    /// `header` row.
    ///
    /// Columns the record has no value for keep the cell from `previous`, so
    /// extra hand-added columns survive an update. Record fields the sheet has
    /// no column for are dropped.
    pub fn fit_to_header(
        record: Row,
        headers: &[&str],
        header: &[String],
        previous: Option<&[String]>,
    ) -> Row {
        let previous = previous.unwrap_or(&[]);
        let width = header.len().max(previous.len());
        let mut row: Row = (0..width)
            .map(|idx| previous.get(idx).cloned().unwrap_or_default())
            .collect();
        let columns = header_map(header);
        for (name, cell) in headers.iter().zip(record) {
            if let Some(&idx) = columns.get(name) {
                row[idx] = cell;
            }
        }
        row
    }

    /// Workbook document: `{"Zamówienia": [[...], ...], "Produkty": ..., "Klienci": ...}`.
    ///
    /// Cells may be strings, numbers or booleans; anything else reads as empty.
    /// A missing table is empty.
    pub fn workbook_from_json(json: &str) -> Result<Workbook, IngestError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(doc) = value else {
            return Err(IngestError::Shape("expected an object of tables".to_string()));
        };
        let table = |name: &str| -> Vec<Row> {
            let Some(Value::Array(rows)) = doc.get(name) else {
                return Vec::new();
            };
            rows.iter()
                .map(|row| match row {
                    Value::Array(cells) => cells
                        .iter()
                        .map(|cell| super::text_of(cell).unwrap_or_default())
                        .collect(),
                    _ => Vec::new(),
                })
                .collect()
        };
        Ok(Workbook {
            orders: table(ORDERS_TABLE),
            products: table(PRODUCTS_TABLE),
            customers: table(CUSTOMERS_TABLE),
        })
    }

    /// The three tables of the shop spreadsheet.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Workbook {
        pub orders: Vec<Row>,
        pub products: Vec<Row>,
        pub customers: Vec<Row>,
    }
}

#[cfg(test)]
mod tests {
    use super::sheet::*;
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn documents_with_missing_fields_are_defaulted() {
        let snapshot = snapshot_from_value(&json!({
            "orders": [
                { "id": "o1", "total": "12,50", "fulfillmentStatus": "Opłacone",
                  "products": [{ "productId": "p1", "price": 5, "quantity": "2" }] },
                { "id": "o2" }
            ],
            "products": [{ "id": "p1", "name": "Miód lipowy", "type": "Miód", "price": 40 }]
        }))
        .unwrap();

        assert_eq!(snapshot.orders.len(), 2);
        let first = &snapshot.orders[0];
        assert_eq!(first.total, Money::from_minor(1250));
        assert!(first.is_realized());
        assert_eq!(first.products[0].quantity, 2);
        assert_eq!(first.products[0].line_total(), Money::from_major(10.0));

        let second = &snapshot.orders[1];
        assert_eq!(second.total, Money::ZERO);
        assert_eq!(second.customer_name, "");
        assert!(!second.date.is_valid());
        assert!(second.products.is_empty());

        assert_eq!(snapshot.products[0].cost, Money::ZERO);
        assert_eq!(snapshot.products[0].stock, 0);
        assert!(snapshot.customers.is_empty());
    }

    #[test]
    fn map_shaped_collections_take_ids_from_keys() {
        let orders = orders_from_value(&json!({
            "b-key": { "customerName": "Ewa", "total": 3 },
            "a-key": { "id": "explicit", "total": 1 }
        }));
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["explicit", "b-key"]);
    }

    #[test]
    fn customers_without_id_are_keyed_by_name_slug() {
        let customers = customers_from_value(&json!([{ "name": "Anna Nowak", "email": "" }]));
        assert_eq!(customers[0].id.as_str(), "anna-nowak");
        assert_eq!(customers[0].email, None);
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(matches!(snapshot_from_json("[1,2]"), Err(IngestError::Shape(_))));
        assert!(matches!(snapshot_from_json("{"), Err(IngestError::Json(_))));
    }

    #[test]
    fn sheet_with_header_only_is_empty() {
        assert!(orders_from_rows(&[header_row(&ORDER_HEADERS)]).is_empty());
        assert!(products_from_rows(&[]).is_empty());
    }

    #[test]
    fn sheet_rows_use_header_positions_and_default_bad_cells() {
        let rows = vec![
            // Columns deliberately shuffled and one missing.
            row(&["Nazwa", "ID", "Cena", "Typ", "StanMagazynowy"]),
            row(&["Pyłek", "p2", "abc", "Pyłek pszczeli", "7"]),
            row(&["Miód", "p1", "35.5"]),
        ];
        let products = products_from_rows(&rows);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id.as_str(), "p2");
        assert_eq!(products[0].price, Money::ZERO);
        assert_eq!(products[0].kind, ProductType::BeePollen);
        assert_eq!(products[0].stock, 7);
        assert_eq!(products[1].price, Money::from_major(35.5));
        assert_eq!(products[1].cost, Money::ZERO);
        assert_eq!(products[1].stock, 0);
    }

    #[test]
    fn order_rows_parse_line_items_cell() {
        let rows = vec![
            header_row(&ORDER_HEADERS),
            row(&[
                "o1",
                "Jan",
                "Julian",
                "2025-05-01",
                "80",
                "Opłacone",
                "Wysłane",
                r#"[{"productId":"p1","name":"Miód","weight":"1kg","price":40,"quantity":2}]"#,
            ]),
            row(&["o2", "Ewa", "Kacper", "2025-05-02", "10", "", "Nowe", "not json"]),
        ];
        let orders = orders_from_rows(&rows);
        assert_eq!(orders[0].products.len(), 1);
        assert_eq!(orders[0].products[0].quantity, 2);
        assert_eq!(orders[0].payment_status, PaymentStatus::Paid);
        assert_eq!(orders[0].fulfillment_status, FulfillmentStatus::Shipped);
        assert!(orders[1].products.is_empty());
    }

    #[test]
    fn encoded_rows_follow_header_order() {
        let rows = vec![
            header_row(&CUSTOMER_HEADERS),
            row(&["anna", "Anna", "anna@example.com", "3", "120.5"]),
        ];
        let customers = customers_from_rows(&rows);
        assert_eq!(customer_to_row(&customers[0]), rows[1]);
        assert_eq!(customers[0].order_count, 3);
    }

    #[test]
    fn fitted_rows_follow_the_sheets_own_header() {
        let header = row(&["Nazwa", "Notatki", "ID", "Cena"]);
        let record = row(&["p1", "Miód", "Miód", "1kg", "40", "15", "12"]);

        let fresh = fit_to_header(record.clone(), &PRODUCT_HEADERS, &header, None);
        assert_eq!(fresh, row(&["Miód", "", "p1", "40"]));

        let previous = row(&["Stary", "od sąsiada", "p1", "35"]);
        let updated = fit_to_header(record, &PRODUCT_HEADERS, &header, Some(&previous));
        assert_eq!(updated, row(&["Miód", "od sąsiada", "p1", "40"]));

        assert_eq!(column_index(&header, "ID"), Some(2));
        assert_eq!(column_index(&header, "Waga"), None);
    }

    #[test]
    fn workbook_reads_mixed_cells_and_missing_tables() {
        let workbook = workbook_from_json(
            r#"{"Produkty": [["ID","Nazwa","Cena"], ["p1","Miód",40], ["p2",null,true]]}"#,
        )
        .unwrap();
        assert!(workbook.orders.is_empty());
        assert_eq!(workbook.products[1], row(&["p1", "Miód", "40"]));
        assert_eq!(workbook.products[2], row(&["p2", "", "true"]));
    }

    fn product_strategy() -> impl Strategy<Value = Product> {
        (
            "[a-z0-9-]{1,12}",
            "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]",
            prop::sample::select(ProductType::ALL.to_vec()),
            "[0-9]{1,4}(g|kg)",
            0i64..1_000_000,
            0i64..1_000_000,
            -50i64..100_000,
        )
            .prop_map(|(id, name, kind, weight, price, cost, stock)| Product {
                id: ProductId::from_raw(id),
                name,
                kind,
                weight,
                price: Money::from_minor(price),
                cost: Money::from_minor(cost),
                stock,
            })
    }

    proptest! {
        #[test]
        fn products_written_under_any_header_order_read_back_unchanged(
            product in product_strategy(),
            header in Just(PRODUCT_HEADERS.to_vec()).prop_shuffle(),
        ) {
            let header = header_row(&header);
            let written = fit_to_header(product_to_row(&product), &PRODUCT_HEADERS, &header, None);
            let read = products_from_rows(&[header, written]);
            prop_assert_eq!(read, vec![product]);
        }
    }
}
