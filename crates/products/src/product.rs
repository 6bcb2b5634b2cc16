use serde::{Deserialize, Serialize};

use pasieka_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Stock level at or below which a product counts as running out.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Product category.
///
/// The labels are the Polish names stored in the database and shown to staff.
/// A label outside the known set is kept verbatim in [`ProductType::Unlisted`]
/// so that records written by older forms still group correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    #[default]
    Honey,
    BeePollen,
    BeeBread,
    Propolis,
    Other,
    Unlisted(String),
}

impl ProductType {
    /// Every selectable type, in form order.
    pub const ALL: [ProductType; 5] = [
        ProductType::Honey,
        ProductType::BeePollen,
        ProductType::BeeBread,
        ProductType::Propolis,
        ProductType::Other,
    ];

    pub fn label(&self) -> &str {
        match self {
            ProductType::Honey => "Miód",
            ProductType::BeePollen => "Pyłek pszczeli",
            ProductType::BeeBread => "Pierzga",
            ProductType::Propolis => "Propolis",
            ProductType::Other => "Inne",
            ProductType::Unlisted(label) => label,
        }
    }

    /// Parse one of the selectable labels; `None` for anything else.
    pub fn parse_known(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl From<String> for ProductType {
    fn from(value: String) -> Self {
        Self::parse_known(&value).unwrap_or(ProductType::Unlisted(value))
    }
}

impl From<ProductType> for String {
    fn from(value: ProductType) -> Self {
        match value {
            ProductType::Unlisted(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    /// Free-text pack size, e.g. `"500g"`.
    pub weight: String,
    pub price: Money,
    pub cost: Money,
    pub stock: i64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Create a catalog record from validated form input.
    pub fn create(id: ProductId, details: ProductDetails) -> DomainResult<Self> {
        details.validate()?;
        Ok(details.into_product(id))
    }

    /// Replace every editable field, keeping the identity.
    pub fn updated(&self, details: ProductDetails) -> DomainResult<Self> {
        details.validate()?;
        Ok(details.into_product(self.id.clone()))
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }

    /// Gross margin per unit (may be negative).
    pub fn unit_margin(&self) -> Money {
        self.price - self.cost
    }
}

/// Editable product fields, as submitted by the product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ProductType,
    #[serde(default)]
    pub weight: String,
    pub price: Money,
    #[serde(default)]
    pub cost: Money,
    #[serde(default)]
    pub stock: i64,
}

impl ProductDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be blank"));
        }
        if let ProductType::Unlisted(label) = &self.kind {
            return Err(DomainError::validation(format!(
                "unknown product type: {label}"
            )));
        }
        if self.price.is_negative() {
            return Err(DomainError::validation("price must not be negative"));
        }
        if self.cost.is_negative() {
            return Err(DomainError::validation("cost must not be negative"));
        }
        if self.stock < 0 {
            return Err(DomainError::validation("stock must not be negative"));
        }
        Ok(())
    }

    fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            kind: self.kind,
            weight: self.weight.trim().to_string(),
            price: self.price,
            cost: self.cost,
            stock: self.stock,
        }
    }
}
