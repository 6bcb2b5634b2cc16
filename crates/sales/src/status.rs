//! Payment and fulfillment status vocabularies.
//!
//! Both are stored as their Polish labels. Labels outside the known set are
//! preserved verbatim so a record never fails to load because someone typed a
//! status by hand into the spreadsheet.

use serde::{Deserialize, Serialize};

/// Where an order is in the fulfillment pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FulfillmentStatus {
    #[default]
    New,
    AwaitingPayment,
    Paid,
    InProgress,
    Shipped,
    Completed,
    Cancelled,
    Unlisted(String),
}

impl FulfillmentStatus {
    /// Every selectable status, in pipeline order.
    pub const ALL: [FulfillmentStatus; 7] = [
        FulfillmentStatus::New,
        FulfillmentStatus::AwaitingPayment,
        FulfillmentStatus::Paid,
        FulfillmentStatus::InProgress,
        FulfillmentStatus::Shipped,
        FulfillmentStatus::Completed,
        FulfillmentStatus::Cancelled,
    ];

    pub fn label(&self) -> &str {
        match self {
            FulfillmentStatus::New => "Nowe",
            FulfillmentStatus::AwaitingPayment => "Oczekuje na płatność",
            FulfillmentStatus::Paid => "Opłacone",
            FulfillmentStatus::InProgress => "W trakcie realizacji",
            FulfillmentStatus::Shipped => "Wysłane",
            FulfillmentStatus::Completed => "Zakończone",
            FulfillmentStatus::Cancelled => "Anulowane",
            FulfillmentStatus::Unlisted(label) => label,
        }
    }

    pub fn parse_known(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Whether the order's total counts as realized revenue.
    ///
    /// Only paid, shipped and completed orders qualify; new, unpaid,
    /// in-progress, cancelled and unlisted statuses do not.
    pub fn is_realized(&self) -> bool {
        matches!(
            self,
            FulfillmentStatus::Paid | FulfillmentStatus::Shipped | FulfillmentStatus::Completed
        )
    }
}

impl From<String> for FulfillmentStatus {
    fn from(value: String) -> Self {
        Self::parse_known(&value).unwrap_or(FulfillmentStatus::Unlisted(value))
    }
}

impl From<FulfillmentStatus> for String {
    fn from(value: FulfillmentStatus) -> Self {
        match value {
            FulfillmentStatus::Unlisted(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl core::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    #[default]
    AwaitingPayment,
    Paid,
    Unlisted(String),
}

impl PaymentStatus {
    pub fn label(&self) -> &str {
        match self {
            PaymentStatus::AwaitingPayment => "Oczekuje na płatność",
            PaymentStatus::Paid => "Opłacone",
            PaymentStatus::Unlisted(label) => label,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Oczekuje na płatność" => PaymentStatus::AwaitingPayment,
            "Opłacone" => PaymentStatus::Paid,
            _ => PaymentStatus::Unlisted(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Unlisted(label) => label,
            known => known.label().to_string(),
        }
    }
}
