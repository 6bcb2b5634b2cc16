use serde::{Deserialize, Serialize};

use pasieka_core::{CustomerId, DomainError, DomainResult, Entity, Money};

/// Customer record.
///
/// `order_count` and `total_spent` are a cache maintained when orders are
/// placed. They drift whenever an order is edited outside the order form, so
/// reporting recomputes both from the order list instead of reading them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub order_count: u32,
    #[serde(default)]
    pub total_spent: Money,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Editable customer fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactDetails {
    fn validated(self) -> DomainResult<(String, Option<String>)> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(DomainError::validation(format!("invalid email: {email}")));
            }
        }

        Ok((name, email))
    }
}

impl Customer {
    /// Register a customer keyed by the slug of their name.
    pub fn register(details: ContactDetails) -> DomainResult<Self> {
        let (name, email) = details.validated()?;
        Ok(Self {
            id: CustomerId::from_name(&name),
            name,
            email,
            order_count: 0,
            total_spent: Money::ZERO,
        })
    }

    /// Customer created implicitly by their first order.
    pub fn from_first_order(name: &str, order_total: Money) -> DomainResult<Self> {
        let customer = Self::register(ContactDetails {
            name: name.to_string(),
            email: None,
        })?;
        Ok(customer.with_order_recorded(order_total))
    }

    /// Bump the cached counters for one more order.
    pub fn with_order_recorded(&self, order_total: Money) -> Self {
        Self {
            order_count: self.order_count.saturating_add(1),
            total_spent: self.total_spent + order_total,
            ..self.clone()
        }
    }

    /// Edit name and email; the id stays the one assigned at registration.
    pub fn updated(&self, details: ContactDetails) -> DomainResult<Self> {
        let (name, email) = details.validated()?;
        Ok(Self {
            name,
            email,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> ContactDetails {
        ContactDetails {
            name: name.to_string(),
            email: Some("anna@example.com".to_string()),
        }
    }

    #[test]
    fn register_derives_id_from_name() {
        let customer = Customer::register(details(" Anna  Nowak ")).unwrap();
        assert_eq!(customer.id.as_str(), "anna-nowak");
        assert_eq!(customer.name, "Anna Nowak");
        assert_eq!(customer.order_count, 0);
    }

    #[test]
    fn name_cannot_be_empty() {
        let err = Customer::register(details("   ")).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name cannot be empty") => {}
            _ => panic!("Expected validation error"),
        }
    }

    #[test]
    fn blank_email_becomes_none_and_bad_email_is_rejected() {
        let customer = Customer::register(ContactDetails {
            name: "Jan".to_string(),
            email: Some("  ".to_string()),
        })
        .unwrap();
        assert_eq!(customer.email, None);

        let err = Customer::register(ContactDetails {
            name: "Jan".to_string(),
            email: Some("jan.example.com".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn first_order_starts_counters() {
        let customer = Customer::from_first_order("Jan Kowalski", Money::from_major(80.0)).unwrap();
        assert_eq!(customer.id.as_str(), "jan-kowalski");
        assert_eq!(customer.order_count, 1);
        assert_eq!(customer.total_spent, Money::from_major(80.0));

        let again = customer.with_order_recorded(Money::from_major(20.0));
        assert_eq!(again.order_count, 2);
        assert_eq!(again.total_spent, Money::from_major(100.0));
    }

    #[test]
    fn update_keeps_id_and_counters() {
        let customer = Customer::from_first_order("Jan", Money::from_major(10.0)).unwrap();
        let updated = customer.updated(details("Jan Kowalski")).unwrap();
        assert_eq!(updated.id, customer.id);
        assert_eq!(updated.order_count, 1);
        assert_eq!(updated.name, "Jan Kowalski");
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let customer: Customer =
            serde_json::from_value(serde_json::json!({"id": "jan", "name": "Jan"})).unwrap();
        assert_eq!(customer.order_count, 0);
        assert_eq!(customer.total_spent, Money::ZERO);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: recording n orders yields count n and the exact sum.
            #[test]
            fn recorded_orders_accumulate(totals in prop::collection::vec(0i64..1_000_000i64, 1..20)) {
                let mut customer = Customer::register(details("Ewa")).unwrap();
                for t in &totals {
                    customer = customer.with_order_recorded(Money::from_minor(*t));
                }
                prop_assert_eq!(customer.order_count as usize, totals.len());
                prop_assert_eq!(customer.total_spent.minor(), totals.iter().sum::<i64>());
            }
        }
    }
}
