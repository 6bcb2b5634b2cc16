//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; they are defined entirely by their
/// attribute values and are never modified in place. [`crate::Money`] and the
/// line items embedded in an order are value objects, while an order itself is
/// an [`crate::Entity`].
///
/// ```
/// use pasieka_core::{Money, ValueObject};
///
/// fn assert_value_object<T: ValueObject>(_: &T) {}
///
/// let a = Money::from_minor(1250);
/// let b = Money::from_major(12.5);
/// assert_value_object(&a);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
