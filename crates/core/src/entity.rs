//! Entity trait: identity that survives edits of the record's fields.

/// Entity marker + minimal interface.
///
/// Orders, products and customers are entities: two records with the same id
/// are the same record, even if an update changed every other field.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
