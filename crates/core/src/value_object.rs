//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. In this domain `Money`, `StreetAddress` and every
/// identifier newtype are value objects; `Order`, `OrderItem` and `Product`
/// are entities.
///
/// ```ignore
/// let a = Money::new(Decimal::new(1000, 2));
/// let b = Money::new(Decimal::new(10, 0));
/// assert_eq!(a, b); // 10.00 == 10
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
