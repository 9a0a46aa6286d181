//! Aggregate root trait.

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::IdGenerator;

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the entity through which all consistency rules for its
/// cluster are enforced. Construction does not validate; a brand-new aggregate
/// goes through [`initialize`](AggregateRoot::initialize) and then
/// [`validate`](AggregateRoot::validate). Aggregates must not perform IO.
pub trait AggregateRoot: Entity {
    /// Assign identity to the aggregate and every child entity.
    fn initialize(&mut self, ids: &impl IdGenerator);

    /// Enforce the aggregate's invariants, failing on the first violation.
    fn validate(&mut self) -> DomainResult<()>;
}
