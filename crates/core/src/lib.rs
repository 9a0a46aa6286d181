//! `ordering-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod config;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use config::{DomainConfig, IdStrategy};
pub use entity::{Entity, identity_eq, identity_hash};
pub use error::{ConfigError, DomainError, DomainResult};
pub use id::{CustomerId, IdGenerator, OrderId, OrderItemId, ProductId, RestaurantId, TrackingId};
pub use money::Money;
pub use value_object::ValueObject;
