//! Order domain module.
//!
//! This crate contains the `Order` aggregate and its consistency rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod address;
pub mod order;
pub mod order_item;
pub mod product;
pub mod status;


pub use address::StreetAddress;
pub use order::{Order, OrderBuilder};
pub use order_item::OrderItem;
pub use product::Product;
pub use status::OrderStatus;
