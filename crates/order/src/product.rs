use serde::{Deserialize, Serialize};

use ordering_core::{Entity, Money, ProductId, impl_identity_eq};

/// Catalogue product referenced by an order item.
///
/// The price is the catalogue price at the time the order was placed; order
/// items must be priced consistently with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> Option<&ProductId> {
        Some(&self.id)
    }
}

impl_identity_eq!(Product);
