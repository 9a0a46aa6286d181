use serde::{Deserialize, Serialize};

use ordering_core::{Entity, Money, OrderId, OrderItemId, impl_identity_eq};

use crate::product::Product;

/// Line item owned by an [`Order`](crate::Order).
///
/// Created by the caller with product, quantity, unit price and subtotal
/// already populated. Item and owning-order identities are assigned by the
/// order's initialization pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    id: Option<OrderItemId>,
    order_id: Option<OrderId>,
    product: Product,
    quantity: u32,
    price: Money,
    subtotal: Money,
}

impl OrderItem {
    pub fn new(product: Product, quantity: u32, price: Money, subtotal: Money) -> Self {
        Self {
            id: None,
            order_id: None,
            product,
            quantity,
            price,
            subtotal,
        }
    }

    /// Item priced at the product's catalogue price with a derived subtotal.
    pub fn for_product(product: Product, quantity: u32) -> Self {
        let price = *product.price();
        let subtotal = price.multiply(quantity);
        Self::new(product, quantity, price, subtotal)
    }

    /// Rebuild a persisted item that already carries its identities.
    pub fn restore(
        id: OrderItemId,
        order_id: OrderId,
        product: Product,
        quantity: u32,
        price: Money,
        subtotal: Money,
    ) -> Self {
        Self {
            id: Some(id),
            order_id: Some(order_id),
            product,
            quantity,
            price,
            subtotal,
        }
    }

    pub(crate) fn initialize(&mut self, order_id: OrderId, id: OrderItemId) {
        self.order_id = Some(order_id);
        self.id = Some(id);
    }

    pub fn id_typed(&self) -> Option<OrderItemId> {
        self.id
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn subtotal(&self) -> &Money {
        &self.subtotal
    }

    /// Unit price is positive, matches the catalogue price, and
    /// `price * quantity == subtotal`.
    pub fn is_price_valid(&self) -> bool {
        self.price.is_greater_than_zero()
            && self.price == *self.product.price()
            && self.price.multiply(self.quantity) == self.subtotal
    }

    pub fn has_invalid_price(&self) -> bool {
        !self.is_price_valid()
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;
    const KIND: &'static str = "order_item";

    fn id(&self) -> Option<&OrderItemId> {
        self.id.as_ref()
    }
}

impl_identity_eq!(OrderItem);
