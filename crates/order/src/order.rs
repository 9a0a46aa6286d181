use ordering_core::{
    AggregateRoot, CustomerId, DomainError, DomainResult, Entity, IdGenerator, IdStrategy, Money,
    OrderId, OrderItemId, RestaurantId, TrackingId, impl_identity_eq,
};

use crate::address::StreetAddress;
use crate::order_item::OrderItem;
use crate::status::OrderStatus;

/// Aggregate root: Order.
///
/// Built without validation through [`Order::builder`]. A brand-new order is
/// then taken through [`initialize_order`](Order::initialize_order), which
/// assigns identities and sets `Pending`, and
/// [`validate_order`](Order::validate_order), which enforces:
///
/// 1. the instance is in a state that may be validated (see below),
/// 2. the declared total price is greater than zero,
/// 3. every item is priced consistently and the item subtotals add up to the
///    declared total exactly.
///
/// Validation is accepted on a pristine instance (no id, no status) and exactly
/// once right after a first initialization. Orders rebuilt from storage with an
/// id or status, orders initialized twice, and orders already validated after
/// initialization are rejected.
#[derive(Debug, Clone)]
pub struct Order {
    id: Option<OrderId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Option<Money>,
    items: Vec<OrderItem>,
    tracking_id: Option<TrackingId>,
    status: Option<OrderStatus>,
    failure_messages: Vec<String>,
    // Set by an initialization that started from a pristine instance; consumed
    // by the next validation.
    validation_pending: bool,
}

impl Order {
    pub fn builder(
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        delivery_address: StreetAddress,
    ) -> OrderBuilder {
        OrderBuilder::new(customer_id, restaurant_id, delivery_address)
    }

    /// Assign identities and the initial status using the default generator.
    pub fn initialize_order(&mut self) {
        self.initialize_order_with(&IdStrategy::default());
    }

    /// Assign a fresh order id and tracking id, set status to `Pending`, and
    /// number the items `1..=N` in their stored order.
    ///
    /// Never fails. Calling it on an instance that already has an id or status
    /// is not rejected here, but leaves the order in a state `validate_order`
    /// refuses.
    pub fn initialize_order_with(&mut self, ids: &impl IdGenerator) {
        self.validation_pending = self.is_pristine();

        let order_id = OrderId::from_uuid(ids.next_uuid());
        self.id = Some(order_id);
        self.tracking_id = Some(TrackingId::from_uuid(ids.next_uuid()));
        self.status = Some(OrderStatus::Pending);
        self.initialize_order_items(order_id);

        tracing::debug!(
            order_id = %order_id,
            tracking_id = ?self.tracking_id,
            items = self.items.len(),
            "order initialized"
        );
    }

    /// Enforce the order's invariants, failing fast on the first violation.
    ///
    /// On success no observable attribute changes. The validation allowed by
    /// `initialize_order` is used up by this call whatever its outcome, so a
    /// retry after a failed price check reports the initialization state, not
    /// the original cause.
    pub fn validate_order(&mut self) -> DomainResult<()> {
        match self.check_invariants() {
            Ok(()) => {
                tracing::debug!(order_id = ?self.id, "order validated");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(order_id = ?self.id, error = %err, "order rejected");
                Err(err)
            }
        }
    }

    pub fn id_typed(&self) -> Option<OrderId> {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    pub fn price(&self) -> Option<&Money> {
        self.price.as_ref()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn failure_messages(&self) -> &[String] {
        &self.failure_messages
    }

    fn is_pristine(&self) -> bool {
        self.id.is_none() && self.status.is_none()
    }

    fn initialize_order_items(&mut self, order_id: OrderId) {
        for (item_id, item) in (1u64..).zip(self.items.iter_mut()) {
            item.initialize(order_id, OrderItemId::new(item_id));
        }
    }

    fn check_invariants(&mut self) -> DomainResult<()> {
        self.validate_initial_order()?;
        let price = self.validate_total_price()?;
        self.validate_items_price(&price)
    }

    fn validate_initial_order(&mut self) -> DomainResult<()> {
        let window_open = core::mem::take(&mut self.validation_pending);
        if window_open || self.is_pristine() {
            return Ok(());
        }
        Err(DomainError::validation(
            "Order is not in correct state for initialization!",
        ))
    }

    fn validate_total_price(&self) -> DomainResult<Money> {
        match self.price {
            Some(price) if price.is_greater_than_zero() => Ok(price),
            _ => Err(DomainError::validation(
                "Total price must be greater than zero!",
            )),
        }
    }

    fn validate_items_price(&self, price: &Money) -> DomainResult<()> {
        let items_total = self.items.iter().try_fold(Money::ZERO, |total, item| {
            Self::validate_item_price(item)?;
            Ok::<_, DomainError>(total.add(item.subtotal()))
        })?;

        if *price != items_total {
            return Err(DomainError::validation(format!(
                "Total price: {price} is not equal to Order items total: {items_total}!"
            )));
        }
        Ok(())
    }

    fn validate_item_price(item: &OrderItem) -> DomainResult<()> {
        if item.has_invalid_price() {
            return Err(DomainError::validation(format!(
                "Order item price: {} is not valid for product {}",
                item.price(),
                item.product().id_typed()
            )));
        }
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;
    const KIND: &'static str = "order";

    fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }
}

impl_identity_eq!(Order);

impl AggregateRoot for Order {
    fn initialize(&mut self, ids: &impl IdGenerator) {
        self.initialize_order_with(ids);
    }

    fn validate(&mut self) -> DomainResult<()> {
        self.validate_order()
    }
}

/// Staged construction of an [`Order`].
///
/// Fields are copied verbatim by [`build`](OrderBuilder::build); nothing is
/// validated. The optional identity, tracking id, status and failure messages
/// exist for rebuilding persisted orders.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: Option<OrderId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Option<Money>,
    items: Vec<OrderItem>,
    tracking_id: Option<TrackingId>,
    status: Option<OrderStatus>,
    failure_messages: Vec<String>,
}

impl OrderBuilder {
    pub fn new(
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        delivery_address: StreetAddress,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            restaurant_id,
            delivery_address,
            price: None,
            items: Vec::new(),
            tracking_id: None,
            status: None,
            failure_messages: Vec::new(),
        }
    }

    pub fn id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = items;
        self
    }

    pub fn tracking_id(mut self, tracking_id: TrackingId) -> Self {
        self.tracking_id = Some(tracking_id);
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn failure_messages(mut self, failure_messages: Vec<String>) -> Self {
        self.failure_messages = failure_messages;
        self
    }

    pub fn build(self) -> Order {
        Order {
            id: self.id,
            customer_id: self.customer_id,
            restaurant_id: self.restaurant_id,
            delivery_address: self.delivery_address,
            price: self.price,
            items: self.items,
            tracking_id: self.tracking_id,
            status: self.status,
            failure_messages: self.failure_messages,
            validation_pending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordering_core::ProductId;
    use std::cell::Cell;
    use uuid::Uuid;

    use crate::product::Product;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn test_address() -> StreetAddress {
        StreetAddress::new(Uuid::now_v7(), "12 Harbour Rd", "SW1A 1AA", "London")
    }

    fn test_item(price: &str, quantity: u32) -> OrderItem {
        let product = Product::new(ProductId::new(), "Dumplings", money(price));
        OrderItem::for_product(product, quantity)
    }

    fn test_order(price: &str, items: Vec<OrderItem>) -> Order {
        Order::builder(CustomerId::new(), RestaurantId::new(), test_address())
            .price(money(price))
            .items(items)
            .build()
    }

    #[test]
    fn build_copies_fields_without_validation() {
        let customer_id = CustomerId::new();
        let restaurant_id = RestaurantId::new();
        let order = Order::builder(customer_id, restaurant_id, test_address())
            .price(Money::ZERO)
            .failure_messages(vec!["restaurant closed".to_string()])
            .build();

        assert_eq!(order.customer_id(), customer_id);
        assert_eq!(order.restaurant_id(), restaurant_id);
        assert_eq!(order.price(), Some(&Money::ZERO));
        assert_eq!(order.id_typed(), None);
        assert_eq!(order.status(), None);
        assert_eq!(order.tracking_id(), None);
        assert_eq!(order.failure_messages(), ["restaurant closed".to_string()]);
    }

    #[test]
    fn initialize_uses_injected_generator() {
        let counter = Cell::new(0u128);
        let ids = || {
            counter.set(counter.get() + 1);
            Uuid::from_u128(counter.get())
        };

        let mut order = test_order("3.00", vec![test_item("1.00", 1), test_item("2.00", 1)]);
        order.initialize_order_with(&ids);

        assert_eq!(order.id_typed(), Some(OrderId::from_uuid(Uuid::from_u128(1))));
        assert_eq!(order.tracking_id(), Some(TrackingId::from_uuid(Uuid::from_u128(2))));
        assert_eq!(order.status(), Some(OrderStatus::Pending));
    }

    #[test]
    fn validate_accepts_pristine_order() {
        let mut order = test_order("3.00", vec![test_item("1.00", 1), test_item("2.00", 1)]);
        order.validate_order().unwrap();
        order.initialize_order();
        assert_eq!(order.status(), Some(OrderStatus::Pending));
    }

    #[test]
    fn unset_price_is_rejected() {
        let mut order = Order::builder(CustomerId::new(), RestaurantId::new(), test_address())
            .items(vec![test_item("1.00", 1)])
            .build();
        order.initialize_order();

        let err = order.validate_order().unwrap_err();
        assert_eq!(err, DomainError::validation("Total price must be greater than zero!"));
    }

    #[test]
    fn first_invalid_item_aborts_before_sum_check() {
        let product = Product::new(ProductId::new(), "Ramen", money("12.00"));
        let overpriced = OrderItem::new(product, 1, money("12.00"), money("13.00"));
        let mut order = test_order("13.00", vec![overpriced]);
        order.initialize_order();

        let err = order.validate_order().unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.starts_with("Order item price: 12.00") => {}
            other => panic!("Expected item price validation error, got {other:?}"),
        }
    }

    #[test]
    fn reconstructed_order_cannot_be_validated() {
        let mut order = Order::builder(CustomerId::new(), RestaurantId::new(), test_address())
            .id(OrderId::new())
            .price(money("1.00"))
            .items(vec![test_item("1.00", 1)])
            .build();

        let err = order.validate_order().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Order is not in correct state for initialization!")
        );
    }

    #[test]
    fn second_initialization_closes_validation() {
        let mut order = test_order("1.00", vec![test_item("1.00", 1)]);
        order.initialize_order();
        let first_id = order.id_typed();
        order.initialize_order();

        assert_ne!(order.id_typed(), first_id);
        let err = order.validate_order().unwrap_err();
        assert_eq!(err.message(), "Order is not in correct state for initialization!");
    }

    #[test]
    fn retry_after_failed_validation_reports_initialization_state() {
        let mut order = test_order("5.00", vec![test_item("1.00", 1)]);
        order.initialize_order();

        let first = order.validate_order().unwrap_err();
        assert!(first.message().starts_with("Total price: 5.00"));

        let retry = order.validate_order().unwrap_err();
        assert_eq!(retry.message(), "Order is not in correct state for initialization!");
    }

    #[test]
    fn aggregate_root_trait_drives_the_same_protocol() {
        fn accept<A: AggregateRoot>(aggregate: &mut A) -> DomainResult<()> {
            aggregate.initialize(&IdStrategy::V4);
            aggregate.validate()
        }

        let mut order = test_order("2.50", vec![test_item("1.25", 2)]);
        accept(&mut order).unwrap();
        assert!(Entity::id(&order).is_some());
    }
}
