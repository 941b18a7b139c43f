//! Read-only projections of the order collection.
//!
//! Views are recomputed from the live collection on every call; nothing
//! derived is cached or persisted.

use super::PizzaStore;
use crate::{
    layout::{PizzaView, PlacementConfig},
    models::{Order, OrderSummary, ShiftReport},
    params::ListOrders,
    tower::DeliveryTower,
};

impl PizzaStore {
    /// All orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Orders still on the cutting board.
    pub fn cooking_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| !o.is_completed()).collect()
    }

    /// Baked orders in insertion order.
    pub fn completed_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.is_completed()).collect()
    }

    /// Summaries of either the cooking or the baked orders.
    pub fn list_orders(&self, params: &ListOrders) -> Vec<OrderSummary> {
        self.orders
            .iter()
            .filter(|o| o.is_completed() == params.completed)
            .map(OrderSummary::from)
            .collect()
    }

    pub fn delivery_tower(&self) -> DeliveryTower {
        DeliveryTower::from_orders(&self.orders)
    }

    pub fn shift_report(&self) -> ShiftReport {
        ShiftReport::from_orders(&self.orders)
    }

    /// The pizza drawn for an order, if it exists.
    pub fn pizza(&self, order_id: &str, config: &PlacementConfig) -> Option<PizzaView> {
        self.get_order(order_id)
            .map(|order| PizzaView::new(order, config))
    }
}
