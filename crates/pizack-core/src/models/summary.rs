//! Order summary and shift report types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Order, OrderStatus, PizzaGrade};

/// Summary information about an order with topping statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Order ID
    pub id: String,
    /// Title of the order
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Order status
    pub status: OrderStatus,
    /// Grade derived from the topping count
    pub grade: PizzaGrade,
    /// Total number of toppings
    pub total_toppings: usize,
    /// Number of finished toppings
    pub completed_toppings: usize,
    /// Number of unfinished toppings
    pub pending_toppings: usize,
    /// Finished fraction in `[0, 1]`
    pub progress: f64,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Bake timestamp
    pub completed_at: Option<Timestamp>,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        let total_toppings = order.sub_tasks.len();
        let completed_toppings = order.completed_count();

        Self {
            id: order.id.clone(),
            title: order.title.clone(),
            description: order.description.clone(),
            status: order.status,
            grade: order.grade(),
            total_toppings,
            completed_toppings,
            pending_toppings: total_toppings - completed_toppings,
            progress: order.progress(),
            created_at: order.created_at,
            completed_at: order.completed_at,
        }
    }
}

/// End-of-shift tally over all baked pizzas.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftReport {
    /// Number of baked orders
    pub total_pizzas: usize,
    /// Toppings across all baked orders
    pub total_toppings: usize,
    /// `pizzas * 100 + toppings * 10`
    pub score: u64,
}

impl ShiftReport {
    pub const POINTS_PER_PIZZA: u64 = 100;
    pub const POINTS_PER_TOPPING: u64 = 10;

    /// Tally the completed orders in `orders`; cooking orders are ignored.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let (total_pizzas, total_toppings) = orders
            .into_iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .fold((0usize, 0usize), |(pizzas, toppings), o| {
                (pizzas + 1, toppings + o.sub_tasks.len())
            });

        Self {
            total_pizzas,
            total_toppings,
            score: total_pizzas as u64 * Self::POINTS_PER_PIZZA
                + total_toppings as u64 * Self::POINTS_PER_TOPPING,
        }
    }
}
