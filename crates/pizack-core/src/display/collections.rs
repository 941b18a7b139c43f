//! Collection wrapper types for displaying groups of orders.

use std::fmt;

use crate::models::OrderSummary;

/// Newtype wrapper for displaying collections of order summaries.
///
/// # Examples
///
/// ```rust
/// use pizack_core::{display::OrderSummaries, models::{Order, OrderSummary}};
///
/// let order = Order::new("Build login", None);
/// let summaries = OrderSummaries(vec![OrderSummary::from(&order)]);
/// assert!(summaries.to_string().contains("Build login"));
///
/// assert_eq!(OrderSummaries(vec![]).to_string(), "No orders found.\n");
/// ```
pub struct OrderSummaries(pub Vec<OrderSummary>);

impl fmt::Display for OrderSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No orders found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
