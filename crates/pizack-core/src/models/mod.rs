//! Data models for orders and toppings.
//!
//! An [`Order`] is a feature being worked on; each of its [`SubTask`]s is a
//! topping. The [`PizzaGrade`] of an order is always derived from its topping
//! count and is never stored. Display implementations for these models live
//! in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use pizack_core::models::{Order, OrderStatus, PizzaGrade, SubTask};
//!
//! let mut order = Order::new("Build login", Some("OAuth flow".to_string()));
//! assert_eq!(order.status, OrderStatus::Cooking);
//! assert_eq!(order.grade(), PizzaGrade::Green);
//!
//! order.sub_tasks.push(SubTask::new("Form"));
//! assert!(!order.is_ready_to_bake());
//! ```

pub mod grade;
pub mod order;
pub mod status;
pub mod subtask;
pub mod summary;

#[cfg(test)]
mod tests;

use jiff::Timestamp;

pub use grade::PizzaGrade;
pub use order::Order;
pub use status::OrderStatus;
pub use subtask::SubTask;
pub use summary::{OrderSummary, ShiftReport};

/// Current time truncated to whole milliseconds.
///
/// Orders persist their timestamps as epoch milliseconds, so creating them
/// at that precision keeps a save/load cycle lossless.
pub fn timestamp_now() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now)
}
