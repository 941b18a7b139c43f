//! Order model definition and lifecycle rules.

use std::collections::HashSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{timestamp_now, OrderStatus, PizzaGrade, SubTask};
use crate::error::{PizackError, Result};

/// A feature or task, visualized as a pizza.
///
/// Field names and timestamp encoding follow the persisted JSON layout:
/// camelCase keys and epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for the order
    pub id: String,

    /// Title of the order
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Toppings in insertion order
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,

    /// Timestamp when the order was placed
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub created_at: Timestamp,

    /// Timestamp when the order was baked; set iff status is completed
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "jiff::fmt::serde::timestamp::millisecond::optional"
    )]
    pub completed_at: Option<Timestamp>,

    /// Current lifecycle status
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new order on the cutting board with no toppings.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description,
            sub_tasks: Vec::new(),
            created_at: timestamp_now(),
            completed_at: None,
            status: OrderStatus::Cooking,
        }
    }

    /// Grade of the pizza, computed from the current topping count.
    pub fn grade(&self) -> PizzaGrade {
        PizzaGrade::from_subtask_count(self.sub_tasks.len())
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Number of finished toppings.
    pub fn completed_count(&self) -> usize {
        self.sub_tasks.iter().filter(|t| t.is_completed).count()
    }

    /// Fraction of finished toppings in `[0, 1]`; zero for an empty order.
    pub fn progress(&self) -> f64 {
        if self.sub_tasks.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.sub_tasks.len() as f64
        }
    }

    /// True when the order has at least one topping and all are finished.
    pub fn is_ready_to_bake(&self) -> bool {
        !self.sub_tasks.is_empty() && self.sub_tasks.iter().all(|t| t.is_completed)
    }

    pub(crate) fn find_subtask_mut(&mut self, subtask_id: &str) -> Option<&mut SubTask> {
        self.sub_tasks.iter_mut().find(|t| t.id == subtask_id)
    }

    /// Transition the order to `completed` at the given time.
    ///
    /// # Errors
    ///
    /// * `PizackError::AlreadyCompleted` - The order was baked before
    /// * `PizackError::OrderNotReady` - No toppings, or some unfinished
    pub fn bake(&mut self, at: Timestamp) -> Result<()> {
        if self.is_completed() {
            return Err(PizackError::AlreadyCompleted {
                id: self.id.clone(),
            });
        }

        if self.sub_tasks.is_empty() {
            return Err(PizackError::not_ready(&self.id)
                .with_reason("an order needs at least one topping before baking"));
        }

        let pending = self.sub_tasks.len() - self.completed_count();
        if pending > 0 {
            return Err(PizackError::not_ready(&self.id)
                .with_reason(format!("{pending} topping(s) are still unfinished")));
        }

        self.status = OrderStatus::Completed;
        self.completed_at = Some(at);
        Ok(())
    }

    /// Check the invariants every stored order must hold.
    ///
    /// # Errors
    ///
    /// * `PizackError::InvalidInput` - Blank titles, duplicate topping IDs,
    ///   or a bake time that disagrees with the status
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PizackError::invalid_input("title")
                .with_reason(format!("Order {} has a blank title", self.id)));
        }

        if self.is_completed() != self.completed_at.is_some() {
            return Err(PizackError::invalid_input("completedAt").with_reason(format!(
                "Order {} is {} but its bake time is {}",
                self.id,
                self.status.as_str(),
                if self.completed_at.is_some() { "set" } else { "missing" }
            )));
        }

        let mut seen = HashSet::new();
        for topping in &self.sub_tasks {
            if topping.title.trim().is_empty() {
                return Err(PizackError::invalid_input("subTasks.title")
                    .with_reason(format!("Topping {} has a blank title", topping.id)));
            }
            if !seen.insert(topping.id.as_str()) {
                return Err(PizackError::invalid_input("subTasks.id").with_reason(format!(
                    "Topping ID {} appears twice in order {}",
                    topping.id, self.id
                )));
            }
        }

        Ok(())
    }
}
