//! Pizza grade classification.

use serde::{Deserialize, Serialize};

/// Tier of a pizza, derived from how many toppings (subtasks) it carries.
///
/// Grades are never persisted. They are recomputed from the current topping
/// count every time they are read, so adding a topping to an order
/// immediately changes its grade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PizzaGrade {
    /// 0-2 toppings
    Green,
    /// 3-5 toppings
    Red,
    /// 6 or more toppings
    Gold,
}

impl PizzaGrade {
    /// Toppings needed to reach [`PizzaGrade::Red`].
    pub const RED_THRESHOLD: usize = 3;
    /// Toppings needed to reach [`PizzaGrade::Gold`].
    pub const GOLD_THRESHOLD: usize = 6;

    /// Classify a pizza by its topping count.
    ///
    /// ```rust
    /// use pizack_core::models::PizzaGrade;
    ///
    /// assert_eq!(PizzaGrade::from_subtask_count(2), PizzaGrade::Green);
    /// assert_eq!(PizzaGrade::from_subtask_count(3), PizzaGrade::Red);
    /// assert_eq!(PizzaGrade::from_subtask_count(6), PizzaGrade::Gold);
    /// ```
    pub fn from_subtask_count(count: usize) -> Self {
        if count >= Self::GOLD_THRESHOLD {
            PizzaGrade::Gold
        } else if count >= Self::RED_THRESHOLD {
            PizzaGrade::Red
        } else {
            PizzaGrade::Green
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaGrade::Green => "green",
            PizzaGrade::Red => "red",
            PizzaGrade::Gold => "gold",
        }
    }

    /// Name of the delivery box used for this grade.
    pub fn box_label(&self) -> &'static str {
        match self {
            PizzaGrade::Green => "Snack Box",
            PizzaGrade::Red => "Regular Box",
            PizzaGrade::Gold => "Deluxe Box",
        }
    }
}
