//! Order status enumeration.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// The only transition is `Cooking -> Completed`; completed orders never go
/// back on the cutting board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order is on the cutting board
    Cooking,

    /// Order has been baked and delivered to the tower
    Completed,
}

impl OrderStatus {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "cooking",
            OrderStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use pizack_core::models::OrderStatus;
    ///
    /// assert_eq!(OrderStatus::Cooking.with_icon(), "🔪 Cooking");
    /// assert_eq!(OrderStatus::Completed.with_icon(), "🍕 Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "🔪 Cooking",
            OrderStatus::Completed => "🍕 Completed",
        }
    }
}
