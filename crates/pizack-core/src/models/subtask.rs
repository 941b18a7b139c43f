//! Topping (subtask) model definition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A granular unit of work within an order, shown as a topping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    /// Unique identifier for the topping
    pub id: String,

    /// Short title of the work item
    pub title: String,

    /// Whether the work item is done
    #[serde(default)]
    pub is_completed: bool,
}

impl SubTask {
    /// Creates a fresh, not yet completed topping with a random identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            is_completed: false,
        }
    }

    /// Flip the completion flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}
