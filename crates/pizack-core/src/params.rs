//! Parameter structures for kitchen operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interfaces wrap or convert into
//! them at their boundary:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP server is enabled with the `schema`
//! feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for operations requiring just an order ID.
///
/// Used by show, bake and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the order to operate on
    pub id: String,
}

/// Parameters for placing a new order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateOrder {
    /// Title of the order (feature name); must not be blank
    pub title: String,
    /// Optional details or requirements for the order
    #[serde(default)]
    pub description: Option<String>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListOrders {
    /// List baked orders instead of the ones still cooking
    #[serde(default)]
    pub completed: bool,
}

/// Parameters for adding a topping to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddSubTask {
    /// ID of the order receiving the topping
    pub order_id: String,
    /// Title of the topping (subtask); must not be blank
    pub title: String,
}

/// Parameters for toggling a topping's completion flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleSubTask {
    /// ID of the order owning the topping
    pub order_id: String,
    /// ID of the topping to toggle
    pub subtask_id: String,
}
