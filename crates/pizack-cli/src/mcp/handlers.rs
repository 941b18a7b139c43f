//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use pizack_core::{
    display::{CreateResult, DeleteResult, OrderSummaries, UpdateResult},
    params as core, PizackError, PizzaStore, PlacementConfig,
};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::to_mcp_error;

/// Transparent wrapper giving core params a JSON schema for tool listings.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateOrder = McpParams<core::CreateOrder>;
pub type ListOrders = McpParams<core::ListOrders>;
pub type AddSubTask = McpParams<core::AddSubTask>;
pub type ToggleSubTask = McpParams<core::ToggleSubTask>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

fn order_not_found(id: &str) -> ErrorData {
    to_mcp_error(
        "Lookup failed",
        &PizackError::OrderNotFound { id: id.to_string() },
    )
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: Arc<Mutex<PizzaStore>>,
}

impl McpHandlers {
    pub fn new(store: Arc<Mutex<PizzaStore>>) -> Self {
        Self { store }
    }

    pub async fn create_order(&self, Parameters(params): Parameters<CreateOrder>) -> McpResult {
        debug!("create_order: {params:?}");

        let order = self
            .store
            .lock()
            .await
            .add_order(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to create order", &e))?;

        text(CreateResult::new(order))
    }

    pub async fn list_orders(&self, Parameters(params): Parameters<ListOrders>) -> McpResult {
        debug!("list_orders: {params:?}");

        let params = params.as_ref();
        let summaries = OrderSummaries(self.store.lock().await.list_orders(params));
        let title = if params.completed {
            "Baked Orders"
        } else {
            "Cutting Board"
        };

        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_order(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_order: {params:?}");

        let id = &params.as_ref().id;
        let store = self.store.lock().await;
        let order = store.get_order(id).ok_or_else(|| order_not_found(id))?;
        let pizza = store
            .pizza(id, &PlacementConfig::default())
            .ok_or_else(|| order_not_found(id))?;

        text(format!("{order}\n{pizza}"))
    }

    pub async fn add_topping(&self, Parameters(params): Parameters<AddSubTask>) -> McpResult {
        debug!("add_topping: {params:?}");

        let params = params.as_ref();
        let topping = self
            .store
            .lock()
            .await
            .add_subtask(params)
            .map_err(|e| to_mcp_error("Failed to add topping", &e))?
            .ok_or_else(|| order_not_found(&params.order_id))?;

        text(CreateResult::new(topping))
    }

    pub async fn toggle_topping(
        &self,
        Parameters(params): Parameters<ToggleSubTask>,
    ) -> McpResult {
        debug!("toggle_topping: {params:?}");

        let params = params.as_ref();
        let topping = self
            .store
            .lock()
            .await
            .toggle_subtask(params)
            .ok_or_else(|| {
                to_mcp_error(
                    "Lookup failed",
                    &PizackError::SubTaskNotFound {
                        order_id: params.order_id.clone(),
                        id: params.subtask_id.clone(),
                    },
                )
            })?;

        let change = if topping.is_completed {
            "Marked as done"
        } else {
            "Marked as not done"
        };
        text(UpdateResult::with_changes(topping, vec![change.to_string()]))
    }

    pub async fn bake_order(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("bake_order: {params:?}");

        let params = params.as_ref();
        let order = match self.store.lock().await.complete_order(params) {
            Ok(Some(order)) => order,
            Ok(None) => return Err(order_not_found(&params.id)),
            // Not a protocol failure: tell the caller what is left to do.
            Err(e @ (PizackError::OrderNotReady { .. } | PizackError::AlreadyCompleted { .. })) => {
                return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))]));
            }
            Err(e) => return Err(to_mcp_error("Failed to bake order", &e)),
        };

        let changes = vec![format!(
            "Baked into a {} and sent to the delivery tower",
            order.grade().box_label()
        )];
        text(UpdateResult::with_changes(order, changes))
    }

    pub async fn delete_order(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_order: {params:?}");

        let id = &params.as_ref().id;
        let order = self
            .store
            .lock()
            .await
            .delete_order(params.as_ref())
            .ok_or_else(|| order_not_found(id))?;

        text(DeleteResult::new(order))
    }

    pub async fn delivery_tower(&self) -> McpResult {
        debug!("delivery_tower");
        text(self.store.lock().await.delivery_tower())
    }

    pub async fn shift_report(&self) -> McpResult {
        debug!("shift_report");
        text(self.store.lock().await.shift_report())
    }
}
