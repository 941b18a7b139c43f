//! MCP server for Pizack
//!
//! Exposes the kitchen as Model Context Protocol tools over stdio, so an
//! assistant can place orders, tick off toppings and bake pizzas.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use pizack_core::PizzaStore;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{AddSubTask, CreateOrder, Id, ListOrders, McpResult, ToggleSubTask};

/// MCP server for Pizack
#[derive(Clone)]
pub struct PizackMcpServer {
    store: Arc<Mutex<PizzaStore>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PizackMcpServer {
    pub fn new(store: PizzaStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.store.clone())
    }

    #[tool(
        name = "create_order",
        description = "Place a new order (a feature or task to build). Provide a clear title (required) and an optional description. Returns the new order ID for adding toppings."
    )]
    async fn create_order(&self, params: Parameters<CreateOrder>) -> McpResult {
        self.handlers().create_order(params).await
    }

    #[tool(
        name = "list_orders",
        description = "List orders. Use completed=false (default) for orders still cooking on the cutting board, or completed=true for baked pizzas. Shows IDs, grades and topping progress."
    )]
    async fn list_orders(&self, params: Parameters<ListOrders>) -> McpResult {
        self.handlers().list_orders(params).await
    }

    #[tool(
        name = "show_order",
        description = "Show one order with all its toppings (subtasks), their done state, the pizza grade and a plot of the pizza. Use the order ID."
    )]
    async fn show_order(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_order(params).await
    }

    #[tool(
        name = "add_topping",
        description = "Add a topping (subtask) to an order. Requires order_id and title. Toppings start not done. 3-5 toppings make a Regular Box, 6 or more a Deluxe Box."
    )]
    async fn add_topping(&self, params: Parameters<AddSubTask>) -> McpResult {
        self.handlers().add_topping(params).await
    }

    #[tool(
        name = "toggle_topping",
        description = "Flip a topping between done and not done. Requires order_id and subtask_id. Does not bake the order; call bake_order once every topping is done."
    )]
    async fn toggle_topping(&self, params: Parameters<ToggleSubTask>) -> McpResult {
        self.handlers().toggle_topping(params).await
    }

    #[tool(
        name = "bake_order",
        description = "Bake an order into a finished pizza and send it to the delivery tower. Only works when the order has at least one topping and every topping is done. This cannot be undone."
    )]
    async fn bake_order(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().bake_order(params).await
    }

    #[tool(
        name = "delete_order",
        description = "Permanently throw away an order and its toppings, whether cooking or baked. This cannot be undone."
    )]
    async fn delete_order(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_order(params).await
    }

    #[tool(
        name = "delivery_tower",
        description = "Show all baked pizzas stacked by bake time, newest on top."
    )]
    async fn delivery_tower(&self) -> McpResult {
        self.handlers().delivery_tower().await
    }

    #[tool(
        name = "shift_report",
        description = "Show the end-of-shift result: pizzas delivered, toppings used and the score (100 per pizza, 10 per topping)."
    )]
    async fn shift_report(&self) -> McpResult {
        self.handlers().shift_report().await
    }

    /// Wait until every change made through the server is on disk.
    async fn flush(&self) {
        if let Err(e) = self.store.lock().await.flush().await {
            error!("Failed to flush orders: {e}");
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PizackMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pizack".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Pizack turns feature work into pizzas.

## Core Concepts
- **Orders**: a feature or task, with a title and optional description
- **Toppings**: subtasks of an order, each done or not done
- **Grade**: 0-2 toppings is a Snack Box (green), 3-5 a Regular Box (red), 6+ a Deluxe Box (gold)
- **Delivery tower**: baked orders, stacked by bake time

## Workflow
1. Place an order with `create_order`
2. Break it down with `add_topping`
3. Tick toppings off with `toggle_topping` as the work gets done
4. When every topping is done, `bake_order`
5. Review with `delivery_tower` and `shift_report`

## Tool Categories
- **Orders**: create_order, list_orders, show_order, bake_order, delete_order
- **Toppings**: add_topping, toggle_topping
- **Results**: delivery_tower, shift_report"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PizackMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Pizack MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.clone().serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    server.flush().await;
    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pizack_core::{storage::MemoryStorage, PizzaStoreBuilder};

    use super::*;

    #[tokio::test]
    async fn test_all_tools_registered() {
        let store = PizzaStoreBuilder::new()
            .with_storage(MemoryStorage::new())
            .build()
            .await
            .expect("Failed to create store");
        let server = PizackMcpServer::new(store);

        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "add_topping",
                "bake_order",
                "create_order",
                "delete_order",
                "delivery_tower",
                "list_orders",
                "shift_report",
                "show_order",
                "toggle_topping",
            ]
        );
    }
}
