//! Pizack CLI Application
//!
//! Command-line interface and MCP server for the Pizack kitchen.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, PizackMcpServer};
use pizack_core::{params::ListOrders, PizzaStoreBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let mut store = PizzaStoreBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to open the kitchen")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Pizack started");

    if let Some(Serve) = command {
        info!("Starting Pizack MCP server");
        return run_stdio_server(PizackMcpServer::new(store))
            .await
            .context("MCP server failed");
    }

    let mut cli = Cli::new(&mut store, renderer);
    let outcome = match command {
        Some(Order { command }) => cli.handle_order_command(command),
        Some(Topping { command }) => cli.handle_topping_command(command),
        Some(Tower) => cli.show_tower(),
        Some(Report) => cli.show_report(),
        Some(Serve) | None => cli.list_orders(&ListOrders { completed: false }),
    };

    store
        .shutdown()
        .await
        .context("Failed to save orders")?;
    outcome
}
