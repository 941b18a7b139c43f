//! Markdown display for orders, toppings and kitchen views.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes go through small wrapper types so the
//! same data can be framed differently per context. Every formatter emits
//! markdown that the CLI renders to the terminal and the MCP server returns
//! verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Order, Tower)  │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (OrderSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`pizza`]: Terminal plot of a [`crate::layout::PizzaView`]
//! - [`tower`]: Delivery tower and shift report
//!
//! ## Example
//!
//! ```rust
//! use pizack_core::{display::CreateResult, models::Order};
//!
//! let order = Order::new("Build login", None);
//! let output = CreateResult::new(order.clone()).to_string();
//! assert!(output.contains(&format!("Created order with ID: {}", order.id)));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod pizza;
pub mod results;
pub mod tower;

// Re-export commonly used types for convenience
pub use collections::OrderSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
