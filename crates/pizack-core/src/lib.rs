//! Core library for the Pizack kitchen: orders are pizzas, subtasks are
//! toppings, and baked orders stack up in a delivery tower.
//!
//! This crate owns the order collection and everything derived from it:
//! grades, topping placement, the delivery tower and the shift report. It
//! persists the collection as one JSON value through a pluggable
//! [`storage::Storage`] backend.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual formatting for
//!   lists and operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use pizack_core::{
//!     params::{AddSubTask, CreateOrder, Id, ToggleSubTask},
//!     storage::MemoryStorage,
//!     PizzaStoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = PizzaStoreBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()
//!     .await?;
//!
//! let order = store.add_order(&CreateOrder {
//!     title: "Build login".to_string(),
//!     description: Some("OAuth flow".to_string()),
//! })?;
//!
//! let topping = store
//!     .add_subtask(&AddSubTask {
//!         order_id: order.id.clone(),
//!         title: "Write tests".to_string(),
//!     })?
//!     .expect("order exists");
//!
//! store.toggle_subtask(&ToggleSubTask {
//!     order_id: order.id.clone(),
//!     subtask_id: topping.id,
//! });
//! store.complete_order(&Id { id: order.id })?;
//!
//! println!("{}", store.delivery_tower());
//! store.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod layout;
pub mod models;
pub mod operations;
pub mod params;
pub mod storage;
pub mod store;
pub mod tower;

// Re-export commonly used types
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OrderSummaries, UpdateResult,
};
pub use error::{PizackError, Result};
pub use layout::{place_toppings, PizzaView, PlacementConfig, ToppingKind, ToppingPlacement};
pub use models::{Order, OrderStatus, OrderSummary, PizzaGrade, ShiftReport, SubTask};
pub use params::{AddSubTask, CreateOrder, Id, ListOrders, ToggleSubTask};
pub use store::{PizzaStore, PizzaStoreBuilder};
pub use tower::DeliveryTower;
