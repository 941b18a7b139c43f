//! The order store: sole owner and mutator of the order collection.
//!
//! [`PizzaStore`] keeps the collection in memory and mirrors every change to
//! durable [`Storage`](crate::storage::Storage) through a background writer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │    Snapshot     │    │  Writer task    │
//! │ (order_ops,     │───▶│ (JSON of whole  │───▶│ (storage, in    │
//! │  topping_ops)   │    │  collection)    │    │  send order)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   in-memory, sync        per mutation          fire-and-forget
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Explicit construction of a [`PizzaStore`] over a backend
//! - [`order_ops`]: Place, bake and delete orders
//! - [`topping_ops`]: Add and toggle toppings
//! - [`views`]: Read-only projections (cutting board, tower, report, pizza)
//!
//! Mutations never wait for the disk. Call [`PizzaStore::flush`] or
//! [`PizzaStore::shutdown`] when the persisted copy must be current.
//!
//! # Usage
//!
//! ```rust
//! use pizack_core::{params::CreateOrder, storage::MemoryStorage, PizzaStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = PizzaStoreBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()
//!     .await?;
//!
//! let order = store.add_order(&CreateOrder {
//!     title: "Build login".to_string(),
//!     description: None,
//! })?;
//! assert_eq!(store.orders().len(), 1);
//!
//! store.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod order_ops;
pub mod topping_ops;
pub mod views;
mod writer;


use log::error;

pub use builder::PizzaStoreBuilder;
use writer::Writer;

use crate::{
    error::Result,
    models::{Order, PizzaGrade},
    storage::encode_orders,
};

/// In-memory order collection backed by durable storage.
pub struct PizzaStore {
    orders: Vec<Order>,
    writer: Writer,
}

impl PizzaStore {
    pub(crate) fn new(orders: Vec<Order>, writer: Writer) -> Self {
        Self { orders, writer }
    }

    /// Grade for a pizza with `subtask_count` toppings.
    pub fn grade(subtask_count: usize) -> PizzaGrade {
        PizzaGrade::from_subtask_count(subtask_count)
    }

    /// Wait until every mutation so far has been handed to storage.
    ///
    /// # Errors
    ///
    /// * `PizackError::SaveFailed` - The newest snapshot could not be written
    pub async fn flush(&self) -> Result<()> {
        self.writer.flush().await
    }

    /// Flush pending writes and stop the background writer.
    ///
    /// Fails like [`PizzaStore::flush`] when the final snapshot was not saved.
    pub async fn shutdown(self) -> Result<()> {
        self.writer.shutdown().await
    }

    /// Serialize the whole collection and hand it to the writer.
    fn persist(&self) {
        match encode_orders(&self.orders) {
            Ok(snapshot) => self.writer.save(snapshot),
            Err(e) => error!("Failed to serialize orders, not persisted: {e}"),
        }
    }

    fn position(&self, order_id: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.id == order_id)
    }
}
