//! Durable key/value storage for the order collection.
//!
//! The kitchen persists its whole order collection as one JSON document under
//! a fixed key, in the manner of browser local storage. [`Storage`] is the
//! seam: [`FileStorage`] keeps one file per key on disk and
//! [`MemoryStorage`] keeps everything in process for tests.

use std::collections::HashSet;

use log::warn;

use crate::{
    error::{PizackError, Result},
    models::Order,
};

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key under which the order collection is stored.
pub const STORAGE_KEY: &str = "pizack_orders";

/// A string key/value store.
pub trait Storage: Send + Sync + 'static {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Serialize the order collection to its persisted JSON form.
pub fn encode_orders(orders: &[Order]) -> Result<String> {
    Ok(serde_json::to_string(orders)?)
}

/// Parse a persisted JSON document back into an order collection.
///
/// The whole document is rejected if any order breaks its invariants or two
/// orders share an ID.
pub fn decode_orders(raw: &str) -> Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for order in &orders {
        order.validate()?;
        if !seen.insert(order.id.as_str()) {
            return Err(PizackError::invalid_input("id")
                .with_reason(format!("Order ID {} appears twice", order.id)));
        }
    }

    Ok(orders)
}

/// Load the order collection from `storage`.
///
/// A missing, unreadable or unparseable value yields an empty collection.
pub fn load_orders(storage: &dyn Storage) -> Vec<Order> {
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Could not read stored orders, starting empty: {e}");
            return Vec::new();
        }
    };

    decode_orders(&raw).unwrap_or_else(|e| {
        warn!("Stored orders are corrupt or invalid, starting empty: {e}");
        Vec::new()
    })
}
