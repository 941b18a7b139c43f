//! Order operations for the PizzaStore.

use log::debug;

use super::PizzaStore;
use crate::{
    error::Result,
    models::{timestamp_now, Order},
    operations::{normalize_description, validate_title},
    params::{CreateOrder, Id},
};

impl PizzaStore {
    /// Places a new order at the end of the collection.
    ///
    /// The title is trimmed and a blank description is dropped.
    ///
    /// # Errors
    ///
    /// * `PizackError::InvalidInput` - The title is blank; nothing changes
    pub fn add_order(&mut self, params: &CreateOrder) -> Result<Order> {
        let title = validate_title("title", &params.title)?;
        let order = Order::new(title, normalize_description(params.description.as_deref()));

        debug!("Placed order {} '{}'", order.id, order.title);
        self.orders.push(order.clone());
        self.persist();
        Ok(order)
    }

    /// Bakes an order whose toppings are all finished.
    ///
    /// Returns `Ok(None)` when no order has the given ID.
    ///
    /// # Errors
    ///
    /// * `PizackError::OrderNotReady` - No toppings, or some unfinished
    /// * `PizackError::AlreadyCompleted` - The order was baked before
    pub fn complete_order(&mut self, params: &Id) -> Result<Option<Order>> {
        let Some(index) = self.position(&params.id) else {
            debug!("complete_order: no order {}", params.id);
            return Ok(None);
        };

        let order = &mut self.orders[index];
        order.bake(timestamp_now())?;
        let baked = order.clone();

        debug!("Baked order {} '{}'", baked.id, baked.title);
        self.persist();
        Ok(Some(baked))
    }

    /// Removes an order in any status, returning it.
    ///
    /// Returns `None` and changes nothing when no order has the given ID.
    pub fn delete_order(&mut self, params: &Id) -> Option<Order> {
        let Some(index) = self.position(&params.id) else {
            debug!("delete_order: no order {}", params.id);
            return None;
        };

        let removed = self.orders.remove(index);
        debug!("Deleted order {} '{}'", removed.id, removed.title);
        self.persist();
        Some(removed)
    }
}
