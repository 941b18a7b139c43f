//! Topping operations for the PizzaStore.

use log::debug;

use super::PizzaStore;
use crate::{
    error::Result,
    models::SubTask,
    operations::validate_title,
    params::{AddSubTask, ToggleSubTask},
};

impl PizzaStore {
    /// Appends a new, unfinished topping to an order.
    ///
    /// Returns `Ok(None)` when no order has the given ID.
    ///
    /// # Errors
    ///
    /// * `PizackError::InvalidInput` - The title is blank; nothing changes
    pub fn add_subtask(&mut self, params: &AddSubTask) -> Result<Option<SubTask>> {
        let title = validate_title("title", &params.title)?;

        let Some(index) = self.position(&params.order_id) else {
            debug!("add_subtask: no order {}", params.order_id);
            return Ok(None);
        };

        let subtask = SubTask::new(title);
        self.orders[index].sub_tasks.push(subtask.clone());

        debug!("Added topping {} to order {}", subtask.id, params.order_id);
        self.persist();
        Ok(Some(subtask))
    }

    /// Flips a topping's completion flag, returning the updated topping.
    ///
    /// The order's status is never changed here; baking is explicit.
    /// Returns `None` when either ID is unknown.
    pub fn toggle_subtask(&mut self, params: &ToggleSubTask) -> Option<SubTask> {
        let index = self.position(&params.order_id)?;
        let Some(subtask) = self.orders[index].find_subtask_mut(&params.subtask_id) else {
            debug!(
                "toggle_subtask: no topping {} in order {}",
                params.subtask_id, params.order_id
            );
            return None;
        };

        subtask.toggle();
        let toggled = subtask.clone();

        debug!(
            "Topping {} is now {}",
            toggled.id,
            if toggled.is_completed { "done" } else { "pending" }
        );
        self.persist();
        Some(toggled)
    }
}
