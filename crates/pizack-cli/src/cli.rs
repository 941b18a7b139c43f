//! Command handlers for the terminal interface.
//!
//! Each handler converts its clap arguments into core params, runs the store
//! operation and renders the markdown produced by the core display types.
//! Unknown IDs, which the store treats as a no-op, become errors here so the
//! process exits non-zero.

use anyhow::Result;
use log::debug;
use pizack_core::{
    display::{CreateResult, DeleteResult, OrderSummaries, UpdateResult},
    params::{AddSubTask, CreateOrder, Id, ListOrders, ToggleSubTask},
    PizackError, PizzaStore, PlacementConfig,
};

use crate::{
    args::{OrderCommands, ToppingCommands},
    renderer::TerminalRenderer,
};

/// Runs one CLI command against the store.
pub struct Cli<'a> {
    store: &'a mut PizzaStore,
    renderer: TerminalRenderer,
}

impl<'a> Cli<'a> {
    pub fn new(store: &'a mut PizzaStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn handle_order_command(&mut self, command: OrderCommands) -> Result<()> {
        match command {
            OrderCommands::Create(args) => self.create_order(&args.into()),
            OrderCommands::List(args) => self.list_orders(&args.into()),
            OrderCommands::Show(args) => self.show_order(&args.into()),
            OrderCommands::Bake(args) => self.bake_order(&args.into()),
            OrderCommands::Delete(args) => self.delete_order(&args.into()),
        }
    }

    pub fn handle_topping_command(&mut self, command: ToppingCommands) -> Result<()> {
        match command {
            ToppingCommands::Add(args) => self.add_topping(&args.into()),
            ToppingCommands::Toggle(args) => self.toggle_topping(&args.into()),
        }
    }

    fn create_order(&mut self, params: &CreateOrder) -> Result<()> {
        let order = self.store.add_order(params)?;
        self.renderer
            .render(&CreateResult::new(order).to_string())
    }

    pub fn list_orders(&self, params: &ListOrders) -> Result<()> {
        let summaries = OrderSummaries(self.store.list_orders(params));
        let title = if params.completed {
            "Baked Orders"
        } else {
            "Cutting Board"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    fn show_order(&self, params: &Id) -> Result<()> {
        let order = self
            .store
            .get_order(&params.id)
            .ok_or_else(|| order_not_found(params))?;
        let pizza = self
            .store
            .pizza(&params.id, &PlacementConfig::default())
            .ok_or_else(|| order_not_found(params))?;
        self.renderer.render(&format!("{order}\n{pizza}"))
    }

    fn bake_order(&mut self, params: &Id) -> Result<()> {
        let order = self
            .store
            .complete_order(params)?
            .ok_or_else(|| order_not_found(params))?;
        let changes = vec![format!(
            "Baked into a {} and sent to the delivery tower",
            order.grade().box_label()
        )];
        self.renderer
            .render(&UpdateResult::with_changes(order, changes).to_string())
    }

    fn delete_order(&mut self, params: &Id) -> Result<()> {
        let order = self
            .store
            .delete_order(params)
            .ok_or_else(|| order_not_found(params))?;
        self.renderer
            .render(&DeleteResult::new(order).to_string())
    }

    fn add_topping(&mut self, params: &AddSubTask) -> Result<()> {
        let topping = self
            .store
            .add_subtask(params)?
            .ok_or_else(|| PizackError::OrderNotFound {
                id: params.order_id.clone(),
            })?;
        self.renderer
            .render(&CreateResult::new(topping).to_string())
    }

    fn toggle_topping(&mut self, params: &ToggleSubTask) -> Result<()> {
        let topping = self
            .store
            .toggle_subtask(params)
            .ok_or_else(|| PizackError::SubTaskNotFound {
                order_id: params.order_id.clone(),
                id: params.subtask_id.clone(),
            })?;
        debug!("Topping {} is now done: {}", topping.id, topping.is_completed);
        let change = if topping.is_completed {
            "Marked as done"
        } else {
            "Marked as not done"
        };
        self.renderer
            .render(&UpdateResult::with_changes(topping, vec![change.to_string()]).to_string())
    }

    pub fn show_tower(&self) -> Result<()> {
        self.renderer
            .render(&self.store.delivery_tower().to_string())
    }

    pub fn show_report(&self) -> Result<()> {
        self.renderer
            .render(&self.store.shift_report().to_string())
    }
}

fn order_not_found(params: &Id) -> PizackError {
    PizackError::OrderNotFound {
        id: params.id.clone(),
    }
}
