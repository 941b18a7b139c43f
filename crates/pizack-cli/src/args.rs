//! Command-line argument definitions using clap
//!
//! CLI argument structs wrap the core parameter types and convert into them
//! with `From`, so clap attributes never leak into `pizack-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PizzaStore
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use pizack_core::params::{AddSubTask, CreateOrder, Id, ListOrders, ToggleSubTask};

/// Turn your feature work into pizzas
///
/// Every feature is an order, every subtask a topping. Finish all the
/// toppings, bake the pizza, and watch the delivery tower grow. Run without
/// a subcommand to see what is on the cutting board.
#[derive(Parser)]
#[command(version, about, name = "pizack")]
pub struct Args {
    /// Directory holding the saved orders. Defaults to
    /// $XDG_DATA_HOME/pizack/
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage orders
    #[command(alias = "o")]
    Order {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// Manage toppings on an order
    #[command(alias = "t")]
    Topping {
        #[command(subcommand)]
        command: ToppingCommands,
    },
    /// Show baked pizzas, newest on top
    Tower,
    /// Show the end-of-shift score
    Report,
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum OrderCommands {
    /// Place a new order
    #[command(alias = "c")]
    Create(CreateOrderArgs),
    /// List orders on the cutting board, or baked ones with --completed
    #[command(alias = "l")]
    List(ListOrdersArgs),
    /// Show an order with its pizza
    #[command(alias = "s")]
    Show(OrderIdArgs),
    /// Bake an order once every topping is done
    #[command(alias = "b")]
    Bake(OrderIdArgs),
    /// Throw an order away
    #[command(alias = "d")]
    Delete(OrderIdArgs),
}

#[derive(Subcommand)]
pub enum ToppingCommands {
    /// Add a topping to an order
    #[command(alias = "a")]
    Add(AddToppingArgs),
    /// Mark a topping done, or not done again
    #[command(alias = "x")]
    Toggle(ToggleToppingArgs),
}

#[derive(ClapArgs)]
pub struct CreateOrderArgs {
    /// Title of the order
    pub title: String,
    /// Optional description providing more context about the order
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<CreateOrderArgs> for CreateOrder {
    fn from(val: CreateOrderArgs) -> Self {
        CreateOrder {
            title: val.title,
            description: val.description,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListOrdersArgs {
    /// Show baked orders instead of the ones still cooking
    #[arg(long)]
    pub completed: bool,
}

impl From<ListOrdersArgs> for ListOrders {
    fn from(val: ListOrdersArgs) -> Self {
        ListOrders {
            completed: val.completed,
        }
    }
}

#[derive(ClapArgs)]
pub struct OrderIdArgs {
    /// ID of the order
    pub id: String,
}

impl From<OrderIdArgs> for Id {
    fn from(val: OrderIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct AddToppingArgs {
    /// ID of the order to add the topping to
    pub order_id: String,
    /// Title of the topping
    pub title: String,
}

impl From<AddToppingArgs> for AddSubTask {
    fn from(val: AddToppingArgs) -> Self {
        AddSubTask {
            order_id: val.order_id,
            title: val.title,
        }
    }
}

#[derive(ClapArgs)]
pub struct ToggleToppingArgs {
    /// ID of the order holding the topping
    pub order_id: String,
    /// ID of the topping to toggle
    pub topping_id: String,
}

impl From<ToggleToppingArgs> for ToggleSubTask {
    fn from(val: ToggleToppingArgs) -> Self {
        ToggleSubTask {
            order_id: val.order_id,
            subtask_id: val.topping_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_toggle_args_map_to_subtask_id() {
        let args = Args::parse_from(["pizack", "t", "toggle", "order-1", "top-1"]);
        match args.command {
            Some(Commands::Topping {
                command: ToppingCommands::Toggle(toggle),
            }) => {
                let params = ToggleSubTask::from(toggle);
                assert_eq!(params.order_id, "order-1");
                assert_eq!(params.subtask_id, "top-1");
            }
            _ => panic!("Expected topping toggle command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["pizack", "tower", "--no-color", "--data-dir", "/tmp/x"]);
        assert!(args.no_color);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
