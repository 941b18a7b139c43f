//! Composite view of one pizza: grade, base layers and placed toppings.

use serde::{Deserialize, Serialize};

use super::{place_toppings, PlacementConfig, ToppingPlacement};
use crate::models::{Order, PizzaGrade};

/// Base layers spread on the dough as work progresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaLayers {
    pub sauce: bool,
    pub cheese: bool,
}

impl PizzaLayers {
    pub const SAUCE_AT: f64 = 0.1;
    pub const CHEESE_AT: f64 = 0.3;

    pub fn from_progress(progress: f64) -> Self {
        Self {
            sauce: progress >= Self::SAUCE_AT,
            cheese: progress >= Self::CHEESE_AT,
        }
    }
}

/// Everything needed to draw an order as a pizza.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaView {
    pub order_id: String,
    pub title: String,
    pub grade: PizzaGrade,
    pub total_toppings: usize,
    pub completed_toppings: usize,
    pub progress: f64,
    pub layers: PizzaLayers,
    pub pizza_radius: f64,
    pub toppings: Vec<ToppingPlacement>,
}

impl PizzaView {
    pub fn new(order: &Order, config: &PlacementConfig) -> Self {
        let progress = order.progress();

        Self {
            order_id: order.id.clone(),
            title: order.title.clone(),
            grade: order.grade(),
            total_toppings: order.sub_tasks.len(),
            completed_toppings: order.completed_count(),
            progress,
            layers: PizzaLayers::from_progress(progress),
            pizza_radius: config.pizza_radius,
            toppings: place_toppings(&order.id, &order.sub_tasks, config),
        }
    }

    pub fn box_label(&self) -> &'static str {
        self.grade.box_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubTask;

    #[test]
    fn test_layers_thresholds() {
        assert_eq!(PizzaLayers::from_progress(0.0), PizzaLayers::default());
        assert_eq!(
            PizzaLayers::from_progress(0.1),
            PizzaLayers { sauce: true, cheese: false }
        );
        assert_eq!(
            PizzaLayers::from_progress(0.3),
            PizzaLayers { sauce: true, cheese: true }
        );
    }

    #[test]
    fn test_view_from_order() {
        let mut order = Order::new("Checkout", None);
        for title in ["Cart", "Payment", "Receipt"] {
            order.sub_tasks.push(SubTask::new(title));
        }
        order.sub_tasks[0].is_completed = true;

        let view = PizzaView::new(&order, &PlacementConfig::default());
        assert_eq!(view.grade, PizzaGrade::Red);
        assert_eq!(view.box_label(), "Regular Box");
        assert_eq!(view.completed_toppings, 1);
        assert_eq!(view.toppings.len(), 3);
        assert!(view.layers.sauce && view.layers.cheese);
    }
}
