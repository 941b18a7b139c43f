//! Topping placement on the pizza surface.
//!
//! Toppings are laid out on a golden-angle (phyllotaxis) spiral: the `n`-th
//! topping sits at radius `c * sqrt(n + 1)` and angle `n * 137.508°`, which
//! spreads points evenly without overlap. The whole spiral is rotated by an
//! offset derived from the order ID, and each topping gets a small jitter
//! and a rotation derived from its own topping ID. Everything is a pure
//! function of stable IDs, so the same order always renders the same pizza.
//!
//! ```rust
//! use pizack_core::layout::{place_toppings, PlacementConfig};
//! use pizack_core::models::SubTask;
//!
//! let mut topping = SubTask::new("Login form");
//! topping.is_completed = true;
//!
//! let config = PlacementConfig::default();
//! let first = place_toppings("order-1", &[topping.clone()], &config);
//! let again = place_toppings("order-1", &[topping], &config);
//!
//! assert_eq!(first.len(), 3);
//! assert_eq!(first, again);
//! ```

pub mod hash;
pub mod pizza;

use serde::{Deserialize, Serialize};

use self::hash::{fnv1a, unit_random};
use crate::models::SubTask;

pub use pizza::{PizzaLayers, PizzaView};

/// The phyllotaxis divergence angle, in degrees.
pub const GOLDEN_ANGLE_DEGREES: f64 = 137.508;

/// Geometry of the pizza and the spiral drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Spiral spacing constant `c`
    pub spacing: f64,
    /// Radius of the pizza surface
    pub pizza_radius: f64,
    /// Margin kept clear at the pizza's edge
    pub padding: f64,
    /// Maximum positional jitter per axis
    pub jitter: f64,
    /// Topping instances drawn for each finished subtask
    pub toppings_per_subtask: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            spacing: 14.0,
            pizza_radius: 75.0,
            padding: 5.0,
            jitter: 3.0,
            toppings_per_subtask: 3,
        }
    }
}

impl PlacementConfig {
    /// Largest radius a topping may be placed at.
    pub fn max_radius(&self) -> f64 {
        (self.pizza_radius - self.padding).max(0.0)
    }
}

/// Cosmetic topping variety, cycled through by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToppingKind {
    Pepperoni,
    Mushroom,
    Olive,
    Pepper,
    Basil,
}

impl ToppingKind {
    pub const PALETTE: [ToppingKind; 5] = [
        ToppingKind::Pepperoni,
        ToppingKind::Mushroom,
        ToppingKind::Olive,
        ToppingKind::Pepper,
        ToppingKind::Basil,
    ];

    /// Kind of the topping at `index` in the flattened topping list.
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Single character used when plotting the pizza in a terminal.
    pub fn glyph(&self) -> char {
        match self {
            ToppingKind::Pepperoni => 'o',
            ToppingKind::Mushroom => 'm',
            ToppingKind::Olive => '@',
            ToppingKind::Pepper => 'v',
            ToppingKind::Basil => '*',
        }
    }
}

/// Position and rotation of one topping instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToppingPlacement {
    /// Topping (subtask) this instance belongs to
    pub subtask_id: String,
    /// Instance offset within its subtask, `0..toppings_per_subtask`
    pub instance: usize,
    pub kind: ToppingKind,
    /// Spiral radius before jitter, never above [`PlacementConfig::max_radius`]
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, `[0, 360)`
    pub rotation: f64,
}

/// Rotation applied to the whole spiral of `order_id`, in radians.
pub fn rotation_offset(order_id: &str) -> f64 {
    f64::from(fnv1a(order_id.as_bytes()) % 360).to_radians()
}

/// Lay out the toppings of an order.
///
/// Only completed subtasks contribute, each with
/// `config.toppings_per_subtask` instances, in subtask order.
pub fn place_toppings(
    order_id: &str,
    sub_tasks: &[SubTask],
    config: &PlacementConfig,
) -> Vec<ToppingPlacement> {
    let offset = rotation_offset(order_id);
    let golden_angle = GOLDEN_ANGLE_DEGREES.to_radians();
    let max_radius = config.max_radius();

    sub_tasks
        .iter()
        .filter(|task| task.is_completed)
        .flat_map(|task| (0..config.toppings_per_subtask).map(move |instance| (task, instance)))
        .enumerate()
        .map(|(n, (task, instance))| {
            let radius = (config.spacing * ((n + 1) as f64).sqrt()).min(max_radius);
            let angle = n as f64 * golden_angle + offset;

            let seed = f64::from(fnv1a(format!("{}{}", task.id, instance).as_bytes()));
            let jitter_x = (unit_random(seed) - 0.5) * 2.0 * config.jitter;
            let jitter_y = (unit_random(seed + 1.0) - 0.5) * 2.0 * config.jitter;
            let rotation = unit_random(seed + 2.0) * 360.0;

            ToppingPlacement {
                subtask_id: task.id.clone(),
                instance,
                kind: ToppingKind::for_index(n),
                radius,
                x: radius * angle.cos() + jitter_x,
                y: radius * angle.sin() + jitter_y,
                rotation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toppings(count: usize, done: bool) -> Vec<SubTask> {
        (0..count)
            .map(|i| SubTask {
                id: format!("topping-{i}"),
                title: format!("Topping {i}"),
                is_completed: done,
            })
            .collect()
    }

    #[test]
    fn test_only_completed_toppings_are_placed() {
        let mut tasks = toppings(3, false);
        tasks[1].is_completed = true;

        let placed = place_toppings("order", &tasks, &PlacementConfig::default());
        assert_eq!(placed.len(), 3);
        assert!(placed.iter().all(|p| p.subtask_id == "topping-1"));
        assert_eq!(
            placed.iter().map(|p| p.instance).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_placement_is_bit_reproducible() {
        let tasks = toppings(7, true);
        let config = PlacementConfig::default();

        let first = place_toppings("8d3c1f0e", &tasks, &config);
        let second = place_toppings("8d3c1f0e", &tasks, &config);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.rotation.to_bits(), b.rotation.to_bits());
        }
    }

    #[test]
    fn test_radius_never_exceeds_maximum() {
        let config = PlacementConfig::default();
        assert_eq!(config.max_radius(), 70.0);

        let placed = place_toppings("order", &toppings(40, true), &config);
        assert_eq!(placed.len(), 120);
        assert!(placed.iter().all(|p| p.radius <= 70.0));
        assert_eq!(placed.last().map(|p| p.radius), Some(70.0));
    }

    #[test]
    fn test_jitter_and_rotation_bounds() {
        let config = PlacementConfig::default();
        let offset = rotation_offset("order");
        let golden_angle = GOLDEN_ANGLE_DEGREES.to_radians();

        for (n, p) in place_toppings("order", &toppings(10, true), &config)
            .iter()
            .enumerate()
        {
            let angle = n as f64 * golden_angle + offset;
            assert!((p.x - p.radius * angle.cos()).abs() <= 3.0);
            assert!((p.y - p.radius * angle.sin()).abs() <= 3.0);
            assert!((0.0..360.0).contains(&p.rotation));
        }
    }

    #[test]
    fn test_first_radius_follows_spiral() {
        let placed = place_toppings("order", &toppings(1, true), &PlacementConfig::default());
        assert_eq!(placed[0].radius, 14.0);
        assert!((placed[1].radius - 14.0 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_kinds_cycle_through_palette() {
        let placed = place_toppings("order", &toppings(4, true), &PlacementConfig::default());
        for (n, p) in placed.iter().enumerate() {
            assert_eq!(p.kind, ToppingKind::PALETTE[n % 5]);
        }
    }

    #[test]
    fn test_rotation_offset_depends_on_order_id() {
        assert_eq!(rotation_offset("abc"), rotation_offset("abc"));
        assert!(rotation_offset("abc") < 360f64.to_radians());
        assert_ne!(rotation_offset("order-a"), rotation_offset("order-b"));
    }

    #[test]
    fn test_empty_order_places_nothing() {
        assert!(place_toppings("order", &[], &PlacementConfig::default()).is_empty());
    }
}
