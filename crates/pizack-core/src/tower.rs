//! Delivery tower: baked pizzas stacked in the order they came out of the
//! oven.

use jiff::Timestamp;

use crate::models::Order;

/// Baked orders sorted oldest first, so index 0 is the bottom of the stack
/// and the last element is the most recent delivery on top.
///
/// # Examples
///
/// ```rust
/// use pizack_core::{models::{Order, OrderStatus}, tower::DeliveryTower};
/// use jiff::Timestamp;
///
/// let baked = |title: &str, ms: i64| Order {
///     status: OrderStatus::Completed,
///     completed_at: Some(Timestamp::from_millisecond(ms).unwrap()),
///     ..Order::new(title, None)
/// };
/// let orders = vec![baked("t1", 100), baked("t2", 50), baked("t3", 200)];
///
/// let tower = DeliveryTower::from_orders(&orders);
/// let titles: Vec<_> = tower.iter().map(|o| o.title.as_str()).collect();
/// assert_eq!(titles, ["t2", "t1", "t3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryTower(pub Vec<Order>);

impl DeliveryTower {
    /// Build the tower from a collection, keeping only baked orders.
    ///
    /// Orders baked at the same instant keep their collection order.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut levels: Vec<Order> = orders
            .into_iter()
            .filter(|o| o.is_completed())
            .cloned()
            .collect();
        // Stable sort; a missing bake time sorts as the epoch.
        levels.sort_by_key(|o| o.completed_at.unwrap_or(Timestamp::UNIX_EPOCH));
        Self(levels)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    fn baked(id: &str, completed_ms: i64) -> Order {
        Order {
            id: id.to_string(),
            status: OrderStatus::Completed,
            completed_at: Some(Timestamp::from_millisecond(completed_ms).unwrap()),
            ..Order::new(id, None)
        }
    }

    #[test]
    fn test_sorted_ascending_by_completion() {
        let orders = vec![baked("t1", 100), baked("t2", 50), baked("t3", 200)];
        let tower = DeliveryTower::from_orders(&orders);

        let ids: Vec<_> = tower.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t1", "t3"]);
    }

    #[test]
    fn test_cooking_orders_excluded() {
        let orders = vec![baked("done", 10), Order::new("cooking", None)];
        let tower = DeliveryTower::from_orders(&orders);

        let ids: Vec<_> = tower.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["done"]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let orders = vec![
            baked("a", 100),
            baked("b", 50),
            baked("c", 100),
            baked("d", 100),
        ];
        let tower = DeliveryTower::from_orders(&orders);

        let ids: Vec<_> = tower.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_empty_tower() {
        let tower = DeliveryTower::from_orders(&Vec::<Order>::new());
        assert!(tower.is_empty());
    }
}
