//! Display for the delivery tower and the shift report.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{models::ShiftReport, tower::DeliveryTower};

impl fmt::Display for DeliveryTower {
    /// Prints the stack top-down, so the newest pizza is the first line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Delivery Tower")?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "Awaiting delivery...");
        }

        for (index, order) in self.iter().enumerate().rev() {
            let grade = order.grade();
            write!(
                f,
                "{}. [{}] {} ({} toppings, {})",
                index + 1,
                grade.box_label(),
                order.title,
                order.sub_tasks.len(),
                grade
            )?;
            if let Some(completed_at) = &order.completed_at {
                write!(f, " baked {}", LocalDateTime(completed_at))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ShiftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Shift Report")?;
        writeln!(f)?;
        writeln!(f, "- **Pizzas delivered**: {}", self.total_pizzas)?;
        writeln!(f, "- **Toppings used**: {}", self.total_toppings)?;
        writeln!(f, "- **Score**: {}", self.score)
    }
}
