//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Order, OrderStatus, OrderSummary, PizzaGrade, SubTask};

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PizzaGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SubTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_completed { 'x' } else { ' ' };
        writeln!(f, "- [{mark}] {} (ID: {})", self.title, self.id)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = self.grade();

        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Grade: {grade} ({})", grade.box_label())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Baked: {}", LocalDateTime(completed_at))?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.sub_tasks.is_empty() {
            writeln!(f, "\nNo toppings yet. Add a topping to start cooking!")?;
        } else {
            writeln!(
                f,
                "\n## Toppings ({}/{})",
                self.completed_count(),
                self.sub_tasks.len()
            )?;
            writeln!(f)?;
            for subtask in &self.sub_tasks {
                write!(f, "{subtask}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_toppings > 0 {
            format!(" ({}/{})", self.completed_toppings, self.total_toppings)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f, "- **Grade**: {} ({})", self.grade, self.grade.box_label())?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- **Baked**: {}", LocalDateTime(completed_at))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::{Order, OrderStatus, OrderSummary, SubTask};

    fn create_test_order() -> Order {
        Order {
            id: "order-42".to_string(),
            title: "Build login".to_string(),
            description: Some("OAuth flow".to_string()),
            sub_tasks: vec![
                SubTask {
                    id: "st-1".to_string(),
                    title: "Form".to_string(),
                    is_completed: true,
                },
                SubTask {
                    id: "st-2".to_string(),
                    title: "Token refresh".to_string(),
                    is_completed: false,
                },
            ],
            created_at: Timestamp::from_second(1640995200).unwrap(),
            completed_at: None,
            status: OrderStatus::Cooking,
        }
    }

    #[test]
    fn test_order_display() {
        let output = create_test_order().to_string();

        assert!(output.contains("# Build login"));
        assert!(output.contains("- ID: order-42"));
        assert!(output.contains("- Status: 🔪 Cooking"));
        assert!(output.contains("- Grade: green (Snack Box)"));
        assert!(output.contains("OAuth flow"));
        assert!(output.contains("## Toppings (1/2)"));
        assert!(output.contains("- [x] Form (ID: st-1)"));
        assert!(output.contains("- [ ] Token refresh (ID: st-2)"));
        assert!(!output.contains("- Baked:"));
    }

    #[test]
    fn test_empty_order_display() {
        let mut order = create_test_order();
        order.sub_tasks.clear();

        assert!(order.to_string().contains("No toppings yet."));
    }

    #[test]
    fn test_baked_order_shows_bake_time() {
        let mut order = create_test_order();
        order.sub_tasks[1].is_completed = true;
        order.bake(Timestamp::from_second(1641081600).unwrap()).unwrap();

        let output = order.to_string();
        assert!(output.contains("🍕 Completed"));
        assert!(output.contains("- Baked:"));
    }

    #[test]
    fn test_summary_display() {
        let summary = OrderSummary::from(&create_test_order());
        let output = summary.to_string();

        assert!(output.contains("## Build login (ID: order-42) (1/2)"));
        assert!(output.contains("- **Description**: OAuth flow"));
        assert!(output.contains("- **Grade**: green (Snack Box)"));
    }
}
