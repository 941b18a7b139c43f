//! Terminal plot of a pizza and its toppings.

use std::fmt;

use crate::layout::PizzaView;

/// Character columns either side of the centre.
const HALF_COLS: usize = 15;
/// Character rows either side of the centre; cells are about twice as tall
/// as they are wide.
const HALF_ROWS: usize = 7;

impl PizzaView {
    /// Plot the pizza on a character grid, one string per row.
    pub fn plot(&self) -> Vec<String> {
        let cols = 2 * HALF_COLS + 1;
        let rows = 2 * HALF_ROWS + 1;
        let radius = self.pizza_radius.max(f64::EPSILON);
        let col_unit = radius / HALF_COLS as f64;
        let row_unit = radius / HALF_ROWS as f64;

        let base = if self.layers.cheese {
            '~'
        } else if self.layers.sauce {
            ':'
        } else {
            '.'
        };

        let mut grid: Vec<Vec<char>> = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        let x = (c as f64 - HALF_COLS as f64) * col_unit;
                        let y = (r as f64 - HALF_ROWS as f64) * row_unit;
                        if x * x + y * y <= radius * radius {
                            base
                        } else {
                            ' '
                        }
                    })
                    .collect()
            })
            .collect();

        for topping in &self.toppings {
            let col = (topping.x / col_unit).round() + HALF_COLS as f64;
            let row = (topping.y / row_unit).round() + HALF_ROWS as f64;
            let col = col.clamp(0.0, (cols - 1) as f64) as usize;
            let row = row.clamp(0.0, (rows - 1) as f64) as usize;
            grid[row][col] = topping.kind.glyph();
        }

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

impl fmt::Display for PizzaView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Box: {} ({})", self.box_label(), self.grade)?;
        writeln!(
            f,
            "- Toppings: {}/{} ({:.0}%)",
            self.completed_toppings,
            self.total_toppings,
            self.progress * 100.0
        )?;

        let mut layers = vec!["dough"];
        if self.layers.sauce {
            layers.push("sauce");
        }
        if self.layers.cheese {
            layers.push("cheese");
        }
        writeln!(f, "- Layers: {}", layers.join(", "))?;
        writeln!(f)?;

        writeln!(f, "```text")?;
        for line in self.plot() {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "```")
    }
}
