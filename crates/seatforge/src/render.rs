//! Text rendering of a layout and its occupants.

use std::fmt::Write;

use seatforge_core::Seat;
use seatforge_solver::SeatingPlan;

const CELL_WIDTH: usize = 4;

/// Widest coordinate range drawn with empty cells in between.
const MAX_SPAN: i64 = 64;

/// Draws `layout` as a grid, one row per y coordinate.
///
/// Occupied seats show `P<id>`, empty seats show their position initial in
/// parentheses and cells without a seat show `.`. Passing `None` draws the
/// bare layout. Axes spanning more than 64 cells keep only the rows and
/// columns that hold a seat.
///
/// # Example
///
/// ```
/// use seatforge::render_grid;
/// use seatforge::{Orientation, PassengerId, Position, Seat, SeatId, SeatingPlan};
///
/// let layout = vec![
///     Seat::new("W", 0, 0, Position::Window, Orientation::Forward),
///     Seat::new("A", 1, 0, Position::Aisle, Orientation::Forward),
/// ];
/// let plan = SeatingPlan::new(vec![(PassengerId(1), SeatId::from("A"))]);
///
/// let grid = render_grid(&layout, Some(&plan));
/// assert!(grid.contains("Y=0 │ (W) P1"));
/// ```
pub fn render_grid(layout: &[Seat], plan: Option<&SeatingPlan>) -> String {
    if layout.is_empty() {
        return String::new();
    }
    let xs = axis(layout.iter().map(|s| s.x));
    let ys = axis(layout.iter().map(|s| s.y));

    let cells: Vec<Vec<String>> = ys
        .iter()
        .map(|&y| {
            xs.iter()
                .map(|&x| match layout.iter().find(|s| s.x == x && s.y == y) {
                    None => ".".to_string(),
                    Some(seat) => match plan.and_then(|p| p.occupant_of(seat.id.as_str())) {
                        Some(passenger) => format!("P{passenger}"),
                        None => format!("({})", seat.position.initial()),
                    },
                })
                .collect()
        })
        .collect();
    let width = xs
        .iter()
        .map(|x| x.to_string().len())
        .chain(cells.iter().flatten().map(String::len))
        .map(|len| len + 1)
        .fold(CELL_WIDTH, usize::max);

    let mut out = String::new();
    let mut line = String::from("      ");
    for x in &xs {
        let _ = write!(line, "{:<w$}", x, w = width);
    }
    push_line(&mut out, &line);
    push_line(
        &mut out,
        &format!("    {}", "─".repeat(xs.len() * width + 2)),
    );

    for (y, row) in ys.iter().zip(&cells) {
        line.clear();
        let _ = write!(line, "Y={:<2}│ ", y);
        for cell in row {
            let _ = write!(line, "{:<w$}", cell, w = width);
        }
        push_line(&mut out, &line);
    }
    out
}

/// Every coordinate between the extremes, or only the occupied ones when
/// the span is wider than [`MAX_SPAN`].
fn axis(values: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut values: Vec<i32> = values.collect();
    values.sort_unstable();
    values.dedup();
    match (values.first(), values.last()) {
        (Some(&min), Some(&max)) if i64::from(max) - i64::from(min) < MAX_SPAN => {
            (min..=max).collect()
        }
        _ => values,
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
