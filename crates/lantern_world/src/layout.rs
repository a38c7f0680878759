//! Grid placement and text rendering of the room graph.
//!
//! Rooms are placed by walking exits depth-first from the player's room,
//! each exit moving one cell in its direction. The grid is then drawn one
//! text row per room row, with a connector row between them:
//!
//! ```text
//! [Bedroom]<=> Hallway
//!                 |
//!              Kitchen
//! ```

use std::collections::HashMap;

use im::OrdMap;

use crate::direction::Direction;
use crate::room::Room;

const HORIZONTAL: &str = "<=>";
const NO_HORIZONTAL: &str = "   ";

/// Assigns a grid cell to every room reachable from `start`.
///
/// When two rooms land on the same cell the first one placed keeps it.
#[must_use]
pub fn place(rooms: &OrdMap<String, Room>, start: &str) -> HashMap<String, (i32, i32)> {
    let mut positions = HashMap::new();
    let mut taken = HashMap::new();
    if !rooms.contains_key(start) {
        return positions;
    }

    let mut stack = vec![(start.to_string(), (0, 0))];
    while let Some((id, cell)) = stack.pop() {
        if positions.contains_key(&id) || taken.contains_key(&cell) {
            continue;
        }
        let Some(room) = rooms.get(&id) else {
            continue;
        };
        positions.insert(id.clone(), cell);
        taken.insert(cell, id);

        // Reverse so the first exit is explored first.
        for (direction, target) in room.exits.iter().rev() {
            let (dr, dc) = direction.offset();
            stack.push((target.clone(), (cell.0 + dr, cell.1 + dc)));
        }
    }
    positions
}

/// Draws the map, bracketing the room with id `current`.
#[must_use]
pub fn render(rooms: &OrdMap<String, Room>, current: &str) -> String {
    let positions = place(rooms, current);
    if positions.is_empty() {
        return String::new();
    }

    let min_row = positions.values().map(|p| p.0).min().unwrap_or(0);
    let max_row = positions.values().map(|p| p.0).max().unwrap_or(0);
    let min_col = positions.values().map(|p| p.1).min().unwrap_or(0);
    let max_col = positions.values().map(|p| p.1).max().unwrap_or(0);
    let height = usize::try_from(max_row - min_row + 1).unwrap_or(0);
    let width = usize::try_from(max_col - min_col + 1).unwrap_or(0);

    let mut grid: Vec<Vec<Option<&Room>>> = vec![vec![None; width]; height];
    for (id, (row, col)) in &positions {
        if let (Some(room), Ok(r), Ok(c)) = (
            rooms.get(id),
            usize::try_from(row - min_row),
            usize::try_from(col - min_col),
        ) {
            grid[r][c] = Some(room);
        }
    }

    let name_width = positions
        .keys()
        .filter_map(|id| rooms.get(id))
        .map(|room| room.name.chars().count())
        .max()
        .unwrap_or(0);
    let cell_width = name_width + 2;
    let empty_cell = " ".repeat(cell_width);
    let vertical = center("|", cell_width);

    let mut lines = Vec::with_capacity(height * 2);
    for (r, row) in grid.iter().enumerate() {
        if r > 0 {
            let mut line = String::new();
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    line.push_str(NO_HORIZONTAL);
                }
                match cell {
                    Some(room) if room.exit(Direction::North).is_some() => line.push_str(&vertical),
                    _ => line.push_str(&empty_cell),
                }
            }
            lines.push(line.trim_end().to_string());
        }

        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if let Some(room) = cell {
                if c > 0 {
                    let connector = if room.exit(Direction::West).is_some() {
                        HORIZONTAL
                    } else {
                        NO_HORIZONTAL
                    };
                    line.push_str(connector);
                }
                let label = if room.id == current {
                    format!("[{}]", room.name)
                } else {
                    format!(" {} ", room.name)
                };
                line.push_str(&center(&label, cell_width));
            } else {
                if c > 0 {
                    line.push_str(NO_HORIZONTAL);
                }
                line.push_str(&empty_cell);
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    format!(
        "{}{text}{}",
        " ".repeat(left),
        " ".repeat(padding - left)
    )
}
