//! Deterministic Grid Layout Constants
//!
//! Vertex positions are percentage coordinates computed purely from the
//! insertion index within a level. Re-running the analyzer on an unchanged
//! tree must reproduce identical layouts, so nothing here may depend on
//! anything but the index.

use crate::models::Position;

/// Columns per row before the grid wraps
pub const GRID_COLUMNS: usize = 4;
/// X coordinate of the first column
pub const GRID_X_BASE: f64 = 12.0;
/// Horizontal step between columns
pub const GRID_X_STEP: f64 = 24.0;
/// Y coordinate of the first row
pub const GRID_Y_BASE: f64 = 18.0;
/// Vertical step between rows
pub const GRID_Y_STEP: f64 = 26.0;

/// Y coordinate of the single-row layouts
pub const ROW_Y: f64 = 50.0;
/// X coordinate of the first slot in a single-row layout
pub const ROW_X_BASE: f64 = 15.0;
/// Horizontal step in a single-row layout
pub const ROW_X_STEP: f64 = 22.0;

/// Wrapping grid position for the nth inserted vertex.
pub fn grid_position(index: usize) -> Position {
    Position {
        x: GRID_X_BASE + ((index % GRID_COLUMNS) as f64) * GRID_X_STEP,
        y: GRID_Y_BASE + ((index / GRID_COLUMNS) as f64) * GRID_Y_STEP,
    }
}

/// Single-row position for the nth inserted vertex.
pub fn row_position(index: usize) -> Position {
    Position {
        x: ROW_X_BASE + (index as f64) * ROW_X_STEP,
        y: ROW_Y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_wraps_to_new_row() {
        let first = grid_position(0);
        let last_in_row = grid_position(GRID_COLUMNS - 1);
        let wrapped = grid_position(GRID_COLUMNS);

        assert_eq!(first.y, last_in_row.y);
        assert_eq!(wrapped.x, first.x);
        assert_eq!(wrapped.y, first.y + GRID_Y_STEP);
    }

    #[test]
    fn test_positions_are_deterministic() {
        assert_eq!(grid_position(7), grid_position(7));
        assert_eq!(row_position(3), row_position(3));
    }
}
