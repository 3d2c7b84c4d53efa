//! Restricted visibility: only cells close to the snake's head are shown

use crate::basic::{Cell, GridDim};

/// Visible radius in cells
pub const RADIUS_CELLS: i32 = 5;

/// Whether `cell` is visible, comparing the straight-line distance
/// between cell centers to the radius
pub fn is_lit(cell: Cell, head: Cell, grid: GridDim) -> bool {
    let radius = RADIUS_CELLS * grid.step;
    // both centers are offset by the same half step
    let dx = cell.x - head.x;
    let dy = cell.y - head.y;
    dx * dx + dy * dy <= radius * radius
}

/// Cells that must be covered this frame
pub fn occluded_cells(head: Cell, grid: GridDim) -> impl Iterator<Item = Cell> {
    grid.cells().filter(move |cell| !is_lit(*cell, head, grid))
}
