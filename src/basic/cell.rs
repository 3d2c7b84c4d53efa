use std::fmt::{Debug, Error, Formatter};

use itertools::iproduct;
use num_integer::Integer;

use super::dir::Dir;
use crate::basic::Point;

/// A grid cell identified by the pixel position of its top-left
/// corner, both coordinates are multiples of the grid step
#[derive(Eq, PartialEq, Copy, Clone, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Pixel dimensions of the board and the size of one cell
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDim {
    pub width: i32,
    pub height: i32,
    pub step: i32,
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl Cell {
    // one step in `dir`, exiting one edge re-enters at the opposite edge
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, grid: GridDim) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: (self.x + dx as i32 * grid.step).mod_floor(&grid.width),
            y: (self.y + dy as i32 * grid.step).mod_floor(&grid.height),
        }
    }

    pub fn to_point(self) -> Point {
        Point { x: self.x as f32, y: self.y as f32 }
    }

    pub fn center(self, grid: GridDim) -> Point {
        self.to_point() + Point::square(grid.step as f32 / 2.)
    }
}

impl GridDim {
    pub fn columns(self) -> i32 {
        self.width / self.step
    }

    pub fn rows(self) -> i32 {
        self.height / self.step
    }

    pub fn cell_count(self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    pub fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x.is_multiple_of(&self.step)
            && cell.y.is_multiple_of(&self.step)
    }

    /// Cell in column `col` and row `row`
    pub fn cell_at(self, col: i32, row: i32) -> Cell {
        Cell { x: col * self.step, y: row * self.step }
    }

    /// Row-major index of a cell, inverse of `cell_from_index`
    pub fn index_of(self, cell: Cell) -> usize {
        ((cell.y / self.step) * self.columns() + cell.x / self.step) as usize
    }

    pub fn cell_from_index(self, idx: usize) -> Cell {
        let (row, col) = (idx as i32).div_rem(&self.columns());
        self.cell_at(col, row)
    }

    /// All cells, row by row
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.rows(), 0..self.columns()).map(move |(row, col)| self.cell_at(col, row))
    }

    /// The cell containing the center of the canvas
    pub fn center_cell(self) -> Cell {
        Cell {
            x: (self.width / 2).prev_multiple_of(&self.step),
            y: (self.height / 2).prev_multiple_of(&self.step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::GRID;
    use Dir::*;

    #[test]
    fn test_wrapping_translate() {
        let step = GRID.step;
        [
            ((GRID.width - step, 40), R, (0, 40)),
            ((0, 40), L, (GRID.width - step, 40)),
            ((100, 0), U, (100, GRID.height - step)),
            ((100, GRID.height - step), D, (100, 0)),
            ((100, 100), R, (100 + step, 100)),
            ((100, 100), U, (100, 100 - step)),
        ]
        .iter()
        .for_each(|&((x1, y1), dir, (x2, y2))| {
            let moved = Cell { x: x1, y: y1 }.wrapping_translate(dir, GRID);
            assert_eq!(moved, Cell { x: x2, y: y2 }, "{:?} from <{}, {}>", dir, x1, y1);
        });
    }

    #[test]
    fn test_wrap_stays_on_board() {
        // walk twice around the board in every direction
        for dir in Dir::iter() {
            let mut cell = GRID.center_cell();
            for _ in 0..2 * GRID.columns().max(GRID.rows()) {
                cell = cell.wrapping_translate(dir, GRID);
                assert!(GRID.contains(cell), "{:?} left the board", cell);
            }
        }
    }

    #[test]
    fn test_cell_index_round_trip() {
        assert_eq!(GRID.cell_count(), 1200);
        assert_eq!(GRID.cells().count(), GRID.cell_count());
        let cell = Cell { x: 780, y: 20 };
        assert_eq!(GRID.index_of(cell), 40 + 39);
        assert_eq!(GRID.cell_from_index(79), cell);
    }

    #[test]
    fn test_center() {
        assert_eq!(GRID.center_cell(), Cell { x: 400, y: 300 });
        assert_eq!(GRID.center_cell().center(GRID), Point { x: 410., y: 310. });
    }
}
