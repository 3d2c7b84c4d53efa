use static_assertions::const_assert_eq;

pub use cell::{Cell, GridDim};
pub use dir::Dir;
pub use point::Point;

mod cell;
mod dir;
mod point;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const GRID_STEP: i32 = 20;

// cells must tile the canvas exactly for wrapping to line up
const_assert_eq!(SCREEN_WIDTH % GRID_STEP, 0);
const_assert_eq!(SCREEN_HEIGHT % GRID_STEP, 0);

pub const GRID: GridDim = GridDim {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
    step: GRID_STEP,
};
