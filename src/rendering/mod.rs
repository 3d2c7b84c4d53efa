pub use board_mesh::board_mesh;
pub use grass_mesh::grass_mesh;
pub use grid_mesh::grid_mesh;
pub use menu::Typeface;

mod board_mesh;
mod grass_mesh;
mod grid_mesh;
pub mod menu;
pub mod palette;
