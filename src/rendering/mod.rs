pub mod bead_grid;
pub mod grid_renderer;
pub mod png_codec;

pub use bead_grid::{BeadCell, BeadGrid};
pub use grid_renderer::{GridRenderer, MAX_OUTPUT_PIXELS};
