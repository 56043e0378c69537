// Reusable library API — visible to both CLI and WASM builds
pub mod clue_map;
pub mod direction;
pub mod document;
pub mod errors;
pub mod grid;
mod grid_char;
pub mod log;
pub mod numbering;
pub mod puzzle;
pub mod render;
pub mod word_list;

// File and editor handling only exists natively.
#[cfg(not(target_arch = "wasm32"))]
pub mod workspace;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::Direction;
pub use grid::Grid;
pub use numbering::{Cell, NumberedCells};
pub use puzzle::Puzzle;
