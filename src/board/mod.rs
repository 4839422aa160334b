//! Board module - hole grid and tiled background.

mod background;
mod holes;
mod plugin;

pub use background::{grass_map, tile_map, BoardPiece};
pub use holes::HoleLayout;
pub use plugin::BoardPlugin;
