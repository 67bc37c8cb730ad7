mod grid;
mod tile;

pub use grid::{Direction, Grid, GridError, TileUpdate};
pub use tile::Tile;
