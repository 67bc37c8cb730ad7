//! Grid state and move engine for the taquin puzzle.

use super::tile::Tile;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Number of randomized single-step pushes performed by [`Grid::shuffle`].
///
/// Every step is itself a legal move, so the shuffled arrangement is always
/// reachable from the solved state, hence always solvable.
const SHUFFLE_STEPS: usize = 1000;

/// Errors raised on misuse of the grid API.
///
/// Illegal *moves* are not errors: they arise from ordinary user input and
/// are reported through the `bool` returned by the push operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Coordinates outside `[0, size)` passed to a cell accessor.
    #[display("position ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid.
        size: usize,
    },
    /// Grids smaller than 2x2 cannot hold a puzzle.
    #[display("grid side {size} is too small, the puzzle needs at least 2x2")]
    SizeTooSmall {
        /// Requested side length.
        size: usize,
    },
}

/// A committed change to a single cell.
///
/// The grid records one update per committed value change; the facade drains
/// them and forwards each to the observer so a display can refresh a single
/// element without re-scanning the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileUpdate {
    /// Row of the changed cell.
    pub row: usize,
    /// Column of the changed cell.
    pub col: usize,
    /// Value now held by the cell.
    pub value: u32,
}

/// Direction in which a tile slides into the empty slot.
///
/// Names follow the apparent motion of the *tile*, not of the empty slot:
/// [`Direction::Up`] slides the tile *below* the empty slot upward into it.
/// This mirrors what a player sees on screen when pressing an arrow key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// The tile below the empty slot slides up.
    Up,
    /// The tile above the empty slot slides down.
    Down,
    /// The tile right of the empty slot slides left.
    Left,
    /// The tile left of the empty slot slides right.
    Right,
}

impl Direction {
    /// Offset from the empty cell to the tile that slides this way.
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    /// Returns the direction that undoes a slide in this direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The square grid of tiles on which the taquin is played.
///
/// Holds `size * size` tiles in row-major order together with the
/// coordinates of the cell currently holding the empty slot. At all times
/// exactly one cell holds `0`, and every value in `1..size*size` appears
/// exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    /// Side length, in tiles.
    size: usize,
    /// Tiles in row-major order.
    tiles: Vec<Vec<Tile>>,
    /// Row of the empty slot.
    empty_row: usize,
    /// Column of the empty slot.
    empty_col: usize,
    /// Committed cell changes not yet drained by the facade.
    #[serde(skip)]
    updates: Vec<TileUpdate>,
}

impl Grid {
    /// Creates a grid of the given side length, in solved order.
    ///
    /// Tiles hold `row * size + col + 1` wrapping to `0` at the last cell,
    /// so the empty slot starts in the bottom-right corner.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeTooSmall`] if `size < 2`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < 2 {
            return Err(GridError::SizeTooSmall { size });
        }

        let tiles = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| Tile::new(solved_value(size, row, col)))
                    .collect()
            })
            .collect();

        Ok(Self {
            size,
            tiles,
            empty_row: size - 1,
            empty_col: size - 1,
            updates: Vec::new(),
        })
    }

    /// Returns the side length of the grid, in tiles.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the coordinates of the cell holding the empty slot.
    pub fn empty_position(&self) -> (usize, usize) {
        (self.empty_row, self.empty_col)
    }

    /// Checks whether an index lies on the grid.
    pub fn check_index(&self, i: usize) -> bool {
        i < self.size
    }

    /// Returns the tile at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if either coordinate is outside
    /// the grid. Unlike an illegal push, this is a caller bug.
    pub fn get(&self, row: usize, col: usize) -> Result<&Tile, GridError> {
        if self.check_index(row) && self.check_index(col) {
            Ok(&self.tiles[row][col])
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Checks whether a position is orthogonally adjacent to the empty slot.
    fn is_near_empty(&self, row: usize, col: usize) -> bool {
        if !self.check_index(row) || !self.check_index(col) {
            return false;
        }

        (row == self.empty_row && col.abs_diff(self.empty_col) == 1)
            || (col == self.empty_col && row.abs_diff(self.empty_row) == 1)
    }

    /// Pushes the tile at the given position into the empty slot.
    ///
    /// The tile's value is exchanged with the empty slot's, and the empty
    /// coordinates move to `(row, col)`. Targets that are out of range or
    /// not adjacent to the empty slot are a no-op reported as `false`.
    #[instrument(skip(self))]
    pub fn push(&mut self, row: usize, col: usize) -> bool {
        if !self.is_near_empty(row, col) {
            trace!(row, col, "push rejected, not adjacent to the empty slot");
            return false;
        }

        let moved = self.tiles[row][col].value();
        self.set_value(self.empty_row, self.empty_col, moved);
        self.set_value(row, col, 0);
        self.empty_row = row;
        self.empty_col = col;
        trace!(row, col, moved, "tile pushed into the empty slot");
        true
    }

    /// Pushes the tile in the given direction into the empty slot.
    ///
    /// Computes the neighbor of the empty cell that would slide that way
    /// and delegates to [`Grid::push`].
    pub fn push_toward(&mut self, direction: Direction) -> bool {
        let (row_off, col_off) = direction.offset();
        let row = self.empty_row as isize + row_off;
        let col = self.empty_col as isize + col_off;
        if row < 0 || col < 0 {
            return false;
        }
        self.push(row as usize, col as usize)
    }

    /// Pushes the tile *below* the empty slot upward into it.
    pub fn push_up(&mut self) -> bool {
        self.push_toward(Direction::Up)
    }

    /// Pushes the tile *above* the empty slot downward into it.
    pub fn push_down(&mut self) -> bool {
        self.push_toward(Direction::Down)
    }

    /// Pushes the tile *right of* the empty slot leftward into it.
    pub fn push_left(&mut self) -> bool {
        self.push_toward(Direction::Left)
    }

    /// Pushes the tile *left of* the empty slot rightward into it.
    pub fn push_right(&mut self) -> bool {
        self.push_toward(Direction::Right)
    }

    /// Puts every tile back in solved order without reallocating.
    ///
    /// Equivalent to re-running construction: cells that actually change
    /// value are recorded for the observer, and the empty slot returns to
    /// the bottom-right corner.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                self.set_value(row, col, solved_value(self.size, row, col));
            }
        }
        self.empty_row = self.size - 1;
        self.empty_col = self.size - 1;
        debug!("grid reset to solved order");
    }

    /// Shuffles the grid through a chain of legal moves.
    ///
    /// Performs [`SHUFFLE_STEPS`] single-step pushes, each targeting a
    /// random in-bounds orthogonal neighbor of the *current* empty cell.
    /// The tiles are never assigned arbitrary values: arrangements that
    /// cannot be solved are unreachable this way.
    #[instrument(skip(self, rng))]
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for _ in 0..SHUFFLE_STEPS {
            let (row, col) = self.random_neighbor(rng);
            self.push(row, col);
        }
        debug!(
            empty_row = self.empty_row,
            empty_col = self.empty_col,
            "grid shuffled"
        );
    }

    /// Draws a random in-bounds orthogonal neighbor of the empty cell.
    ///
    /// Picks a row offset uniformly from `{-1, 0, 1}`; a zero row offset
    /// forces a column offset of `±1`, any other fixes the column. Out of
    /// bounds draws are redrawn. On a 2x2 grid at most two of the four
    /// neighbors exist, so more redraws are expected there; the loop still
    /// terminates since at least two neighbors are always in bounds.
    fn random_neighbor<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        loop {
            let row_off: isize = rng.gen_range(-1..=1);
            let col_off: isize = if row_off == 0 {
                2 * rng.gen_range(0..2) - 1
            } else {
                0
            };

            let row = self.empty_row as isize + row_off;
            let col = self.empty_col as isize + col_off;
            if row >= 0
                && col >= 0
                && self.check_index(row as usize)
                && self.check_index(col as usize)
            {
                return (row as usize, col as usize);
            }
        }
    }

    /// Checks whether every tile is back in solved order.
    pub fn is_ordered(&self) -> bool {
        (0..self.size).all(|row| {
            (0..self.size)
                .all(|col| self.tiles[row][col].value() == solved_value(self.size, row, col))
        })
    }

    /// Drains the cell changes committed since the last drain.
    pub fn take_updates(&mut self) -> Vec<TileUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Writes a value into a cell, recording the change if the value moved.
    fn set_value(&mut self, row: usize, col: usize, value: u32) {
        if self.tiles[row][col].value() != value {
            self.tiles[row][col].set_value(value);
            self.updates.push(TileUpdate { row, col, value });
        }
    }
}

/// Value a cell holds in the solved arrangement.
fn solved_value(size: usize, row: usize, col: usize) -> u32 {
    let value = (row * size + col + 1) as u32;
    if value == (size * size) as u32 { 0 } else { value }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.tiles {
            for tile in row {
                write!(f, "{:>3} ", tile.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
