//! Taquin - sliding-tile puzzle engine.
//!
//! The classic "15-puzzle" generalized to N×N: numbered tiles slide one at
//! a time into the single empty slot until they return to row-major order.
//!
//! # Architecture
//!
//! - **Grid**: tile arrangement, adjacency rule, pushes, shuffle, and
//!   solved detection
//! - **Facade**: game lifecycle (start, restart, move dispatch, win
//!   detection) and the move counter
//! - **Observer**: seam through which a presentation layer follows state
//!   changes; the shipped binary provides a terminal implementation
//!
//! Shuffling only ever applies chains of legal moves, so every shuffled
//! board is guaranteed solvable.
//!
//! # Example
//!
//! ```no_run
//! use taquin::{NullObserver, Taquin};
//!
//! # fn example() -> Result<(), taquin::GridError> {
//! // Deterministic 4x4 game with a no-op observer.
//! let mut game = Taquin::with_seed(4, 42, NullObserver)?;
//! game.start_game();
//!
//! // Slide the tile below the empty slot upward, if there is one.
//! game.push_up();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod observer;
mod puzzle;

// Crate-level exports - Game facade
pub use game::{GamePhase, Taquin};

// Crate-level exports - Observer seam
pub use observer::{GameObserver, NullObserver};

// Crate-level exports - Puzzle model
pub use puzzle::{Direction, Grid, GridError, Tile, TileUpdate};
