//! Game facade sequencing a full taquin session.

use crate::observer::GameObserver;
use crate::puzzle::{Direction, Grid, GridError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle phase of a game session.
///
/// Moves are only accepted while [`GamePhase::Playing`]; a won game goes
/// back to playing only through [`Taquin::restart_game`]. There is no
/// paused phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, not yet shuffled.
    NotStarted,
    /// Shuffled and accepting moves.
    Playing,
    /// Solved; moves are rejected until a restart.
    Won,
}

/// Facade for a game of taquin.
///
/// Owns the [`Grid`], the move counter, the observer, and the shuffle
/// randomness, and mediates between them: external input comes in as push
/// requests, state changes go out as observer notifications. The facade is
/// the sole mutator of the move counter.
#[derive(Debug)]
pub struct Taquin<O> {
    /// The grid the game is played on.
    grid: Grid,
    /// Number of accepted moves since the last (re)start.
    moves: u32,
    /// Current lifecycle phase.
    phase: GamePhase,
    /// Presentation layer following this game.
    observer: O,
    /// Source of shuffle randomness, seedable for deterministic games.
    rng: StdRng,
}

impl<O: GameObserver> Taquin<O> {
    /// Creates a game on a fresh solved grid, seeding the shuffle
    /// randomness from entropy.
    ///
    /// The observer immediately receives the initial grid layout so a
    /// display can set itself up before play starts.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeTooSmall`] if `size < 2`.
    pub fn new(size: usize, observer: O) -> Result<Self, GridError> {
        Self::build(size, StdRng::from_entropy(), observer)
    }

    /// Creates a game whose shuffles are fully determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeTooSmall`] if `size < 2`.
    pub fn with_seed(size: usize, seed: u64, observer: O) -> Result<Self, GridError> {
        Self::build(size, StdRng::seed_from_u64(seed), observer)
    }

    fn build(size: usize, rng: StdRng, mut observer: O) -> Result<Self, GridError> {
        let grid = Grid::new(size)?;
        observer.grid_initialized(&grid);
        Ok(Self {
            grid,
            moves: 0,
            phase: GamePhase::NotStarted,
            observer,
            rng,
        })
    }

    /// Returns the side length of the grid, in tiles.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the number of accepted moves since the last (re)start.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the grid the game is played on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the observer following this game.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer following this game, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Starts a new game: shuffles the grid, publishes the move count, and
    /// tells the observer that input should now be accepted.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        info!(size = self.grid.size(), "starting a new game");
        self.grid.shuffle(&mut self.rng);
        self.phase = GamePhase::Playing;
        self.flush_tile_updates();
        self.observer.moves_updated(self.moves);
        self.observer.game_started();
    }

    /// Restarts from scratch: solved grid, move counter back to zero, then
    /// exactly one [`Taquin::start_game`] sequence.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) {
        self.grid.reset();
        self.moves = 0;
        self.start_game();
    }

    /// Pushes the tile at the given position into the empty slot.
    ///
    /// Returns whether the move was accepted. Rejected moves, including
    /// any request outside the [`GamePhase::Playing`] phase, have no
    /// observable effect.
    #[instrument(skip(self))]
    pub fn push(&mut self, row: usize, col: usize) -> bool {
        if self.phase != GamePhase::Playing {
            debug!(phase = ?self.phase, "push ignored outside of play");
            return false;
        }
        if self.grid.push(row, col) {
            self.accept_move();
            true
        } else {
            false
        }
    }

    /// Pushes the tile in the given direction into the empty slot.
    ///
    /// Returns whether the move was accepted.
    #[instrument(skip(self))]
    pub fn push_toward(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            debug!(phase = ?self.phase, "push ignored outside of play");
            return false;
        }
        if self.grid.push_toward(direction) {
            self.accept_move();
            true
        } else {
            false
        }
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

    /// Commits an accepted move: bump the counter, publish the changes,
    /// and end the game if the grid came back to solved order.
    fn accept_move(&mut self) {
        self.moves += 1;
        self.flush_tile_updates();
        self.observer.moves_updated(self.moves);

        if self.grid.is_ordered() {
            info!(moves = self.moves, "puzzle solved");
            self.phase = GamePhase::Won;
            self.observer.game_ended();
        }
    }

    /// Forwards every committed cell change to the observer.
    fn flush_tile_updates(&mut self) {
        for update in self.grid.take_updates() {
            self.observer.tile_changed(update.row, update.col, update.value);
        }
    }
}
