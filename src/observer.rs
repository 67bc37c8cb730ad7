//! Observer seam between the game facade and a presentation layer.

use crate::puzzle::Grid;

/// Contract a presentation layer implements to follow a game.
///
/// The facade owns its observer and calls it synchronously from the same
/// thread that drives the game; implementations must not block. The
/// terminal front end shipped with this crate is one implementation, a
/// recording stub in the tests is another.
pub trait GameObserver {
    /// Called once the grid is (re)initialized, with the full grid, so a
    /// display can build one visual element per cell.
    fn grid_initialized(&mut self, grid: &Grid);

    /// Called once per committed cell change, so a display can refresh a
    /// single element without re-scanning the grid.
    fn tile_changed(&mut self, row: usize, col: usize, value: u32);

    /// Called with the current move count after each accepted move, and
    /// when a game starts.
    fn moves_updated(&mut self, moves: u32);

    /// Called when play begins: input should be accepted from now on.
    fn game_started(&mut self);

    /// Called when the puzzle is solved: input should be rejected until
    /// the game is restarted.
    fn game_ended(&mut self);
}

/// Observer that ignores every notification.
///
/// Useful for driving a game headless, in benchmarks or doc examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn grid_initialized(&mut self, _grid: &Grid) {}

    fn tile_changed(&mut self, _row: usize, _col: usize, _value: u32) {}

    fn moves_updated(&mut self, _moves: u32) {}

    fn game_started(&mut self) {}

    fn game_ended(&mut self) {}
}
