//! Terminal front end: renders the grid and forwards key and mouse input.
//!
//! This is the external collaborator the core is designed around: it
//! implements [`GameObserver`] to follow state changes and translates user
//! input back into pushes on the facade.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};
use taquin::{GameObserver, Grid, Taquin};
use tracing::warn;

/// Screen row where the board starts; the rows above hold the move counter
/// and the status line.
const BOARD_TOP: usize = 3;

/// Screen width of one rendered cell, used to map clicks back to columns.
const CELL_WIDTH: usize = 5;

/// Terminal view of a game.
///
/// Keeps a cached copy of the board, updated cell by cell from observer
/// notifications, and redraws the screen whenever the move counter or the
/// game phase changes.
pub struct TerminalView {
    /// Cached tile values, row-major.
    board: Vec<Vec<u32>>,
    /// Last published move count.
    moves: u32,
    /// Whether the current game has been solved.
    won: bool,
}

impl TerminalView {
    /// Creates a view with no board yet; the facade supplies one through
    /// [`GameObserver::grid_initialized`] during construction.
    pub fn new() -> Self {
        Self {
            board: Vec::new(),
            moves: 0,
            won: false,
        }
    }

    fn status_line(&self) -> String {
        if self.won {
            format!("Solved in {} moves! Press r to play again.", self.moves)
        } else {
            "Arrow keys or clicks slide tiles. r restarts, q quits.".to_string()
        }
    }

    fn draw(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(stdout, Print(format!("Moves: {}", self.moves)))?;
        queue!(stdout, MoveTo(0, 1), Print(self.status_line()))?;

        for (row, values) in self.board.iter().enumerate() {
            let line: String = values
                .iter()
                .map(|&value| {
                    if value == 0 {
                        " ".repeat(CELL_WIDTH)
                    } else {
                        format!("{:>width$} ", value, width = CELL_WIDTH - 1)
                    }
                })
                .collect();
            queue!(stdout, MoveTo(0, (BOARD_TOP + row) as u16), Print(line))?;
        }

        stdout.flush()
    }

    fn redraw(&self) {
        if let Err(err) = self.draw() {
            warn!(%err, "failed to render the board");
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for TerminalView {
    fn grid_initialized(&mut self, grid: &Grid) {
        self.board = (0..grid.size())
            .map(|row| {
                (0..grid.size())
                    .map(|col| grid.get(row, col).map(|tile| tile.value()).unwrap_or(0))
                    .collect()
            })
            .collect();
    }

    fn tile_changed(&mut self, row: usize, col: usize, value: u32) {
        self.board[row][col] = value;
    }

    fn moves_updated(&mut self, moves: u32) {
        self.moves = moves;
        self.redraw();
    }

    fn game_started(&mut self) {
        self.won = false;
        self.redraw();
    }

    fn game_ended(&mut self) {
        self.won = true;
        self.redraw();
    }
}

/// Runs a full interactive session on the terminal.
pub fn run(size: usize, seed: Option<u64>) -> Result<()> {
    let view = TerminalView::new();
    let mut game = match seed {
        Some(seed) => Taquin::with_seed(size, seed, view)?,
        None => Taquin::new(size, view)?,
    };

    enable_raw_mode()?;
    execute!(io::stdout(), EnableMouseCapture, Hide)?;

    let result = event_loop(&mut game);

    execute!(io::stdout(), DisableMouseCapture, Show)?;
    disable_raw_mode()?;
    result
}

/// Dispatches input events to the facade until the player quits.
fn event_loop(game: &mut Taquin<TerminalView>) -> Result<()> {
    game.start_game();

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up => {
                    game.push_up();
                }
                KeyCode::Down => {
                    game.push_down();
                }
                KeyCode::Left => {
                    game.push_left();
                }
                KeyCode::Right => {
                    game.push_right();
                }
                KeyCode::Char('r') => game.restart_game(),
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(_) = mouse.kind {
                    if let Some((row, col)) = cell_at(mouse.row, mouse.column) {
                        // Out-of-board clicks land out of range and are
                        // rejected by the grid like any illegal move.
                        game.push(row, col);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Maps a screen position to board coordinates, if it is below the header.
fn cell_at(screen_row: u16, screen_col: u16) -> Option<(usize, usize)> {
    let row = (screen_row as usize).checked_sub(BOARD_TOP)?;
    Some((row, screen_col as usize / CELL_WIDTH))
}
