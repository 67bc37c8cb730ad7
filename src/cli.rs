//! Command-line interface for the taquin terminal front end.

use clap::Parser;

/// Taquin - sliding-tile puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "taquin")]
#[command(about = "Slide the numbered tiles back into order", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Side length of the grid, in tiles
    #[arg(short, long, default_value_t = 4)]
    pub size: usize,

    /// Seed for the shuffle, for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,
}
