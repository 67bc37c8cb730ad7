//! Tile value cell for the taquin grid.

use serde::{Deserialize, Serialize};

/// A single tile on the grid.
///
/// A tile never moves: it stays at a fixed grid position for the whole
/// session, and sliding a tile exchanges *values* between two cells. This
/// lets a display bind one visual element per cell once and update it in
/// place as values change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Current value, with `0` denoting the empty slot.
    value: u32,
}

impl Tile {
    /// Creates a tile holding the given value.
    pub(crate) fn new(value: u32) -> Self {
        Self { value }
    }

    /// Returns the current value of this tile.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Overwrites the value of this tile.
    pub(crate) fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    /// Checks whether this tile currently holds the empty slot.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, " ")
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;

    #[test]
    fn zero_is_the_empty_slot() {
        assert!(Tile::new(0).is_empty());
        assert!(!Tile::new(5).is_empty());
    }

    #[test]
    fn display_hides_the_empty_slot() {
        assert_eq!(Tile::new(12).to_string(), "12");
        assert_eq!(Tile::new(0).to_string(), " ");
    }
}
