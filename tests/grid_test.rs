//! Tests for the grid state model and move engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use taquin::{Grid, GridError};

/// Flattens the grid values in row-major order.
fn flatten(grid: &Grid) -> Vec<u32> {
    let mut values = Vec::with_capacity(grid.size() * grid.size());
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            values.push(grid.get(row, col).expect("in range").value());
        }
    }
    values
}

/// Checks solvability by inversion parity: odd grids need an even number
/// of inversions, even grids need inversions plus the empty row to be odd.
fn is_solvable(grid: &Grid) -> bool {
    let values = flatten(grid);
    let inversions: usize = values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(i, &value)| {
            values[i + 1..]
                .iter()
                .filter(|&&later| later != 0 && later < value)
                .count()
        })
        .sum();

    let (empty_row, _) = grid.empty_position();
    if grid.size() % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + empty_row) % 2 == 1
    }
}

#[test]
fn construction_is_solved_for_all_sizes() {
    for size in 2..=5 {
        let grid = Grid::new(size).expect("valid size");
        assert!(grid.is_ordered(), "fresh {size}x{size} grid must be solved");
        assert_eq!(grid.empty_position(), (size - 1, size - 1));

        let values = flatten(&grid);
        assert_eq!(values.iter().filter(|&&v| v == 0).count(), 1);
        let mut sorted = values;
        sorted.sort_unstable();
        let expected: Vec<u32> = (0..(size * size) as u32).collect();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn construction_rejects_tiny_grids() {
    assert_eq!(Grid::new(0).err(), Some(GridError::SizeTooSmall { size: 0 }));
    assert_eq!(Grid::new(1).err(), Some(GridError::SizeTooSmall { size: 1 }));
}

#[test]
fn get_rejects_out_of_bounds_coordinates() {
    let grid = Grid::new(4).expect("valid size");
    assert_eq!(grid.get(3, 3).map(|t| t.value()), Ok(0));
    assert_eq!(
        grid.get(0, 4),
        Err(GridError::OutOfBounds {
            row: 0,
            col: 4,
            size: 4
        })
    );
    assert_eq!(
        grid.get(4, 0),
        Err(GridError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4
        })
    );
}

#[test]
fn push_swaps_values_with_the_empty_slot() {
    let mut grid = Grid::new(4).expect("valid size");

    // (3, 2) holds 15 and is adjacent to the empty corner.
    assert!(grid.push(3, 2));
    assert_eq!(grid.empty_position(), (3, 2));
    assert_eq!(grid.get(3, 3).map(|t| t.value()), Ok(15));
    assert_eq!(grid.get(3, 2).map(|t| t.value()), Ok(0));
    assert!(!grid.is_ordered());

    // Pushing the displaced tile back restores solved order.
    assert!(grid.push(3, 3));
    assert_eq!(grid.empty_position(), (3, 3));
    assert!(grid.is_ordered());
}

#[test]
fn push_rejects_non_adjacent_and_out_of_range_targets() {
    let mut grid = Grid::new(4).expect("valid size");
    let before = flatten(&grid);

    assert!(!grid.push(0, 0), "far cell");
    assert!(!grid.push(2, 2), "diagonal neighbor");
    assert!(!grid.push(3, 3), "the empty cell itself");
    assert!(!grid.push(3, 4), "column out of range");
    assert!(!grid.push(4, 3), "row out of range");

    assert_eq!(flatten(&grid), before, "rejected pushes must not mutate");
    assert_eq!(grid.empty_position(), (3, 3));
}

#[test]
fn double_push_round_trips() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut grid = Grid::new(4).expect("valid size");
    grid.shuffle(&mut rng);

    let before = flatten(&grid);
    let (empty_row, empty_col) = grid.empty_position();
    let target = if empty_row > 0 {
        (empty_row - 1, empty_col)
    } else {
        (empty_row + 1, empty_col)
    };

    assert!(grid.push(target.0, target.1));
    assert!(grid.push(empty_row, empty_col));
    assert_eq!(flatten(&grid), before);
    assert_eq!(grid.empty_position(), (empty_row, empty_col));
}

#[test]
fn directional_pushes_follow_the_tile_motion() {
    let mut grid = Grid::new(4).expect("valid size");

    // The empty corner has no tile below it and none to its right.
    assert!(!grid.push_up());
    assert!(!grid.push_left());

    // The tile above the empty slot (12) slides down into it.
    assert!(grid.push_down());
    assert_eq!(grid.get(3, 3).map(|t| t.value()), Ok(12));
    assert_eq!(grid.empty_position(), (2, 3));

    // The tile left of the empty slot (11) slides right into it.
    assert!(grid.push_right());
    assert_eq!(grid.get(2, 3).map(|t| t.value()), Ok(11));
    assert_eq!(grid.empty_position(), (2, 2));
}

#[test]
fn reset_restores_solved_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = Grid::new(4).expect("valid size");
    grid.shuffle(&mut rng);

    grid.reset();
    assert!(grid.is_ordered());
    assert_eq!(grid.empty_position(), (3, 3));
}

#[test]
fn shuffle_preserves_the_tile_multiset() {
    for size in [3, 4] {
        let mut rng = StdRng::seed_from_u64(23);
        let mut grid = Grid::new(size).expect("valid size");
        grid.shuffle(&mut rng);

        let mut values = flatten(&grid);
        values.sort_unstable();
        let expected: Vec<u32> = (0..(size * size) as u32).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn shuffle_tracks_the_empty_position() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut grid = Grid::new(4).expect("valid size");
    grid.shuffle(&mut rng);

    let (row, col) = grid.empty_position();
    assert_eq!(grid.get(row, col).map(|t| t.value()), Ok(0));
    assert_eq!(flatten(&grid).iter().filter(|&&v| v == 0).count(), 1);
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut first = Grid::new(4).expect("valid size");
    let mut second = Grid::new(4).expect("valid size");
    first.shuffle(&mut StdRng::seed_from_u64(42));
    second.shuffle(&mut StdRng::seed_from_u64(42));

    assert_eq!(flatten(&first), flatten(&second));
    assert_eq!(first.empty_position(), second.empty_position());
}

#[test]
fn shuffled_grids_are_always_solvable() {
    for size in [2, 3, 4] {
        for seed in [1, 7, 1234, 99999] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(size).expect("valid size");
            grid.shuffle(&mut rng);
            assert!(
                is_solvable(&grid),
                "size {size} seed {seed} produced an unsolvable board"
            );
        }
    }
}

#[test]
fn display_renders_one_line_per_row() {
    let grid = Grid::new(3).expect("valid size");
    let rendered = grid.to_string();
    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.contains('1'));
    assert!(rendered.contains('8'));
}

#[test]
fn grid_survives_a_serde_round_trip() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut grid = Grid::new(4).expect("valid size");
    grid.shuffle(&mut rng);

    let json = serde_json::to_string(&grid).expect("serializable");
    let restored: Grid = serde_json::from_str(&json).expect("deserializable");

    assert_eq!(restored.size(), grid.size());
    assert_eq!(flatten(&restored), flatten(&grid));
    assert_eq!(restored.empty_position(), grid.empty_position());
}
