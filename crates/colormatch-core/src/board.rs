use serde::{Deserialize, Serialize};

use crate::color::Color;

pub const NUM_ROWS: usize = 3;
pub const NUM_COLS: usize = 3;
pub const NUM_CELLS: usize = NUM_ROWS * NUM_COLS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub color: Color,
    pub selected: bool,
}

impl Cell {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            selected: false,
        }
    }
}

pub type Board = [[Cell; NUM_COLS]; NUM_ROWS];

/// A grid position. Serialized as `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Inverse of [`Coord::index`]; `index` must be below [`NUM_CELLS`].
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / NUM_COLS,
            col: index % NUM_COLS,
        }
    }

    /// Row-major position of this cell.
    pub const fn index(self) -> usize {
        self.row * NUM_COLS + self.col
    }

    pub const fn in_bounds(self) -> bool {
        self.row < NUM_ROWS && self.col < NUM_COLS
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..NUM_CELLS).map(Coord::from_index)
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for [usize; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        assert_eq!(Coord::new(0, 0).index(), 0);
        assert_eq!(Coord::new(1, 2).index(), 5);
        assert_eq!(Coord::new(2, 0).index(), 6);
        assert_eq!(Coord::from_index(7), Coord::new(2, 1));
    }

    #[test]
    fn all_visits_every_cell_once() {
        let coords: Vec<Coord> = Coord::all().collect();
        assert_eq!(coords.len(), NUM_CELLS);
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert!(c.in_bounds());
        }
    }

    #[test]
    fn out_of_bounds_detected() {
        assert!(!Coord::new(3, 0).in_bounds());
        assert!(!Coord::new(0, 3).in_bounds());
    }
}
