use rand::RngExt;

use crate::board::{Board, Cell, Coord, NUM_CELLS, NUM_COLS, NUM_ROWS};
use crate::color::Color;
use crate::error::{Result, StateError};

/// Most cells the player may have selected at once.
pub const MAX_SELECTED: usize = 2;

/// One round of the game: the colored grid, the player's selection and the
/// hidden pair of cells the player is trying to find.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorMatchGame {
    board: Board,
    winning_pair: Option<(Coord, Coord)>,
}

impl ColorMatchGame {
    /// An all-black board with no winning pair yet. Call [`Self::new_game`]
    /// or restore a saved state before playing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recolors every cell, clears the selection and picks a new winning pair.
    pub fn new_game<R: RngExt + ?Sized>(&mut self, rng: &mut R) {
        for row in self.board.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::new(Color::random_opaque(rng));
            }
        }
        self.choose_winning_pair(rng);
        log::debug!("new board, winning pair {:?}", self.winning_pair);
    }

    /// Picks two distinct cells without replacement: the second draw skips
    /// over the first, so every unordered pair is equally likely.
    fn choose_winning_pair<R: RngExt + ?Sized>(&mut self, rng: &mut R) {
        let first = rng.random_range(0..NUM_CELLS);
        let mut second = rng.random_range(0..NUM_CELLS - 1);
        if second >= first {
            second += 1;
        }
        self.winning_pair = Some((Coord::from_index(first), Coord::from_index(second)));
    }

    /// Flips the selection of a cell. Deselecting always succeeds; selecting
    /// is refused once [`MAX_SELECTED`] cells are already selected.
    ///
    /// Returns whether the cell changed.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is outside the grid.
    pub fn toggle_selection(&mut self, row: usize, col: usize) -> bool {
        let count = self.selected_count();
        let cell = self.cell_mut(row, col);
        if cell.selected {
            cell.selected = false;
            true
        } else if count < MAX_SELECTED {
            cell.selected = true;
            true
        } else {
            log::debug!("selection of ({}, {}) refused, {} already selected", row, col, count);
            false
        }
    }

    pub fn reset_selection(&mut self) {
        for cell in self.board.iter_mut().flatten() {
            cell.selected = false;
        }
    }

    /// True when the selection is exactly the winning pair, in either order.
    pub fn is_game_over(&self) -> bool {
        match self.winning_pair {
            Some((a, b)) => {
                self.selected_count() == MAX_SELECTED
                    && self.is_selected(a.row, a.col)
                    && self.is_selected(b.row, b.col)
            }
            None => false,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.board.iter().flatten().filter(|c| c.selected).count()
    }

    /// Selected cells in row-major order.
    pub fn selected(&self) -> Vec<Coord> {
        Coord::all()
            .filter(|c| self.is_selected(c.row, c.col))
            .collect()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).selected
    }

    pub fn color(&self, row: usize, col: usize) -> Color {
        self.cell(row, col).color
    }

    pub fn winning_pair(&self) -> Option<(Coord, Coord)> {
        self.winning_pair
    }

    /// Installs a winning pair, e.g. one read back from a save file.
    pub fn set_winning_pair(&mut self, a: Coord, b: Coord) -> Result<()> {
        for c in [a, b] {
            if !c.in_bounds() {
                return Err(StateError::CoordOutOfRange {
                    row: c.row,
                    col: c.col,
                });
            }
        }
        if a == b {
            return Err(StateError::DuplicateWinningCell);
        }
        self.winning_pair = Some((a, b));
        Ok(())
    }

    /// Blend of the two winning cells, shown to the player as a clue.
    pub fn hint_color(&self) -> Option<Color> {
        self.winning_pair
            .map(|(a, b)| self.color(a.row, a.col).blend(self.color(b.row, b.col)))
    }

    /// Packed colors of all cells, row-major.
    pub fn state(&self) -> [u32; NUM_CELLS] {
        let mut colors = [0u32; NUM_CELLS];
        for (slot, cell) in colors.iter_mut().zip(self.board.iter().flatten()) {
            *slot = cell.color.to_packed();
        }
        colors
    }

    /// Replaces every cell with the given packed colors (row-major). All
    /// cells come back unselected.
    pub fn set_state(&mut self, colors: &[u32]) -> Result<()> {
        check_len("game state", colors.len())?;
        for (cell, &packed) in self.board.iter_mut().flatten().zip(colors) {
            *cell = Cell::new(Color::from_packed(packed));
        }
        Ok(())
    }

    /// Selection flags of all cells, row-major.
    pub fn state_selected(&self) -> [bool; NUM_CELLS] {
        let mut flags = [false; NUM_CELLS];
        for (slot, cell) in flags.iter_mut().zip(self.board.iter().flatten()) {
            *slot = cell.selected;
        }
        flags
    }

    pub fn set_state_selected(&mut self, flags: &[bool]) -> Result<()> {
        check_len("select state", flags.len())?;
        let count = flags.iter().filter(|&&f| f).count();
        if count > MAX_SELECTED {
            return Err(StateError::TooManySelected(count));
        }
        for (cell, &flag) in self.board.iter_mut().flatten().zip(flags) {
            cell.selected = flag;
        }
        Ok(())
    }

    fn cell(&self, row: usize, col: usize) -> &Cell {
        check_coord(row, col);
        &self.board[row][col]
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        check_coord(row, col);
        &mut self.board[row][col]
    }
}

fn check_coord(row: usize, col: usize) {
    assert!(
        row < NUM_ROWS && col < NUM_COLS,
        "cell ({}, {}) is outside the {}x{} grid",
        row,
        col,
        NUM_ROWS,
        NUM_COLS
    );
}

fn check_len(what: &'static str, found: usize) -> Result<()> {
    if found != NUM_CELLS {
        return Err(StateError::WrongLength {
            what,
            expected: NUM_CELLS,
            found,
        });
    }
    Ok(())
}
