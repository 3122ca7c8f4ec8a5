use colormatch_core::{Color, ColorMatchGame, SavedSession, StateError, NUM_COLS, NUM_ROWS};
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Everything the screen shows: the board, the tallies that outlive a
/// round, the hint swatch and where the cursor is.
pub struct Session {
    pub game: ColorMatchGame,
    rng: StdRng,
    pub correct: u32,
    pub fail: u32,
    pub blended: Color,
    pub cursor_row: usize,
    pub cursor_col: usize,
    /// Result of the last check, cleared by the next move.
    pub outcome: Option<Outcome>,
    /// Set when a selection was refused because two cells are already picked.
    pub limit_reached: bool,
    pub show_quit_confirm: bool,
}

impl Session {
    pub fn new(rng: StdRng) -> Self {
        let mut session = Self::empty(ColorMatchGame::new(), rng);
        session.start_new_game();
        session
    }

    /// Resumes a saved session. A save without a winning pair keeps its
    /// tallies but deals a fresh board, since that round can never be won.
    pub fn from_saved(saved: &SavedSession, rng: StdRng) -> Result<Self, StateError> {
        let game = saved.restore()?;
        let mut session = Self::empty(game, rng);
        session.correct = saved.correct;
        session.fail = saved.fail;
        if session.game.winning_pair().is_some() {
            session.blended = Color::from_packed(saved.blended);
        } else {
            log::warn!("saved session has no winning pair, dealing a new board");
            session.start_new_game();
        }
        Ok(session)
    }

    fn empty(game: ColorMatchGame, rng: StdRng) -> Self {
        Self {
            game,
            rng,
            correct: 0,
            fail: 0,
            blended: Color::default(),
            cursor_row: 1,
            cursor_col: 1,
            outcome: None,
            limit_reached: false,
            show_quit_confirm: false,
        }
    }

    pub fn start_new_game(&mut self) {
        self.game.new_game(&mut self.rng);
        self.blended = self.game.hint_color().unwrap_or_default();
        self.game.reset_selection();
        self.outcome = None;
        self.limit_reached = false;
        log::info!("new round, hint {}", self.blended.to_hex());
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        self.cursor_row = (self.cursor_row as i32 + dr).rem_euclid(NUM_ROWS as i32) as usize;
        self.cursor_col = (self.cursor_col as i32 + dc).rem_euclid(NUM_COLS as i32) as usize;
    }

    pub fn toggle_at_cursor(&mut self) {
        self.toggle(self.cursor_row, self.cursor_col);
    }

    /// Toggles the cell numbered `n` (1-9, row-major) and moves the cursor
    /// onto it. Other numbers are ignored.
    pub fn toggle_numbered(&mut self, n: usize) {
        if !(1..=NUM_ROWS * NUM_COLS).contains(&n) {
            return;
        }
        let row = (n - 1) / NUM_COLS;
        let col = (n - 1) % NUM_COLS;
        self.cursor_row = row;
        self.cursor_col = col;
        self.toggle(row, col);
    }

    fn toggle(&mut self, row: usize, col: usize) {
        self.outcome = None;
        self.limit_reached = !self.game.toggle_selection(row, col);
    }

    pub fn check(&mut self) -> Outcome {
        let outcome = if self.game.is_game_over() {
            self.correct = self.correct.saturating_add(1);
            Outcome::Correct
        } else {
            self.fail = self.fail.saturating_add(1);
            Outcome::Incorrect
        };
        log::info!(
            "check {:?} with {:?}, tally {}/{}",
            outcome,
            self.game.selected(),
            self.correct,
            self.fail
        );
        self.outcome = Some(outcome);
        self.limit_reached = false;
        outcome
    }

    pub fn to_saved(&self) -> SavedSession {
        SavedSession::capture(&self.game, self.correct, self.fail, self.blended.to_packed())
    }
}
