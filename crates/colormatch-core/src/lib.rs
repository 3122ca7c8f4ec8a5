pub mod board;
pub mod color;
pub mod error;
pub mod game;
pub mod save;

pub use board::{Cell, Coord, NUM_CELLS, NUM_COLS, NUM_ROWS};
pub use color::Color;
pub use error::StateError;
pub use game::{ColorMatchGame, MAX_SELECTED};
pub use save::SavedSession;
