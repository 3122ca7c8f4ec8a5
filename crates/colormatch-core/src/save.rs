use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::error::Result;
use crate::game::ColorMatchGame;

/// Everything needed to resume a session: the board, the player's selection,
/// the running tallies and the hint swatch that was on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    #[serde(rename = "game state")]
    pub colors: Vec<u32>,
    #[serde(rename = "correct state")]
    pub correct: u32,
    #[serde(rename = "fail state")]
    pub fail: u32,
    #[serde(rename = "select state")]
    pub selected: Vec<bool>,
    #[serde(rename = "blended state")]
    pub blended: u32,
    /// Missing from older saves, in which case the round cannot be finished.
    #[serde(rename = "winning pair", default, skip_serializing_if = "Option::is_none")]
    pub winning_pair: Option<(Coord, Coord)>,
}

impl SavedSession {
    pub fn capture(game: &ColorMatchGame, correct: u32, fail: u32, blended: u32) -> Self {
        Self {
            colors: game.state().to_vec(),
            correct,
            fail,
            selected: game.state_selected().to_vec(),
            blended,
            winning_pair: game.winning_pair(),
        }
    }

    /// Rebuilds the game, rejecting payloads that do not describe a valid
    /// 3x3 board.
    pub fn restore(&self) -> Result<ColorMatchGame> {
        let mut game = ColorMatchGame::new();
        game.set_state(&self.colors)?;
        game.set_state_selected(&self.selected)?;
        if let Some((a, b)) = self.winning_pair {
            game.set_winning_pair(a, b)?;
        }
        Ok(game)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;

    #[test]
    fn uses_documented_keys() {
        let game = ColorMatchGame::new();
        let json = SavedSession::capture(&game, 3, 4, 0xFF12_3456).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["correct state"], 3);
        assert_eq!(value["fail state"], 4);
        assert_eq!(value["blended state"], 0xFF12_3456u32);
        assert_eq!(value["game state"].as_array().unwrap().len(), 9);
        assert_eq!(value["select state"].as_array().unwrap().len(), 9);
        // a fresh model has no pair yet
        assert!(value.get("winning pair").is_none());
    }

    #[test]
    fn missing_winning_pair_restores_without_one() {
        let json = r#"{
            "game state": [1, 2, 3, 4, 5, 6, 7, 8, 9],
            "correct state": 0,
            "fail state": 1,
            "select state": [true, false, false, false, false, false, false, false, false],
            "blended state": 0
        }"#;
        let game = SavedSession::from_json(json).unwrap().restore().unwrap();
        assert_eq!(game.winning_pair(), None);
        assert!(game.is_selected(0, 0));
        assert_eq!(game.state(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn short_payload_is_rejected() {
        let json = r#"{
            "game state": [1, 2, 3],
            "correct state": 0,
            "fail state": 0,
            "select state": [false, false, false, false, false, false, false, false, false],
            "blended state": 0
        }"#;
        let err = SavedSession::from_json(json).unwrap().restore().unwrap_err();
        assert!(matches!(err, StateError::WrongLength { found: 3, .. }));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(
            SavedSession::from_json("not json"),
            Err(StateError::Json(_))
        ));
    }

    #[test]
    fn bad_winning_pair_is_rejected() {
        let json = r#"{
            "game state": [0, 0, 0, 0, 0, 0, 0, 0, 0],
            "correct state": 0,
            "fail state": 0,
            "select state": [false, false, false, false, false, false, false, false, false],
            "blended state": 0,
            "winning pair": [[2, 2], [2, 2]]
        }"#;
        let err = SavedSession::from_json(json).unwrap().restore().unwrap_err();
        assert!(matches!(err, StateError::DuplicateWinningCell));
    }
}
