use colormatch_core::{ColorMatchGame, Coord, SavedSession, MAX_SELECTED};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fresh_game(seed: u64) -> ColorMatchGame {
    let mut game = ColorMatchGame::new();
    game.new_game(&mut StdRng::seed_from_u64(seed));
    game
}

#[test]
fn selecting_the_winning_pair_wins() {
    let mut game = fresh_game(2024);
    let (a, b) = game.winning_pair().expect("new game picks a pair");

    game.toggle_selection(a.row, a.col);
    assert!(!game.is_game_over());
    game.toggle_selection(b.row, b.col);
    assert!(game.is_game_over());

    // swapping one cell for a loser breaks the win
    let loser = Coord::all().find(|c| *c != a && *c != b).unwrap();
    game.toggle_selection(b.row, b.col);
    game.toggle_selection(loser.row, loser.col);
    assert_eq!(game.selected_count(), MAX_SELECTED);
    assert!(!game.is_game_over());
}

#[test]
fn saved_session_resumes_mid_round() {
    let mut game = fresh_game(5);
    let (a, _) = game.winning_pair().unwrap();
    game.toggle_selection(a.row, a.col);
    let blended = game.hint_color().unwrap().to_packed();

    let json = SavedSession::capture(&game, 7, 2, blended).to_json().unwrap();
    let saved = SavedSession::from_json(&json).unwrap();
    assert_eq!(saved.correct, 7);
    assert_eq!(saved.fail, 2);
    assert_eq!(saved.blended, blended);

    let restored = saved.restore().unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.hint_color().unwrap().to_packed(), blended);
}

#[test]
fn restored_round_can_still_be_won() {
    let game = fresh_game(77);
    let json = SavedSession::capture(&game, 0, 0, 0).to_json().unwrap();
    let mut restored = SavedSession::from_json(&json).unwrap().restore().unwrap();

    let (a, b) = restored.winning_pair().unwrap();
    restored.toggle_selection(b.row, b.col);
    restored.toggle_selection(a.row, a.col);
    assert!(restored.is_game_over());
}
