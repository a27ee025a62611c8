//! Tests for the turn and terminal-state machine.

use fourfold_core::{GameState, GameStatus, MoveError, MoveOutcome, Roster, Square, Symbol};

fn two_players() -> GameState {
    GameState::new(Roster::from_palette(2).unwrap())
}

/// Interleaved X/O moves that fill the board in the `XXOOXX` / `OOXXOO`
/// striped pattern, which contains no winning pattern for either side.
fn drawing_moves() -> Vec<usize> {
    let mut x_cells = Vec::new();
    let mut o_cells = Vec::new();
    for idx in 0..36 {
        let col_is_x = matches!(idx % 6, 0 | 1 | 4 | 5);
        let row_even = (idx / 6) % 2 == 0;
        if col_is_x == row_even {
            x_cells.push(idx);
        } else {
            o_cells.push(idx);
        }
    }
    assert_eq!(x_cells.len(), 18);
    x_cells
        .into_iter()
        .zip(o_cells)
        .flat_map(|(x, o)| [x, o])
        .collect()
}

#[test]
fn test_initial_state() {
    let state = two_players();
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.current_player().symbol(), Symbol::X);
    assert_eq!(state.board().empty_indices().len(), 36);
    assert_eq!(state.scores().get(Symbol::X), 0);
    assert!(state.history().is_empty());
}

#[test]
fn test_turns_rotate_through_roster() {
    let mut state = GameState::new(Roster::from_palette(4).unwrap());
    let mut seen = Vec::new();
    for idx in [0, 10, 20, 30, 5] {
        seen.push(state.current_player().symbol());
        state.apply_move(idx).unwrap();
    }
    assert_eq!(
        seen,
        vec![Symbol::X, Symbol::O, Symbol::Triangle, Symbol::Circle, Symbol::X]
    );
    assert_eq!(state.current_player().symbol(), Symbol::O);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut state = two_players();
    state.apply_move(14).unwrap();
    let before = state.clone();

    assert_eq!(state.apply_move(14), Err(MoveError::Occupied(14)));
    assert_eq!(state, before);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut state = two_players();
    let before = state.clone();
    assert_eq!(state.apply_move(36), Err(MoveError::OutOfBounds(36)));
    assert_eq!(state, before);
}

#[test]
fn test_horizontal_win_scores() {
    // X: 0 1 2 3, O: 6 7 8
    let state = GameState::replay(Roster::from_palette(2).unwrap(), &[0, 6, 1, 7, 2, 8, 3])
        .unwrap();
    assert_eq!(state.status(), GameStatus::Won(Symbol::X));
    assert_eq!(state.scores().get(Symbol::X), 1);
    assert_eq!(state.scores().get(Symbol::O), 0);
    assert_eq!(state.winning_line().unwrap().cells(), &[0, 1, 2, 3]);
    // The winner stays the current player.
    assert_eq!(state.current_player().symbol(), Symbol::X);
}

#[test]
fn test_square_win() {
    // X: 0 30 35 12, O: 7 8 13 14
    let mut state = two_players();
    let mut last = None;
    for idx in [0, 7, 30, 8, 35, 13, 12, 14] {
        last = Some(state.apply_move(idx).unwrap());
    }
    assert_eq!(state.status(), GameStatus::Won(Symbol::O));
    assert!(matches!(
        last,
        Some(MoveOutcome::Won { winner: Symbol::O, .. })
    ));
    assert_eq!(last.unwrap().winning_cells(), Some([7, 8, 13, 14]));
}

#[test]
fn test_moves_after_win_rejected() {
    let mut state =
        GameState::replay(Roster::from_palette(2).unwrap(), &[0, 6, 1, 7, 2, 8, 3]).unwrap();
    let before = state.clone();
    assert_eq!(state.apply_move(20), Err(MoveError::GameOver));
    assert_eq!(state, before);
}

#[test]
fn test_full_board_is_draw() {
    let moves = drawing_moves();
    let mut state = two_players();
    for (n, &idx) in moves.iter().enumerate() {
        let outcome = state.apply_move(idx).unwrap();
        if n + 1 < moves.len() {
            assert!(!outcome.is_terminal(), "move {n} at {idx} ended the game");
        } else {
            assert_eq!(outcome, MoveOutcome::Draw);
        }
    }
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.scores().total(), 0);
    assert!(state.board().is_full());
    assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
}

#[test]
fn test_replay_is_deterministic() {
    // X completes column 2 on the last move.
    let moves = [14, 15, 20, 21, 8, 9, 26];
    let roster = Roster::from_palette(2).unwrap();
    let first = GameState::replay(roster.clone(), &moves).unwrap();
    assert_eq!(first.status(), GameStatus::Won(Symbol::X));
    for _ in 0..5 {
        let again = GameState::replay(roster.clone(), &moves).unwrap();
        assert_eq!(again.status(), first.status());
        assert_eq!(again.scores(), first.scores());
        assert_eq!(again.board(), first.board());
    }
}

#[test]
fn test_replay_stops_at_illegal_move() {
    let result = GameState::replay(Roster::from_palette(2).unwrap(), &[4, 4]);
    assert_eq!(result, Err(MoveError::Occupied(4)));
}

#[test]
fn test_queries_are_idempotent() {
    let state = GameState::replay(Roster::from_palette(3).unwrap(), &[0, 1, 2, 6]).unwrap();
    assert_eq!(state.status(), state.status());
    assert_eq!(state.is_terminal(), state.is_terminal());
    assert_eq!(state.current_player(), state.current_player());
    assert_eq!(state.scores(), state.scores());
}

#[test]
fn test_rematch_keeps_scores() {
    let won =
        GameState::replay(Roster::from_palette(2).unwrap(), &[0, 6, 1, 7, 2, 8, 3]).unwrap();
    let next = won.rematch();
    assert_eq!(next.status(), GameStatus::InProgress);
    assert_eq!(next.scores().get(Symbol::X), 1);
    assert_eq!(next.current_player().symbol(), Symbol::X);
    assert!(next.board().squares().iter().all(|s| *s == Square::Empty));
    assert!(next.history().is_empty());
}

#[test]
fn test_history_records_moves() {
    let state = GameState::replay(Roster::from_palette(2).unwrap(), &[5, 17, 29]).unwrap();
    assert_eq!(state.history(), &[5, 17, 29]);
}
