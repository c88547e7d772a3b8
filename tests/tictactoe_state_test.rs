//! Tests for tic-tac-toe game state and rules.

use strictly_minimax::{Board, BoardError, GameState, GameStatus, Mark, MoveError, Position};

fn state_from_rows(rows: [[i8; 3]; 3]) -> GameState {
    GameState::from_board(Board::from_rows(rows).unwrap())
}

#[test]
fn test_new_game_is_empty_with_x_to_move() {
    let state = GameState::new();
    assert_eq!(state.next_mark(), Mark::X);
    assert_eq!(state.winner(), None);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.available_moves(), Position::ALL.to_vec());
}

#[test]
fn test_full_board_without_line() {
    let mut state = state_from_rows([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]);
    assert!(state.is_full());
    assert!(!state.check_win());
    assert!(state.available_moves().is_empty());
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_top_row_wins() {
    let mut state = state_from_rows([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
    assert!(state.check_win());
    assert_eq!(state.winner(), Some(Mark::X));
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_anti_diagonal_wins_for_o() {
    let mut state = state_from_rows([[1, 1, -1], [0, -1, 0], [-1, 1, 0]]);
    assert!(state.check_win());
    assert_eq!(state.winner(), Some(Mark::O));
}

#[test]
fn test_place_twice_on_same_cell_is_rejected() {
    let mut state = GameState::new();
    state.place(Position::Center, Mark::X).unwrap();
    let before = state.clone();

    let err = state.place(Position::Center, Mark::O).unwrap_err();
    assert_eq!(err, MoveError::Occupied(Position::Center));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(state, before);
}

#[test]
fn test_place_after_win_is_game_over() {
    let mut state = state_from_rows([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
    let before = state.clone();
    let err = state.place(Position::BottomLeft, Mark::O).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(state, before);
}

#[test]
fn test_place_reports_terminal_status() {
    let mut state = GameState::new();
    let moves = [
        (Position::TopLeft, Mark::X),
        (Position::MiddleLeft, Mark::O),
        (Position::TopCenter, Mark::X),
        (Position::Center, Mark::O),
    ];
    for (pos, mark) in moves {
        assert_eq!(state.place(pos, mark).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(
        state.place(Position::TopRight, Mark::X).unwrap(),
        GameStatus::Won(Mark::X)
    );
}

#[test]
fn test_each_place_alternates_and_removes_one_move() {
    let mut state = GameState::new();
    // A drawn game: X O X / X O O / O X X
    let order = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    for pos in order {
        let mark = state.next_mark();
        let available = state.available_moves().len();
        state.place(pos, mark).unwrap();
        assert_eq!(state.next_mark(), mark.opponent());
        assert_eq!(state.available_moves().len(), available - 1);
        assert_eq!(state.available_moves().is_empty(), state.is_full());
    }
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_from_board_picks_next_mark() {
    assert_eq!(state_from_rows([[0; 3]; 3]).next_mark(), Mark::X);
    assert_eq!(state_from_rows([[1, 0, 0], [0, 0, 0], [0, 0, 0]]).next_mark(), Mark::O);
    assert_eq!(state_from_rows([[1, -1, 0], [0, 0, 0], [0, 0, 0]]).next_mark(), Mark::X);
}

#[test]
fn test_board_text_form() {
    let board: Board = "XO. | .X. | ..O".parse().unwrap();
    assert_eq!(board.to_rows(), [[1, -1, 0], [0, 1, 0], [0, 0, -1]]);

    let slashed: Board = "xo-/_x-/--o".parse().unwrap();
    assert_eq!(slashed, board);

    assert!(matches!("XO.".parse::<Board>(), Err(BoardError::Parse(_))));
    assert!(matches!("XOZ ... ...".parse::<Board>(), Err(BoardError::Parse(_))));
}

#[test]
fn test_board_rows_reject_bad_cells() {
    assert_eq!(
        Board::from_rows([[2, 0, 0], [0, 0, 0], [0, 0, 0]]),
        Err(BoardError::InvalidCell(2))
    );
}

#[test]
fn test_states_are_independent() {
    let mut first = GameState::new();
    let second = GameState::new();
    first.place(Position::Center, Mark::X).unwrap();
    assert!(second.board().is_empty(Position::Center));
}
