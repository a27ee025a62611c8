//! Tests for win detection on the standard 6×6 grid.

use fourfold_core::rules::{has_won, locate_winning_cells};
use fourfold_core::{Board, Direction, GRID_SIZE, Square, Symbol, WinKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn board_with(symbol: Symbol, cells: &[usize]) -> Board {
    let mut board = Board::new(GRID_SIZE);
    for &idx in cells {
        board.set(idx, symbol);
    }
    board
}

#[test]
fn test_horizontal_run_from_origin() {
    let board = board_with(Symbol::X, &[0, 1, 2, 3]);
    assert!(has_won(&board, Symbol::X));
    let line = locate_winning_cells(&board, Symbol::X).expect("run of four");
    assert_eq!(line.cells(), &[0, 1, 2, 3]);
    assert_eq!(line.kind(), &WinKind::Line(Direction::Right));
}

#[test]
fn test_square_without_line() {
    let board = board_with(Symbol::O, &[7, 8, 13, 14]);
    assert!(has_won(&board, Symbol::O));
    let line = locate_winning_cells(&board, Symbol::O).expect("square");
    assert_eq!(line.kind(), &WinKind::Square);
    assert_eq!(line.cells(), &[7, 8, 13, 14]);
}

#[test]
fn test_row_wrap_is_not_a_run() {
    let board = board_with(Symbol::X, &[4, 5, 6, 7]);
    assert!(!has_won(&board, Symbol::X));
    assert_eq!(locate_winning_cells(&board, Symbol::X), None);
}

#[test]
fn test_long_row_wrap_is_not_a_run() {
    // Five cells across the end of row 0, only three of them on that row.
    let board = board_with(Symbol::X, &[3, 4, 5, 6, 7]);
    assert!(!has_won(&board, Symbol::X));
}

#[test]
fn test_anti_diagonal_from_last_column() {
    let board = board_with(Symbol::O, &[5, 10, 15, 20]);
    assert!(has_won(&board, Symbol::O));
}

#[test]
fn test_run_longer_than_four() {
    let board = board_with(Symbol::Triangle, &[30, 31, 32, 33, 34, 35]);
    let line = locate_winning_cells(&board, Symbol::Triangle).unwrap();
    assert_eq!(line.cells(), &[30, 31, 32, 33]);
}

#[test]
fn test_other_symbols_do_not_count() {
    let mut board = board_with(Symbol::X, &[0, 1, 2]);
    board.set(3, Symbol::O);
    assert!(!has_won(&board, Symbol::X));
    assert!(!has_won(&board, Symbol::O));
}

#[test]
fn test_check_agrees_with_locate_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let symbols = [Symbol::X, Symbol::O, Symbol::Triangle];

    for _ in 0..500 {
        let mut board = Board::new(GRID_SIZE);
        for idx in 0..board.len() {
            match rng.random_range(0..4) {
                0 => {}
                n => board.set(idx, symbols[n - 1]),
            }
        }

        for symbol in symbols {
            let located = locate_winning_cells(&board, symbol);
            assert_eq!(has_won(&board, symbol), located.is_some());
            if let Some(line) = located {
                for &idx in line.cells() {
                    assert_eq!(board.get(idx), Square::Occupied(symbol));
                }
            }
        }
    }
}

#[test]
fn test_located_cells_are_contiguous() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..300 {
        let mut board = Board::new(GRID_SIZE);
        for idx in 0..board.len() {
            if rng.random_bool(0.4) {
                board.set(idx, Symbol::X);
            }
        }

        if let Some(line) = locate_winning_cells(&board, Symbol::X) {
            let cells = line.cells();
            match line.kind() {
                WinKind::Line(_) => {
                    for pair in cells.windows(2) {
                        let (a, b) = (pair[0], pair[1]);
                        assert!(board.row_of(b) == board.row_of(a) || board.row_of(b) == board.row_of(a) + 1);
                        assert!(board.col_of(a).abs_diff(board.col_of(b)) <= 1);
                    }
                }
                WinKind::Square => {
                    assert_eq!(cells[1], cells[0] + 1);
                    assert_eq!(cells[2], cells[0] + GRID_SIZE);
                    assert_eq!(cells[3], cells[0] + GRID_SIZE + 1);
                    assert!(board.col_of(cells[0]) < GRID_SIZE - 1);
                }
            }
        }
    }
}
