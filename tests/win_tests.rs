//! Win detector tests - all four directions plus the no-win cases

use tui_connect_four::core::{find_win, has_win, Board};
use tui_connect_four::types::{Disc, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_vertical_win_from_four_drops_in_one_column() {
    // The canonical case: four consecutive discs dropped in column 0.
    let mut board = Board::new();
    for _ in 0..4 {
        board.drop_disc(0, Disc::One).unwrap();
    }

    let line = find_win(&board, Disc::One).unwrap();
    assert!(line.iter().all(|&(x, _)| x == 0));
    assert!(!has_win(&board, Disc::Two));
}

#[test]
fn test_horizontal_win_anywhere_in_a_row() {
    for start in 0..=(BOARD_WIDTH - 4) {
        let mut board = Board::new();
        for col in start..start + 4 {
            board.drop_disc(col, Disc::Two).unwrap();
        }
        assert!(has_win(&board, Disc::Two), "run starting at column {start}");
    }
}

#[test]
fn test_diagonal_wins_in_both_orientations() {
    // Down-right: One at (0,2),(1,3),(2,4),(3,5).
    let mut board = Board::new();
    for (x, y) in [(0, 2), (1, 3), (2, 4), (3, 5)] {
        board.set(x, y, Some(Disc::One));
    }
    assert!(has_win(&board, Disc::One));

    // Down-left: Two at (6,2),(5,3),(4,4),(3,5).
    let mut board = Board::new();
    for (x, y) in [(6, 2), (5, 3), (4, 4), (3, 5)] {
        board.set(x, y, Some(Disc::Two));
    }
    assert!(has_win(&board, Disc::Two));
}

#[test]
fn test_runs_do_not_wrap_across_board_edges() {
    // Three discs at the right edge plus one at the left edge of the next
    // row must not count as a run.
    let mut board = Board::new();
    for (x, y) in [(4, 5), (5, 5), (6, 5), (0, 4)] {
        board.set(x, y, Some(Disc::One));
    }
    assert!(!has_win(&board, Disc::One));
}

#[test]
fn test_full_board_without_a_run_has_no_winner() {
    // Rows of paired colors arranged so no direction ever lines up four.
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let inverted = y == 2 || y == 3;
            let disc = if (x % 2 == 0) != inverted {
                Disc::One
            } else {
                Disc::Two
            };
            board.set(x, y, Some(disc));
        }
    }

    assert!(board.is_full());
    assert!(!has_win(&board, Disc::One));
    assert!(!has_win(&board, Disc::Two));
}

#[test]
fn test_win_line_reports_the_run_cells() {
    let mut board = Board::new();
    for col in 2..6 {
        board.drop_disc(col, Disc::One).unwrap();
    }

    let line = find_win(&board, Disc::One).unwrap();
    assert_eq!(line, [(2, 5), (3, 5), (4, 5), (5, 5)]);
}
