//! Board tests - drop mechanics and column bookkeeping

use tui_connect_four::core::Board;
use tui_connect_four::types::{Disc, MoveError, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(BOARD_WIDTH, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT), None);
}

#[test]
fn test_drop_row_returns_lowest_empty_cell_in_every_column() {
    let mut board = Board::new();

    for col in 0..BOARD_WIDTH {
        // As the column fills, the landing row walks upward.
        for filled in 0..BOARD_HEIGHT {
            let expected = BOARD_HEIGHT - 1 - filled;
            assert_eq!(board.drop_row(col), Some(expected));
            let landed = board.drop_disc(col, Disc::One).unwrap();
            assert_eq!(landed, expected);
        }
        assert_eq!(board.drop_row(col), None);
    }
}

#[test]
fn test_drop_into_full_column_changes_nothing() {
    let mut board = Board::new();
    for _ in 0..BOARD_HEIGHT {
        board.drop_disc(3, Disc::One).unwrap();
    }

    let before = board.clone();
    assert_eq!(board.drop_disc(3, Disc::Two), Err(MoveError::ColumnFull));
    assert_eq!(board, before);
}

#[test]
fn test_drop_out_of_range_column() {
    let mut board = Board::new();
    assert_eq!(
        board.drop_disc(BOARD_WIDTH, Disc::One),
        Err(MoveError::InvalidColumn)
    );
}

#[test]
fn test_discs_stack_in_drop_order() {
    let mut board = Board::new();
    board.drop_disc(2, Disc::One).unwrap();
    board.drop_disc(2, Disc::Two).unwrap();
    board.drop_disc(2, Disc::One).unwrap();

    assert_eq!(board.get(2, 5), Some(Some(Disc::One)));
    assert_eq!(board.get(2, 4), Some(Some(Disc::Two)));
    assert_eq!(board.get(2, 3), Some(Some(Disc::One)));
    assert_eq!(board.get(2, 2), Some(None));
}

#[test]
fn test_is_full_only_when_every_cell_is_occupied() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for col in 0..BOARD_WIDTH {
        for _ in 0..BOARD_HEIGHT {
            board.drop_disc(col, Disc::Two).unwrap();
        }
        let expected_full = col == BOARD_WIDTH - 1;
        assert_eq!(board.is_full(), expected_full);
    }
}

#[test]
fn test_legal_columns_excludes_full_columns() {
    let mut board = Board::new();
    for _ in 0..BOARD_HEIGHT {
        board.drop_disc(0, Disc::One).unwrap();
        board.drop_disc(6, Disc::Two).unwrap();
    }

    assert_eq!(board.legal_columns().as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_clear_restores_an_empty_board() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH {
        board.drop_disc(col, Disc::One).unwrap();
    }

    board.clear();
    assert_eq!(board, Board::new());
}
