//! Win detection - exhaustive four-in-a-row scan.
//!
//! Every cell is treated as the start of four candidate runs (horizontal,
//! vertical, and the two diagonals). A run wins when all four cells are in
//! bounds and hold the same player's disc. The scan is O(width x height)
//! with constant work per cell and returns the first run found.

use crate::board::Board;
use crate::types::{Disc, BOARD_HEIGHT, BOARD_WIDTH, CONNECT};

/// Coordinates of a winning run, ordered from its starting cell.
pub type WinLine = [(u8, u8); CONNECT];

/// Direction steps checked from every starting cell:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Find a winning run for `disc`, if one exists.
pub fn find_win(board: &Board, disc: Disc) -> Option<WinLine> {
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            for &(dx, dy) in &DIRECTIONS {
                if let Some(line) = run_at(board, disc, x, y, dx, dy) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Check whether `disc` has any four-in-a-row.
pub fn has_win(board: &Board, disc: Disc) -> bool {
    find_win(board, disc).is_some()
}

fn run_at(board: &Board, disc: Disc, x: u8, y: u8, dx: i8, dy: i8) -> Option<WinLine> {
    let mut line = [(0u8, 0u8); CONNECT];
    for (i, slot) in line.iter_mut().enumerate() {
        let cx = x as i16 + dx as i16 * i as i16;
        let cy = y as i16 + dy as i16 * i as i16;
        if cx < 0 || cy < 0 {
            return None;
        }
        // get() handles the upper bounds.
        match board.get(cx as u8, cy as u8) {
            Some(Some(d)) if d == disc => *slot = (cx as u8, cy as u8),
            _ => return None,
        }
    }
    Some(line)
}
