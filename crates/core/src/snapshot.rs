//! Plain-data render snapshot consumed by presentation layers.
//!
//! The terminal view renders exclusively from a snapshot, so the core never
//! touches I/O and views stay trivially testable.

use crate::types::{Disc, GameOutcome, BOARD_HEIGHT, BOARD_WIDTH};
use crate::win::WinLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Grid of disc codes (0 = empty, otherwise `Disc::code`), row-major
    /// with row 0 at the top.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub cursor: u8,
    /// Landing row for a drop in the cursor column (None when the column is
    /// full or the game is over).
    pub ghost_row: Option<u8>,
    pub to_move: Disc,
    pub outcome: Option<GameOutcome>,
    pub win_line: Option<WinLine>,
    pub last_drop: Option<(u8, u8)>,
    pub moves: u32,
    pub episode_id: u32,
    pub one_wins: u32,
    pub two_wins: u32,
    pub ties: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.cursor = BOARD_WIDTH / 2;
        self.ghost_row = Some(BOARD_HEIGHT - 1);
        self.to_move = Disc::One;
        self.outcome = None;
        self.win_line = None;
        self.last_drop = None;
        self.moves = 0;
        self.episode_id = 0;
        self.one_wins = 0;
        self.two_wins = 0;
        self.ties = 0;
    }

    pub fn in_progress(&self) -> bool {
        self.outcome.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            cursor: BOARD_WIDTH / 2,
            ghost_row: Some(BOARD_HEIGHT - 1),
            to_move: Disc::One,
            outcome: None,
            win_line: None,
            last_drop: None,
            moves: 0,
            episode_id: 0,
            one_wins: 0,
            two_wins: 0,
            ties: 0,
        };
        s.clear();
        s
    }
}
