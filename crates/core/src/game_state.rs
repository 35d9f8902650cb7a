//! Game state module - the turn state machine.
//!
//! Ties together the board, win detection, and the column cursor, and owns
//! everything a session accumulates across games (win/tie tallies, episode
//! id). The state is an explicitly owned value; there are no globals.

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::types::{Disc, GameAction, GameOutcome, MoveError, BOARD_WIDTH};
use crate::win::{find_win, WinLine};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Side to move. Stays on the winner once the game ends.
    to_move: Disc,
    outcome: Option<GameOutcome>,
    win_line: Option<WinLine>,
    /// Column the next drop targets.
    cursor: u8,
    /// Landing position of the most recent disc (col, row).
    last_drop: Option<(u8, u8)>,
    /// Discs placed in the current game.
    moves: u32,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
    one_wins: u32,
    two_wins: u32,
    ties: u32,
}

impl GameState {
    /// Create a fresh game with Player 1 to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Disc::One,
            outcome: None,
            win_line: None,
            cursor: BOARD_WIDTH / 2,
            last_drop: None,
            moves: 0,
            episode_id: 0,
            one_wins: 0,
            two_wins: 0,
            ties: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn to_move(&self) -> Disc {
        self.to_move
    }

    #[cfg(test)]
    pub fn set_to_move(&mut self, disc: Disc) {
        self.to_move = disc;
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn last_drop(&self) -> Option<(u8, u8)> {
        self.last_drop
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn one_wins(&self) -> u32 {
        self.one_wins
    }

    pub fn two_wins(&self) -> u32 {
        self.two_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Row the next disc would land in at the cursor column
    pub fn ghost_row(&self) -> Option<u8> {
        if self.is_over() {
            return None;
        }
        self.board.drop_row(self.cursor)
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor + 1 >= BOARD_WIDTH {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn select_column(&mut self, col: u8) -> bool {
        if col >= BOARD_WIDTH {
            return false;
        }
        self.cursor = col;
        true
    }

    /// Drop the side-to-move's disc in `col`.
    ///
    /// Returns the landing row. The side to move swaps only when the move
    /// ends neither in a win nor a full board, so the winner is still
    /// `to_move` once the game is over.
    pub fn drop_at(&mut self, col: u8) -> Result<u8, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop_disc(col, self.to_move)?;
        self.last_drop = Some((col, row));
        self.moves += 1;

        if let Some(line) = find_win(&self.board, self.to_move) {
            self.win_line = Some(line);
            self.outcome = Some(GameOutcome::Win(self.to_move));
            match self.to_move {
                Disc::One => self.one_wins += 1,
                Disc::Two => self.two_wins += 1,
            }
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            self.ties += 1;
        } else {
            self.to_move = self.to_move.other();
        }

        Ok(row)
    }

    /// Start a new game. Session tallies carry across; the episode id bumps.
    pub fn restart(&mut self) {
        self.board.clear();
        self.to_move = Disc::One;
        self.outcome = None;
        self.win_line = None;
        self.cursor = BOARD_WIDTH / 2;
        self.last_drop = None;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Apply a game action, returning whether it changed state
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_cursor_left(),
            GameAction::MoveRight => self.move_cursor_right(),
            GameAction::SelectColumn(col) => self.select_column(col),
            GameAction::Drop => self.drop_at(self.cursor).is_ok(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.cursor = self.cursor;
        out.ghost_row = self.ghost_row();
        out.to_move = self.to_move;
        out.outcome = self.outcome;
        out.win_line = self.win_line;
        out.last_drop = self.last_drop;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.one_wins = self.one_wins;
        out.two_wins = self.two_wins;
        out.ties = self.ties;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
