//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Board dimensions (columns x rows).
pub const BOARD_WIDTH: u8 = 7;
pub const BOARD_HEIGHT: u8 = 6;

/// Run length required to win.
pub const CONNECT: usize = 4;

/// Input/render loop tick (milliseconds).
pub const TICK_MS: u32 = 16;

/// DAS/ARR timing for held cursor movement (milliseconds).
pub const DEFAULT_DAS_MS: u32 = 180;
pub const DEFAULT_ARR_MS: u32 = 60;

/// One of the two players. Display color is renderer configuration,
/// not part of the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    One,
    Two,
}

impl Disc {
    /// The opposing player.
    pub fn other(self) -> Disc {
        match self {
            Disc::One => Disc::Two,
            Disc::Two => Disc::One,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Disc::One => "Player 1",
            Disc::Two => "Player 2",
        }
    }

    /// Numeric code used in snapshot grids (empty cells are 0).
    pub fn code(self) -> u8 {
        match self {
            Disc::One => 1,
            Disc::Two => 2,
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a disc).
pub type Cell = Option<Disc>;

/// Game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// Move the cursor directly to a column (0-based).
    SelectColumn(u8),
    Drop,
    Restart,
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Disc),
    Tie,
}

impl GameOutcome {
    /// User-facing end-of-game message.
    pub fn message(self) -> String {
        match self {
            GameOutcome::Win(disc) => format!("{} won!", disc.name()),
            GameOutcome::Tie => "Tie!".to_string(),
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidColumn,
    ColumnFull,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_disc() {
        assert_eq!(Disc::One.other(), Disc::Two);
        assert_eq!(Disc::Two.other(), Disc::One);
    }

    #[test]
    fn test_disc_names() {
        assert_eq!(Disc::One.name(), "Player 1");
        assert_eq!(Disc::Two.name(), "Player 2");
    }

    #[test]
    fn test_disc_codes_are_distinct_and_nonzero() {
        assert_ne!(Disc::One.code(), Disc::Two.code());
        assert_ne!(Disc::One.code(), 0);
        assert_ne!(Disc::Two.code(), 0);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(GameOutcome::Win(Disc::One).message(), "Player 1 won!");
        assert_eq!(GameOutcome::Win(Disc::Two).message(), "Player 2 won!");
        assert_eq!(GameOutcome::Tie.message(), "Tie!");
    }
}
