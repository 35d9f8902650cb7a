//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same move sequence produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for move processing
//!
//! # Module Structure
//!
//! - [`board`]: 7x6 game board with gravity drops and column bookkeeping
//! - [`win`]: exhaustive four-in-a-row detection across all four directions
//! - [`game_state`]: turn state machine, outcome tracking, session tallies
//! - [`snapshot`]: plain-data render snapshot for presentation layers
//!
//! # Game Rules
//!
//! Two players alternate dropping discs into columns; a disc falls to the
//! lowest empty cell. The first player with four discs in a row
//! (horizontally, vertically, or diagonally) wins; a full board with no
//! winning run is a tie. A drop into a full column is rejected without
//! changing state, and once a game ends further moves are rejected until a
//! restart.
//!
//! # Example
//!
//! ```
//! use tui_connect_four_core::GameState;
//! use tui_connect_four_types::{Disc, GameAction};
//!
//! let mut game = GameState::new();
//!
//! game.apply_action(GameAction::SelectColumn(3));
//! game.apply_action(GameAction::Drop);
//!
//! // Player 1 moved; Player 2 is up.
//! assert_eq!(game.to_move(), Disc::Two);
//! ```

pub mod board;
pub mod game_state;
pub mod snapshot;
pub mod win;

pub use tui_connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use snapshot::GameSnapshot;
pub use win::{find_win, has_win, WinLine};
