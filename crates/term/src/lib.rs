//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to a terminal
//! backend with changed-run diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render exclusively from plain-data snapshots
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_connect_four_core as core;
pub use tui_connect_four_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{parse_color, GameView, Palette, Viewport, COLOR_NAMES};
pub use renderer::TerminalRenderer;
