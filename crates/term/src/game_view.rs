//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_connect_four_core::GameSnapshot;
use tui_connect_four_types::{Disc, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{FrameBuffer, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Disc colors, one per player.
///
/// The core knows players only by identity; which color a player shows up
/// as is decided here (and by the `--p1-color`/`--p2-color` flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub one: Rgb,
    pub two: Rgb,
}

impl Palette {
    pub fn disc(&self, disc: Disc) -> Rgb {
        match disc {
            Disc::One => self.one,
            Disc::Two => self.two,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        // Classic red vs yellow.
        Self {
            one: Rgb::new(220, 60, 50),
            two: Rgb::new(230, 200, 60),
        }
    }
}

/// Parse a named disc color (the CLI surface).
pub fn parse_color(name: &str) -> Option<Rgb> {
    match name.to_lowercase().as_str() {
        "red" => Some(Rgb::new(220, 60, 50)),
        "yellow" => Some(Rgb::new(230, 200, 60)),
        "blue" => Some(Rgb::new(70, 120, 220)),
        "green" => Some(Rgb::new(90, 200, 110)),
        "magenta" => Some(Rgb::new(200, 100, 220)),
        "cyan" => Some(Rgb::new(80, 200, 210)),
        "orange" => Some(Rgb::new(255, 165, 0)),
        "white" => Some(Rgb::new(235, 235, 235)),
        _ => None,
    }
}

/// Names accepted by [`parse_color`], for usage text.
pub const COLOR_NAMES: &[&str] = &[
    "red", "yellow", "blue", "green", "magenta", "cyan", "orange", "white",
];

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const WIN_BG: Rgb = Rgb::new(90, 90, 110);

/// A lightweight terminal renderer for the Connect Four board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            palette: Palette::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render a game snapshot into a framebuffer.
    ///
    /// Layout: one header row of column digits with the cursor highlighted,
    /// the bordered grid below it, a stats panel to the right when the
    /// viewport allows, and an end-of-game banner over the grid.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        // Header row sits above the frame.
        let block_h = frame_h + 1;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(block_h) / 2;
        let frame_y = start_y + 1;

        let bg = Style::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for the play area.
        fb.fill_rect(start_x + 1, frame_y + 1, board_px_w, board_px_h, ' ', bg);

        self.draw_border(&mut fb, start_x, frame_y, frame_w, frame_h, border);
        self.draw_header(&mut fb, snap, start_x, start_y);

        // Settled discs.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match snap.board[y as usize][x as usize] {
                    0 => self.draw_empty_cell(&mut fb, start_x, frame_y, x, y),
                    code => {
                        let disc = if code == Disc::One.code() {
                            Disc::One
                        } else {
                            Disc::Two
                        };
                        self.draw_disc(&mut fb, snap, start_x, frame_y, x, y, disc);
                    }
                }
            }
        }

        // Ghost slot: where a drop in the cursor column would land.
        if snap.in_progress() {
            if let Some(row) = snap.ghost_row {
                let style = Style::new(self.palette.disc(snap.to_move).faded(), PLAY_BG);
                self.fill_cell_rect(&mut fb, start_x, frame_y, snap.cursor, row, '░', style);
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(outcome) = snap.outcome {
            let banner = outcome.message().to_uppercase();
            self.draw_overlay(&mut fb, start_x, frame_y, frame_w, frame_h, &banner);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Column digits 1-7, with the cursor column highlighted.
    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, header_y: u16) {
        let plain = Style::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0));
        let selected = Style::new(Rgb::new(255, 255, 255), Rgb::new(60, 60, 80)).bold();

        for col in 0..BOARD_WIDTH {
            let digit = (b'1' + col) as char;
            let x = start_x + 1 + (col as u16) * self.cell_w;
            let style = if snap.in_progress() && col == snap.cursor {
                selected
            } else {
                plain
            };
            fb.put_char(x, header_y, digit, style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, frame_y: u16, x: u8, y: u8) {
        let style = Style::new(Rgb::new(90, 90, 100), PLAY_BG);
        self.fill_cell_rect(fb, start_x, frame_y, x, y, '·', style);
    }

    fn draw_disc(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        frame_y: u16,
        x: u8,
        y: u8,
        disc: Disc,
    ) {
        let on_win_line = snap
            .win_line
            .map(|line| line.contains(&(x, y)))
            .unwrap_or(false);
        let is_last_drop = snap.last_drop == Some((x, y));

        let mut style = Style::new(
            self.palette.disc(disc),
            if on_win_line { WIN_BG } else { PLAY_BG },
        );
        if on_win_line || is_last_drop {
            style = style.bold();
        }
        self.fill_cell_rect(fb, start_x, frame_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_y: u16,
        cell_x: u8,
        cell_y: u8,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = frame_y + 1 + (cell_y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        let turn = Style::new(self.palette.disc(snap.to_move), Rgb::new(0, 0, 0)).bold();
        fb.put_str(panel_x, y, snap.to_move.name(), turn);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WINS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("P1 {}", snap.one_wins), value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("P2 {}", snap.two_wins), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.ties), value);
        y = y.saturating_add(2);

        if y < viewport.height {
            fb.put_str(panel_x, y, "MOVES", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &format!("{}", snap.moves), value);
            y = y.saturating_add(2);
        }

        if y < viewport.height {
            fb.put_str(panel_x, y, "GAME", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &format!("#{}", snap.episode_id + 1), value);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = frame_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);

        let hint = "R TO RESTART";
        let hint_w = hint.chars().count() as u16;
        let hx = start_x.saturating_add(frame_w.saturating_sub(hint_w) / 2);
        let hint_style = Style::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
        fb.put_str(hx, mid_y.saturating_add(1), hint, hint_style);
    }
}
