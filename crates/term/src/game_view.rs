//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette;
use crate::types::GameStatus;

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 reads near-square in typical terminal glyphs and still fits a
        // four digit tile value with a space on each side.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let size = game.size() as u16;
        let board_px_w = size * self.cell_w;
        let board_px_h = size * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, line) in game.board().rows().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, col as u16, row as u16, value);
            }
        }

        // Side panel (score/target/help).
        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);

        // Overlays.
        match game.status() {
            GameStatus::Won => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!")
            }
            GameStatus::Over => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        value: u32,
    ) {
        let style = palette::tile_style(value);
        self.fill_cell_rect(fb, start_x, start_y, col, row, ' ', style);

        if value != 0 {
            // Center the value on the middle row of the tile.
            let px = start_x + 1 + col * self.cell_w;
            let py = start_y + 1 + row * self.cell_h;
            let x = px + self.cell_w.saturating_sub(decimal_width(value)) / 2;
            let y = py + self.cell_h / 2;
            fb.put_u32(x, y, value, style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
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
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TARGET", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.target(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGHEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.board().max_tile(), value);
        y = y.saturating_add(2);

        if panel_w >= 16 {
            let dim = CellStyle { dim: true, ..value };
            fb.put_str(panel_x, y, "HOW TO PLAY", label);
            y = y.saturating_add(1);
            for line in [
                "Slide with arrows,",
                "wasd, or hjkl.",
                "Equal tiles merge;",
                "a new 2 or 4 drops",
                "after every move.",
            ] {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, dim);
                y = y.saturating_add(1);
            }
            y = y.saturating_add(1);
        }

        fb.put_str(panel_x, y, "R restart  Q quit", value);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        put_centered(fb, start_x, frame_w, mid_y, text, style);

        let hint = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        put_centered(
            fb,
            start_x,
            frame_w,
            mid_y.saturating_add(1),
            "press r to play again",
            hint,
        );
    }
}

fn put_centered(
    fb: &mut FrameBuffer,
    start_x: u16,
    frame_w: u16,
    y: u16,
    text: &str,
    style: CellStyle,
) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn decimal_width(value: u32) -> u16 {
    let mut width = 1;
    let mut rest = value / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}
