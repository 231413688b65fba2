//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{color_for_rank, text_color_for_rank, BOARD_BG};

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

/// Draws the grid, a status panel and the confirmation overlays.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for five digits with padding and roughly squares
        // the tile on typical terminal fonts.
        Self {
            tile_w: 7,
            tile_h: 3,
        }
    }
}

/// Where the framed board sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Size of the bordered board for an `n` x `n` grid.
    ///
    /// Tiles are separated by one column and one row of board background.
    pub fn frame_size(&self, n: u16) -> (u16, u16) {
        let w = n * (self.tile_w + 1) + 1 + 2;
        let h = n * (self.tile_h + 1) + 1 + 2;
        (w, h)
    }

    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        fb.fill(Default::default());

        let n = snap.grid.size as u16;
        let (w, h) = self.frame_size(n);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, w - 2, h - 2, ' ', board);
        draw_border(fb, frame, border);

        let size = snap.grid.size;
        let tiles = snap.grid.cells.iter().zip(&snap.grid.ranks);
        for (idx, (&value, &rank)) in tiles.enumerate() {
            let (row, col) = ((idx / size) as u16, (idx % size) as u16);
            self.draw_tile(fb, frame, row, col, value, rank);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.screen {
            Screen::Playing => {}
            Screen::ConfirmQuit => {
                draw_overlay(fb, frame, &["QUIT?", "q again to exit", "any key resumes"])
            }
            Screen::ConfirmRestart => draw_overlay(
                fb,
                frame,
                &["RESTART?", "r again to restart", "any key resumes"],
            ),
            Screen::GameOver => draw_overlay(fb, frame, &["GAME OVER", "r restart  q quit"]),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of tile (row, col).
    fn tile_origin(&self, frame: Frame, row: u16, col: u16) -> (u16, u16) {
        (
            frame.x + 2 + col * (self.tile_w + 1),
            frame.y + 2 + row * (self.tile_h + 1),
        )
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        value: u32,
        rank: u8,
    ) {
        let (x, y) = self.tile_origin(frame, row, col);
        let bg = color_for_rank(rank);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(bg, bg));

        if value != 0 {
            let style = CellStyle::new(text_color_for_rank(rank), bg).bold();
            let text = value.to_string();
            fb.put_str_centered(x, y + self.tile_h / 2, self.tile_w, &text, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let last = snap.last_move.map(|d| d.as_str()).unwrap_or("-");
        let valid = if snap.last_move_changed { "yes" } else { "no" };
        let entries = [
            ("MOVES", snap.moves.to_string()),
            ("MAX", snap.grid.max_value.to_string()),
            ("LAST", last.to_string()),
            ("VALID", valid.to_string()),
        ];

        let mut y = frame.y;
        for (name, text) in entries.iter() {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    for cx in x + 1..right {
        fb.put_str(cx, y, "─", style);
        fb.put_str(cx, bottom, "─", style);
    }
    for cy in y + 1..bottom {
        fb.put_str(x, cy, "│", style);
        fb.put_str(right, cy, "│", style);
    }
    fb.put_str(x, y, "┌", style);
    fb.put_str(right, y, "┐", style);
    fb.put_str(x, bottom, "└", style);
    fb.put_str(right, bottom, "┘", style);
}

/// White box with black text, centred over the board.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
    let text_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let box_w = (text_w + 4).min(frame.w);
    let box_h = lines.len() as u16 + 2;
    let x = frame.x + (frame.w - box_w) / 2;
    let y = frame.y + frame.h.saturating_sub(box_h) / 2;

    let style = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
    fb.fill_rect(x, y, box_w, box_h, ' ', style);
    for (i, line) in lines.iter().enumerate() {
        let line_style = if i == 0 { style.bold() } else { style };
        fb.put_str_centered(x, y + 1 + i as u16, box_w, line, line_style);
    }
}
