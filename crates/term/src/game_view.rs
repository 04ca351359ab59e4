//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

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

const BOARD_BG: Rgb = Rgb::new(60, 58, 50);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a centred 6-digit tile with a column of padding each side.
        Self {
            tile_w: 8,
            tile_h: 3,
        }
    }
}

impl GameView {
    /// Outer size of the bordered board for a `cols x rows` grid.
    ///
    /// Tiles are separated (and inset from the border) by one cell.
    pub fn frame_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        let cols = u16::try_from(cols).unwrap_or(u16::MAX);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        let inner_w = cols.saturating_mul(self.tile_w + 1).saturating_add(1);
        let inner_h = rows.saturating_mul(self.tile_h + 1).saturating_add(1);
        (inner_w.saturating_add(2), inner_h.saturating_add(2))
    }

    /// Top-left corner of the tile at (x, y), relative to the frame origin.
    pub fn tile_origin(&self, x: usize, y: usize) -> (u16, u16) {
        let x = u16::try_from(x).unwrap_or(u16::MAX);
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        (
            x.saturating_mul(self.tile_w + 1).saturating_add(2),
            y.saturating_mul(self.tile_h + 1).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.width, snap.height);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let value = snap.tile(x, y).unwrap_or(0);
                let (ox, oy) = self.tile_origin(x, y);
                self.draw_tile(fb, start_x.saturating_add(ox), start_y.saturating_add(oy), value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w), start_y);

        if snap.lost {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", Some("press r to retry"));
        } else if snap.won {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!", None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: Tile) {
        let style = tile_style(value);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
        if value == 0 {
            return;
        }

        let digits = digit_count(value);
        let tx = px.saturating_add(self.tile_w.saturating_sub(digits) / 2);
        let ty = py.saturating_add(self.tile_h / 2);
        fb.put_u32(tx, ty, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = CellStyle::new(Rgb::new(130, 130, 130), PANEL_BG);
        let steps = CellStyle::new(Rgb::new(240, 220, 80), PANEL_BG);

        let mut y = start_y;
        let mut field = |fb: &mut FrameBuffer, name: &str, n: u32, style: CellStyle| {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, style);
            y = y.saturating_add(3);
        };
        field(fb, "STEPS", snap.steps, steps);
        field(fb, "BEST", snap.max_tile, value);
        field(fb, "GOAL", snap.win_threshold, value);

        fb.put_str(panel_x, y, "arrows/hjkl move", help);
        fb.put_str(panel_x, y.saturating_add(1), "r restart", help);
        fb.put_str(panel_x, y.saturating_add(2), "esc/q quit", help);
    }
}

/// Colors for a tile value. Empty cells get the board's slot color.
pub fn tile_style(value: Tile) -> CellStyle {
    let dark = Rgb::new(40, 40, 40);
    let light = Rgb::new(250, 248, 240);
    let (bg, fg) = match value {
        0 => (Rgb::new(90, 86, 76), dark),
        2 => (Rgb::new(238, 228, 218), dark),
        4 => (Rgb::new(237, 224, 200), dark),
        8 => (Rgb::new(242, 177, 121), light),
        16 => (Rgb::new(245, 149, 99), light),
        32 => (Rgb::new(246, 124, 95), light),
        64 => (Rgb::new(246, 94, 59), light),
        128 => (Rgb::new(237, 207, 114), light),
        256 => (Rgb::new(237, 204, 97), light),
        512 => (Rgb::new(237, 200, 80), light),
        1024 => (Rgb::new(237, 197, 63), light),
        2048 => (Rgb::new(237, 194, 46), light),
        4096 => (Rgb::new(178, 102, 214), light),
        8192 => (Rgb::new(142, 68, 173), light),
        _ => (Rgb::new(60, 58, 50), Rgb::new(255, 90, 90)),
    };
    let style = CellStyle::new(fg, bg);
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    title: &str,
    hint: Option<&str>,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let mid_y = start_y.saturating_add(frame_h / 2);
    let centered = |text: &str| {
        let w = text.chars().count() as u16;
        start_x.saturating_add(frame_w.saturating_sub(w) / 2)
    };

    fb.put_str(centered(title), mid_y, title, style);
    if let Some(hint) = hint {
        let hint_style = CellStyle { bold: false, ..style };
        fb.put_str(centered(hint), mid_y.saturating_add(1), hint, hint_style);
    }
}
