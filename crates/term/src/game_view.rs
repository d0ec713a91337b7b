//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: a boxed board panel (two columns per cell) with a boxed info panel
//! one column to its right, the pair centred in the viewport.

use crate::core::pieces::occupied_offsets;
use crate::core::{template_for, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell.
const CELL_W: u16 = 2;

/// Glyph for an occupied cell.
const BLOCK: [char; 2] = ['[', ']'];

/// Default width of the info panel, border included.
pub const INFO_PANEL_WIDTH: u16 = 30;

const CONTROLS: [&str; 5] = [
    "<- -> : move",
    "z/x : rotate",
    "down : soft drop",
    "space : hard drop",
    "p : pause  q : quit",
];

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

/// Where each panel lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub board_w: u16,
    pub board_h: u16,
    pub panel_x: u16,
    pub panel_w: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    panel_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            panel_w: INFO_PANEL_WIDTH,
        }
    }
}

impl GameView {
    /// Compute panel placement. Both panels share the board's height.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let board_w = (BOARD_WIDTH as u16) * CELL_W + 2;
        let board_h = BOARD_HEIGHT as u16 + 2;
        let total_w = board_w + 1 + self.panel_w;

        let board_x = viewport.width.saturating_sub(total_w) / 2;
        let board_y = viewport.height.saturating_sub(board_h) / 2;

        Layout {
            board_x,
            board_y,
            board_w,
            board_h,
            panel_x: board_x + board_w + 1,
            panel_w: self.panel_w,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        self.draw_board(fb, snap, &layout);

        if snap.game_over {
            self.draw_end_screen(fb, snap, &layout);
        } else {
            self.draw_info_panel(fb, snap, &layout);
        }

        if snap.paused {
            self.draw_overlay_text(fb, &layout, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        fb.draw_box(
            layout.board_x,
            layout.board_y,
            layout.board_w,
            layout.board_h,
            border_style(),
        );

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                if let Some(kind) = PieceKind::from_id(id) {
                    self.draw_cell(fb, layout, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece, clipped to the visible rows.
        if let Some(active) = snap.active {
            for (dx, dy) in occupied_offsets(&active.matrix) {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_cell(fb, layout, x as u16, y as u16, active.kind);
                }
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, kind: PieceKind) {
        let px = layout.board_x + 1 + x * CELL_W;
        let py = layout.board_y + 1 + y;
        let style = piece_style(kind);
        fb.put_char(px, py, BLOCK[0], style);
        fb.put_char(px + 1, py, BLOCK[1], style);
    }

    fn draw_info_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let x = layout.panel_x;
        let y = layout.board_y;
        fb.draw_box(x, y, layout.panel_w, layout.board_h, border_style());

        let text_x = x + 2;
        let label = label_style();
        let value = value_style();

        let end = fb.put_str(text_x, y + 1, "Score: ", label);
        fb.put_u32(end, y + 1, snap.score, value);
        let end = fb.put_str(text_x, y + 2, "Level: ", label);
        fb.put_u32(end, y + 2, snap.level, value);
        let end = fb.put_str(text_x, y + 3, "Lines: ", label);
        fb.put_u32(end, y + 3, snap.lines, value);

        fb.put_str(text_x, y + 5, "Next:", label);
        let preview = template_for(snap.next);
        let style = piece_style(snap.next);
        for (dx, dy) in occupied_offsets(preview) {
            let px = text_x + (dx as u16) * CELL_W;
            let py = y + 7 + dy as u16;
            fb.put_char(px, py, BLOCK[0], style);
            fb.put_char(px + 1, py, BLOCK[1], style);
        }

        fb.put_str(text_x, y + 12, "Controls:", label);
        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(text_x, y + 13 + i as u16, line, value);
        }

        if snap.paused {
            fb.put_str(text_x, y + 19, "PAUSED", banner_style());
        }
    }

    fn draw_end_screen(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let x = layout.panel_x;
        let y = layout.board_y;
        fb.draw_box(x, y, layout.panel_w, layout.board_h, border_style());

        let text_x = x + 2;
        let label = label_style();
        let value = value_style();

        fb.put_str(text_x, y + 2, "GAME OVER", banner_style());
        let end = fb.put_str(text_x, y + 4, "Score: ", label);
        fb.put_u32(end, y + 4, snap.score, value);
        let end = fb.put_str(text_x, y + 5, "Lines: ", label);
        fb.put_u32(end, y + 5, snap.lines, value);
        let end = fb.put_str(text_x, y + 6, "Level: ", label);
        fb.put_u32(end, y + 6, snap.level, value);
        fb.put_str(text_x, y + 8, "Press q to quit", value);

        fb.put_str(text_x, y + 19, "GAME OVER! q to quit", banner_style());
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.board_y.saturating_add(layout.board_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .board_x
            .saturating_add(layout.board_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, banner_style());
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle::fg(piece_color(kind)).bold()
}

fn border_style() -> CellStyle {
    CellStyle::fg(Rgb::new(200, 200, 200))
}

fn label_style() -> CellStyle {
    CellStyle::fg(Rgb::new(220, 220, 220)).bold()
}

fn value_style() -> CellStyle {
    CellStyle::fg(Rgb::new(200, 200, 200))
}

fn banner_style() -> CellStyle {
    CellStyle::fg(Rgb::new(255, 255, 255)).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centres_board_and_panel() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 24));
        // 22 (board) + 1 + 30 (panel) = 53 columns.
        assert_eq!(layout.board_x, (80 - 53) / 2);
        assert_eq!(layout.board_y, 1);
        assert_eq!(layout.board_w, 22);
        assert_eq!(layout.board_h, 22);
        assert_eq!(layout.panel_x, layout.board_x + 23);
    }

    #[test]
    fn layout_saturates_on_tiny_viewports() {
        let layout = GameView::default().layout(Viewport::new(10, 5));
        assert_eq!(layout.board_x, 0);
        assert_eq!(layout.board_y, 0);
    }

    #[test]
    fn piece_colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b));
                }
            }
        }
    }
}
