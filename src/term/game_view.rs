//! GameView: maps a session's derived view into a terminal framebuffer.
//!
//! This module is pure (no I/O). It consumes the flat color sequence the
//! core projects and never reaches into board internals.

use crate::core::Session;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Draws the playfield, score panel and phase overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current session into a fresh framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Playfield: one styled block per entry of the flat color sequence.
        let colors = session.view();
        for (i, color) in colors.iter().enumerate() {
            let x = (i % BOARD_WIDTH as usize) as u16;
            let y = (i / BOARD_WIDTH as usize) as u16;
            let (ch, style) = cell_glyph(*color);
            let px = start_x + 1 + x * self.cell_w;
            let py = start_y + 1 + y * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }

        self.draw_side_panel(&mut fb, session, viewport, start_x, start_y, frame_w);

        match session.phase() {
            GamePhase::Inactive => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER")
            }
            GamePhase::Paused => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            GamePhase::Lost => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GamePhase::Active => {}
        }

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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", session.speed_ms()), value);
        y = y.saturating_add(2);

        for line in [
            "← → move",
            "↑ rotate cw",
            "z rotate ccw",
            "↓ drop",
            "esc pause",
            "+/- speed",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Reserved columns for the side panel when centering the playfield.
const PANEL_WIDTH: u16 = 14;

fn cell_glyph(color: Color) -> (char, CellStyle) {
    let (fg, ch) = match color {
        Color::Cyan => (Rgb::new(80, 220, 220), '█'),
        Color::Yellow => (Rgb::new(240, 220, 80), '█'),
        Color::Purple => (Rgb::new(200, 120, 220), '█'),
        Color::Green => (Rgb::new(100, 220, 120), '█'),
        Color::Red => (Rgb::new(220, 80, 80), '█'),
        Color::Blue => (Rgb::new(80, 120, 220), '█'),
        Color::Orange => (Rgb::new(255, 165, 0), '█'),
        // Empty cells render as a faint grid dot.
        Color::Grey => (Rgb::new(90, 90, 100), '·'),
    };
    (
        ch,
        CellStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold: color != Color::Grey,
        },
    )
}
