//! GameView: maps an [`EngineSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::EngineSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Position, GRID_HEIGHT, GRID_WIDTH};

const FIELD_BG: Rgb = Rgb::new(20, 24, 20);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_WIDTH: u16 = 14;

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

/// Player details shown next to the field. Not part of engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStatusView<'a> {
    pub username: &'a str,
    pub high_score: u32,
}

/// Renders the snake field, side panel, and phase overlays.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered field in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the bordered field for `viewport`.
    ///
    /// The field is centered vertically and pushed left enough to leave room
    /// for the side panel.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let total_w = frame_w + 2 + PANEL_WIDTH;
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &EngineSnapshot,
        player: Option<&PlayerStatusView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.origin(viewport);

        let field = CellStyle::new(Rgb::new(60, 70, 60), FIELD_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            field,
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        let wall = CellStyle::new(Rgb::new(150, 150, 160), FIELD_BG);
        for pos in snap.obstacles.iter() {
            self.fill_cell(fb, start_x, start_y, pos, '█', wall);
        }

        if let Some(food) = snap.food {
            let style = CellStyle::new(food_color(food.weight), FIELD_BG).bold();
            self.fill_cell(fb, start_x, start_y, food.position, '●', style);
        }

        let body = CellStyle::new(Rgb::new(60, 180, 75), FIELD_BG);
        let head = CellStyle::new(Rgb::new(150, 255, 150), FIELD_BG).bold();
        // Tail first so the head wins if segments ever overlap.
        for (i, &pos) in snap.snake.iter().enumerate().rev() {
            if i == 0 {
                self.fill_cell(fb, start_x, start_y, pos, '█', head);
            } else {
                self.fill_cell(fb, start_x, start_y, pos, '▓', body);
            }
        }

        self.draw_side_panel(fb, snap, player, viewport, start_x + frame_w + 2, start_y);

        match snap.phase {
            Phase::Ready => draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GET READY", None),
            Phase::Paused => draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", None),
            Phase::Terminated(reason) => draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                Some(reason.as_str()),
            ),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &EngineSnapshot,
        player: Option<&PlayerStatusView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, player, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if !pos.in_bounds() {
            return;
        }
        let px = start_x + 1 + pos.x as u16 * self.cell_w;
        let py = start_y + 1 + pos.y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &EngineSnapshot,
        player: Option<&PlayerStatusView<'_>>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        if let Some(p) = player {
            fb.put_str(panel_x, y, "USER", label);
            fb.put_str(panel_x, y + 1, p.username, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        if let Some(p) = player {
            fb.put_str(panel_x, y, "HIGH", label);
            fb.put_u32(panel_x, y + 1, p.high_score.max(snap.score), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        let end = fb.put_u32(panel_x, y + 1, snap.tick_rate, value);
        fb.put_str(end + 1, y + 1, "/s", value);
        y += 3;

        if let Some(food) = snap.food {
            fb.put_str(panel_x, y, "FOOD", label);
            let end = fb.put_str(panel_x, y + 1, "+", value);
            fb.put_u32(end, y + 1, food.weight, CellStyle::new(food_color(food.weight), PANEL_BG));
            y += 3;
        }

        let hint = CellStyle::new(Rgb::new(120, 120, 120), PANEL_BG);
        for line in ["arrows move", "space pause", "s save+quit", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

fn food_color(weight: u32) -> Rgb {
    match weight {
        1 => Rgb::new(230, 60, 60),
        2 => Rgb::new(70, 120, 240),
        _ => Rgb::new(240, 220, 60),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    title: &str,
    detail: Option<&str>,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    // Upper third, clear of the start lane.
    let text_y = start_y + frame_h / 3;
    let centered = |text: &str| start_x + frame_w.saturating_sub(text.chars().count() as u16) / 2;

    fb.put_str(centered(title), text_y, title, style);
    if let Some(detail) = detail {
        let dim = CellStyle::new(Rgb::new(180, 180, 180), PANEL_BG);
        fb.put_str(centered(detail), text_y + 1, detail, dim);
    }
}
