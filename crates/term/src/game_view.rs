//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Field coordinates are scaled independently on each axis into the area
//! inside a one-cell border, so the whole field is always visible whatever
//! the terminal size. Circles therefore come out as ellipses in field units,
//! which roughly cancels the tall aspect ratio of terminal glyphs.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{Outcome, Phase};

const BLACK: Rgb = Rgb::new(0, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);
const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const YELLOW: Rgb = Rgb::new(255, 255, 0);
const GRAY: Rgb = Rgb::new(128, 128, 128);
const PANEL_EDGE: Rgb = Rgb::new(176, 176, 176);

/// End-of-session panel size in field units.
const PANEL_FIELD_W: f32 = 600.0;
const PANEL_FIELD_H: f32 = 300.0;

pub const MENU_TITLE: &str = "Keep away from the red circles";
pub const MENU_SUBTITLE: &str = "Collect the yellow circles to win";
pub const MENU_PROMPT: &str = "Press Enter to Start";
pub const WIN_MESSAGE: &str = "YOU WIN!!!";
pub const LOSS_MESSAGE: &str = "Game Over!!!";
pub const PLAY_AGAIN_PROMPT: &str = "Press Enter to Play Again";
pub const EXIT_PROMPT: &str = "Press Escape to Exit";

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

/// A lightweight terminal renderer for the chase game.
pub struct GameView {
    glyph: char,
    show_hud: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            glyph: '█',
            show_hud: true,
        }
    }
}

/// Field-to-cell mapping for one frame.
#[derive(Debug, Clone, Copy)]
struct FieldMap {
    inner: Rect,
    sx: f32,
    sy: f32,
}

impl FieldMap {
    fn new(inner: Rect, field_w: f32, field_h: f32) -> Self {
        Self {
            inner,
            sx: inner.w as f32 / field_w.max(1.0),
            sy: inner.h as f32 / field_h.max(1.0),
        }
    }

    fn x(&self, fx: f32) -> f32 {
        self.inner.x as f32 + fx * self.sx
    }

    fn y(&self, fy: f32) -> f32 {
        self.inner.y as f32 + fy * self.sy
    }
}

impl GameView {
    /// Use `glyph` for every filled circle.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(BLACK, BLACK).into_cell(' '));

        match snap.phase {
            Phase::StartMenu => self.draw_menu(fb),
            Phase::Playing => {
                self.draw_field(fb, snap);
                if self.show_hud {
                    self.draw_score(fb, snap.score);
                }
            }
            Phase::Ended(outcome) => {
                self.draw_field(fb, snap);
                self.draw_end_panel(fb, snap, outcome);
            }
            Phase::Terminated => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer) {
        let w = fb.width();
        let mid = fb.height() / 2;
        let title = CellStyle::new(BLUE, BLACK).bold();
        let prompt = CellStyle::new(GREEN, BLACK);

        fb.put_str_centered(0, w, mid.saturating_sub(4), MENU_TITLE, title);
        fb.put_str_centered(0, w, mid.saturating_sub(2), MENU_SUBTITLE, title);
        fb.put_str_centered(0, w, mid, MENU_PROMPT, prompt);
    }

    /// Border, pellets, ghosts, then the player on top.
    fn draw_field(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let (w, h) = (fb.width(), fb.height());
        if w < 3 || h < 3 {
            return;
        }
        fb.draw_border(Rect::new(0, 0, w, h), CellStyle::new(GRAY, BLACK).dim());

        let map = FieldMap::new(Rect::new(1, 1, w - 2, h - 2), snap.field_width, snap.field_height);

        let pellet = CellStyle::new(YELLOW, BLACK);
        for p in &snap.pellets {
            self.draw_circle(fb, &map, p.x, p.y, snap.pellet_radius, pellet);
        }

        let ghost = CellStyle::new(RED, BLACK);
        for g in &snap.ghosts {
            self.draw_circle(fb, &map, g.pos.x, g.pos.y, g.radius, ghost);
        }

        let player = CellStyle::new(BLUE, BLACK).bold();
        self.draw_circle(
            fb,
            &map,
            snap.player.pos.x,
            snap.player.pos.y,
            snap.player.radius,
            player,
        );
    }

    fn draw_circle(
        &self,
        fb: &mut FrameBuffer,
        map: &FieldMap,
        fx: f32,
        fy: f32,
        radius: f32,
        style: CellStyle,
    ) {
        fb.fill_ellipse(
            map.x(fx),
            map.y(fy),
            radius * map.sx,
            radius * map.sy,
            map.inner,
            self.glyph,
            style,
        );
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u32) {
        let style = CellStyle::new(BLUE, BLACK).bold();
        let label = "Score: ";
        fb.put_str(2, 1, label, style);
        fb.put_u32(2 + label.len() as u16, 1, score, style);
    }

    fn draw_end_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, outcome: Outcome) {
        let (w, h) = (fb.width(), fb.height());
        let message = match outcome {
            Outcome::Win => WIN_MESSAGE,
            Outcome::Loss => LOSS_MESSAGE,
        };

        // Never smaller than the text it holds, never larger than the screen.
        let text_w = PLAY_AGAIN_PROMPT.chars().count() as u16 + 4;
        let scale_w = w.saturating_sub(2) as f32 / snap.field_width.max(1.0);
        let scale_h = h.saturating_sub(2) as f32 / snap.field_height.max(1.0);
        let panel_w = ((PANEL_FIELD_W * scale_w).round() as u16).max(text_w).min(w);
        let panel_h = ((PANEL_FIELD_H * scale_h).round() as u16).max(6).min(h);
        let area = Rect::new((w - panel_w) / 2, (h - panel_h) / 2, panel_w, panel_h);

        fb.draw_panel(area, CellStyle::new(PANEL_EDGE, GRAY));

        let title = CellStyle::new(BLUE, GRAY).bold();
        let body = CellStyle::new(BLUE, GRAY);
        let top = area.y + panel_h.saturating_sub(4) / 2;
        fb.put_str_centered(area.x, panel_w, top, message, title);
        fb.put_str_centered(area.x, panel_w, top + 2, PLAY_AGAIN_PROMPT, body);
        fb.put_str_centered(area.x, panel_w, top + 3, EXIT_PROMPT, body);
    }
}
