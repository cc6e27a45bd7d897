//! Drawing the play field into a pixel buffer

use glam::Vec2;

use super::pixels::{PixelBuf, Rgb};
use crate::sim::{Ball, GameState, Paddle, Side};

/// Outside the play field when the terminal's aspect differs from it
pub const LETTERBOX: Rgb = Rgb(24, 24, 24);
pub const BACKGROUND: Rgb = Rgb::BLACK;
pub const DIVIDER: Rgb = Rgb::WHITE;
pub const SCORE: Rgb = Rgb::WHITE;
pub const BALL: Rgb = Rgb::WHITE;

/// Height of score text in field pixels
const SCORE_TEXT_HEIGHT: f32 = 30.0;
/// Top of score text in field pixels
const SCORE_TEXT_TOP: f32 = 20.0;

pub fn paddle_color(side: Side) -> Rgb {
    match side {
        Side::Left => Rgb::RED,
        Side::Right => Rgb::BLUE,
    }
}

/// Uniform mapping from field coordinates to buffer pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    /// Largest centered fit of `field` inside a `w` x `h` pixel buffer
    pub fn fit(field: Vec2, w: usize, h: usize) -> Self {
        let scale = (w as f32 / field.x).min(h as f32 / field.y);
        let used = field * scale;
        let offset = ((Vec2::new(w as f32, h as f32) - used) / 2.0).floor();
        Self { scale, offset }
    }

    pub fn to_pixels(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    /// Field rectangle as (x, y, w, h) pixels, never thinner than one pixel
    pub fn rect(&self, pos: Vec2, size: Vec2) -> (i32, i32, i32, i32) {
        let tl = self.to_pixels(pos).round();
        let br = self.to_pixels(pos + size).round();
        let w = ((br.x - tl.x) as i32).max(1);
        let h = ((br.y - tl.y) as i32).max(1);
        (tl.x as i32, tl.y as i32, w, h)
    }
}

/// Draw a complete frame of the game
pub fn draw_scene(buf: &mut PixelBuf, view: &Viewport, state: &GameState) {
    buf.clear(LETTERBOX);
    let (x, y, w, h) = view.rect(Vec2::ZERO, state.field);
    buf.fill_rect(x, y, w, h, BACKGROUND);

    draw_scores(buf, view, state);
    draw_paddle(buf, view, &state.left_paddle);
    draw_paddle(buf, view, &state.right_paddle);
    draw_center_divider(buf, view, state.field);
    draw_ball(buf, view, &state.ball);
}

pub fn draw_paddle(buf: &mut PixelBuf, view: &Viewport, paddle: &Paddle) {
    let (x, y, w, h) = view.rect(paddle.pos, paddle.size);
    buf.fill_rect(x, y, w, h, paddle_color(paddle.side));
}

pub fn draw_ball(buf: &mut PixelBuf, view: &Viewport, ball: &Ball) {
    let c = view.to_pixels(ball.pos);
    buf.fill_circle(c.x, c.y, ball.radius * view.scale, BALL);
}

/// Dashed line down the middle: 20 dashes, each half its period long
pub fn draw_center_divider(buf: &mut PixelBuf, view: &Viewport, field: Vec2) {
    let period = (field.y / 20.0).floor();
    let dash = (field.y / 40.0).floor();
    if period <= 0.0 {
        return;
    }
    let x = (field.x / 2.0).floor() - 2.0;
    let mut y = 10.0;
    while y < field.y {
        let (px, py, w, h) = view.rect(Vec2::new(x, y), Vec2::new(4.0, dash));
        buf.fill_rect(px, py, w, h, DIVIDER);
        y += period;
    }
}

/// Scores centered over each quarter of the field
pub fn draw_scores(buf: &mut PixelBuf, view: &Viewport, state: &GameState) {
    let glyph_px = ((SCORE_TEXT_HEIGHT * view.scale) / 5.0).round().max(1.0) as i32;
    let top = view.to_pixels(Vec2::new(0.0, SCORE_TEXT_TOP)).y as i32;
    for (side, quarter) in [(Side::Left, 0.25), (Side::Right, 0.75)] {
        let cx = view.to_pixels(Vec2::new(state.field.x * quarter, 0.0)).x as i32;
        draw_number(buf, cx, top, state.score.get(side), glyph_px, SCORE);
    }
}

// ── 3x5 bitmap digits ──────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u32, px: i32, fg: Rgb) {
    let glyph = &DIGITS[(d % 10) as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                buf.fill_rect(x + col as i32 * px, y + row as i32 * px, px, px, fg);
            }
        }
    }
}

/// Draw `n` horizontally centered on `cx`, glyph pixels `px` wide
pub fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, n: u32, px: i32, fg: Rgb) {
    let s = n.to_string();
    let advance = 4 * px; // 3px per digit + 1px spacing
    let total_w = s.len() as i32 * advance - px;
    let start_x = cx - total_w / 2;
    for (i, d) in s.chars().filter_map(|ch| ch.to_digit(10)).enumerate() {
        draw_digit(buf, start_x + i as i32 * advance, y, d, px, fg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_viewport_letterboxes() {
        let view = Viewport::fit(Vec2::new(1100.0, 800.0), 220, 200);
        assert!((view.scale - 0.2).abs() < 1e-6);
        assert_eq!(view.offset, Vec2::new(0.0, 20.0));
        assert_eq!(view.to_pixels(Vec2::new(1100.0, 800.0)), Vec2::new(220.0, 180.0));
    }

    #[test]
    fn test_rect_is_at_least_one_pixel() {
        let view = Viewport::fit(Vec2::new(1100.0, 800.0), 110, 80);
        let (_, _, w, h) = view.rect(Vec2::new(548.0, 10.0), Vec2::new(4.0, 2.0));
        assert_eq!((w, h), (1, 1));
    }

    #[test]
    fn test_scene_draws_paddles_and_ball() {
        let state = GameState::new(&Settings::default());
        let mut buf = PixelBuf::new(220, 160);
        let view = Viewport::fit(state.field, buf.width(), buf.height());
        draw_scene(&mut buf, &view, &state);

        // Left paddle spans field x 10..30, y 350..450 => pixels 2..6, 70..90
        assert_eq!(buf.get(3, 80), Rgb::RED);
        // Right paddle spans field x 1070..1090 => pixels 214..218
        assert_eq!(buf.get(215, 80), Rgb::BLUE);
        // Ball at field (550, 400) => pixel (110, 80)
        assert_eq!(buf.get(110, 80), BALL);
        // Empty field
        assert_eq!(buf.get(60, 120), BACKGROUND);
    }

    #[test]
    fn test_scores_drawn_in_quarters() {
        let mut state = GameState::new(&Settings::default());
        state.score.left = 7;
        let mut buf = PixelBuf::new(220, 160);
        let view = Viewport::fit(state.field, buf.width(), buf.height());
        buf.clear(BACKGROUND);
        draw_scores(&mut buf, &view, &state);

        let lit = |x0: usize, x1: usize| {
            (x0..x1).any(|x| (4..12).any(|y| buf.get(x, y) == SCORE))
        };
        assert!(lit(45, 65), "left score near x=55");
        assert!(lit(155, 175), "right score near x=165");
        assert!(!lit(90, 130), "nothing in the middle");
    }

    #[test]
    fn test_number_width() {
        let mut buf = PixelBuf::new(40, 10);
        draw_number(&mut buf, 20, 0, 10, 1, Rgb::WHITE);
        // "10" is 7 pixels wide, centered on 20 => columns 17..24
        assert_eq!(buf.get(17, 1), Rgb::WHITE);
        assert_eq!(buf.get(16, 1), Rgb::BLACK);
        assert_eq!(buf.get(23, 0), Rgb::WHITE);
    }
}
