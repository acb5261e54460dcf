use std::ops::{Add, Sub};

use image::{Rgba, RgbaImage};

use crate::config::OutlineStyle;
use crate::model::PackRect;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Integer point used by the line rasterizer. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean length, truncated.
    pub fn length(self) -> i32 {
        let (x, y) = (self.x as f64, self.y as f64);
        (x * x + y * y).sqrt() as i32
    }

    /// Scales each component, truncating toward zero.
    pub fn scale(self, t: f64) -> Self {
        Self::new((self.x as f64 * t) as i32, (self.y as f64 * t) as i32)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

const THICK_STAMP: [Vec2; 9] = [
    Vec2::new(-1, -1),
    Vec2::new(0, -1),
    Vec2::new(1, -1),
    Vec2::new(-1, 0),
    Vec2::new(0, 0),
    Vec2::new(1, 0),
    Vec2::new(-1, 1),
    Vec2::new(0, 1),
    Vec2::new(1, 1),
];

const THIN_STAMP: [Vec2; 1] = [Vec2::new(0, 0)];

/// RGBA8 drawing surface, opaque white until drawn on.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Pixel at `p`, or `None` outside the canvas.
    pub fn pixel(&self, p: Vec2) -> Option<Rgba<u8>> {
        self.index(p).map(|(x, y)| *self.pixels.get_pixel(x, y))
    }

    fn index(&self, p: Vec2) -> Option<(u32, u32)> {
        let x = u32::try_from(p.x).ok()?;
        let y = u32::try_from(p.y).ok()?;
        (x < self.pixels.width() && y < self.pixels.height()).then_some((x, y))
    }

    /// Paints the stamp for `style` centred on `p` in opaque black.
    /// Pixels outside the canvas are skipped.
    pub fn draw_point(&mut self, p: Vec2, style: OutlineStyle) {
        let stamp: &[Vec2] = match style {
            OutlineStyle::Thick => &THICK_STAMP,
            OutlineStyle::Thin => &THIN_STAMP,
        };
        for &off in stamp {
            if let Some((x, y)) = self.index(p + off) {
                self.pixels.put_pixel(x, y, BLACK);
            }
        }
    }

    /// Walks from `from` toward `to` in `length(to - from)` fixed steps. `to` itself is not drawn.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, style: OutlineStyle) {
        let v = to - from;
        let steps = v.length();
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            self.draw_point(from + v.scale(t), style);
        }
    }

    /// Draws the four edges of `x, y, w, h` with corners at `x + w` / `y + h`.
    pub fn draw_rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, style: OutlineStyle) {
        let top_left = Vec2::new(x, y);
        let top_right = Vec2::new(x + w, y);
        let bot_left = Vec2::new(x, y + h);
        let bot_right = Vec2::new(x + w, y + h);

        self.draw_line(top_left, top_right, style);
        self.draw_line(top_left, bot_left, style);
        self.draw_line(bot_left, bot_right, style);
        self.draw_line(top_right, bot_right, style);
    }

    /// Count of pixels that are not opaque white.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.pixels().filter(|p| **p != WHITE).count()
    }
}

/// Fresh canvas with the outline of every packed rectangle. Unpacked rectangles are skipped.
pub fn render(width: u32, height: u32, rects: &[PackRect], style: OutlineStyle) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    for r in rects.iter().filter(|r| r.was_packed) {
        canvas.draw_rect_outline(r.x as i32, r.y as i32, r.w as i32, r.h as i32, style);
    }
    canvas
}
