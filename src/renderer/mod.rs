//! Rendering abstraction layer.
//!
//! *The renderer never touches a window directly.* It writes normalised RGB
//! pixels into any type that implements [`Surface`].
//!
//! * [`FrameBuffer`] is the in-memory surface; the window driver presents it
//!   and tests inspect it.
//! * Line / rectangle / text helpers are default methods, so a back-end only
//!   has to provide `put`, `clear` and its size.

use glam::Vec3;

mod font;
mod framebuffer;
mod overlay;
pub mod software;

pub use font::ADVANCE as GLYPH_ADVANCE;
pub use framebuffer::FrameBuffer;
pub use overlay::{draw_hud, draw_minimap};
pub use software::{ColumnRenderer, HitInfo, cast};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Pack a normalised colour; channels are clamped into `0..=1` first.
#[inline]
pub fn pack_rgb(c: Vec3) -> Rgba {
    let c = c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    ((c.x as u32) << 16) | ((c.y as u32) << 8) | c.z as u32
}

/// Inverse of [`pack_rgb`].
#[inline]
pub fn unpack_rgb(px: Rgba) -> Vec3 {
    Vec3::new(
        ((px >> 16) & 0xFF) as f32,
        ((px >> 8) & 0xFF) as f32,
        (px & 0xFF) as f32,
    ) / 255.0
}

/// Something pixels can be written to.
pub trait Surface {
    /// Logical width in pixels.
    fn width(&self) -> usize;

    /// Logical height in pixels.
    fn height(&self) -> usize;

    /// Fill every pixel with `color`.
    fn clear(&mut self, color: Vec3);

    /// Write one pixel. Out-of-bounds coordinates are silently dropped.
    fn put(&mut self, x: i32, y: i32, color: Vec3);

    /// Integer Bresenham line, endpoints inclusive.
    fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Vec3) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Filled axis-aligned rectangle.
    fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Vec3) {
        for ry in y..y + h as i32 {
            for rx in x..x + w as i32 {
                self.put(rx, ry, color);
            }
        }
    }

    /// Draw `text` with the built-in 3×5 font, top-left corner at `(x, y)`.
    /// Lowercase renders as uppercase; unknown glyphs are blank.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Vec3) {
        let mut pen = x;
        for ch in text.chars() {
            let rows = font::glyph(ch);
            for (gy, bits) in rows.iter().enumerate() {
                for gx in 0..font::GLYPH_W {
                    if bits & (0b100 >> gx) != 0 {
                        self.put(pen + gx as i32, y + gy as i32, color);
                    }
                }
            }
            pen += font::ADVANCE;
        }
    }
}
