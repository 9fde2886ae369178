use glam::Vec3;

use crate::renderer::{Rgba, Surface, pack_rgb};

/// CPU frame-buffer in **0x00RRGGBB**, row-major, ready for
/// `minifb::Window::update_with_buffer`.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    /// (Re)allocate for a new resolution; contents become black.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels.clear();
            self.pixels.resize(width * height, 0);
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// How many pixels hold exactly `px`.
    pub fn count(&self, px: Rgba) -> usize {
        self.pixels.iter().filter(|&&p| p == px).count()
    }
}

impl Surface for FrameBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self, color: Vec3) {
        self.pixels.fill(pack_rgb(color));
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Vec3) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = pack_rgb(color);
    }
}
