// Shared pixel buffer for one ray pass.
// Workers write through `&RayCanvas`; each pixel is one `AtomicU32`, so a
// contended pixel ends up holding one whole color, never a torn value.

use crate::types::FrameBuffer;
use std::sync::atomic::{AtomicU32, Ordering};

pub struct RayCanvas {
    width: usize,
    height: usize,
    pixels: Vec<AtomicU32>, // row-major, index = x + y * width
}

impl RayCanvas {
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        let pixels = (0..width * height).map(|_| AtomicU32::new(background)).collect();
        Self { width, height, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every pixel before a pass.
    pub fn clear(&mut self, background: u32) {
        for p in &mut self.pixels {
            *p.get_mut() = background;
        }
    }

    /// Plain store, no read-modify-write. Panics outside the canvas.
    #[inline]
    pub fn store(&self, x: usize, y: usize, color: u32) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) outside canvas");
        self.pixels[x + y * self.width].store(color, Ordering::Relaxed);
    }

    #[inline]
    pub fn load(&self, x: usize, y: usize) -> u32 {
        self.pixels[x + y * self.width].load(Ordering::Relaxed)
    }

    /// Hand the finished pass to the presentation buffer.
    pub fn copy_into(&self, fb: &mut FrameBuffer) {
        assert!(
            fb.width == self.width && fb.height == self.height,
            "frame buffer {}x{} does not match canvas {}x{}",
            fb.width,
            fb.height,
            self.width,
            self.height
        );
        for (dst, src) in fb.pixels.iter_mut().zip(&self.pixels) {
            *dst = src.load(Ordering::Relaxed);
        }
    }
}
