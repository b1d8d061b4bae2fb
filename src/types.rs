// Core value types shared by the ray engine and the window shell.

/// What the window displays: one `0x00RRGGBB` value per pixel, row-major.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// A disk in screen space: obstacles and the emitter marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, r: i32) -> Self {
        Self { x, y, r }
    }

    /// Strictly inside the disk: `dist² < r²`, in f64.
    #[inline]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x as f64;
        let dy = py - self.y as f64;
        let r = self.r as f64;
        dx * dx + dy * dy < r * r
    }
}

/// One ray of the field. `dx`/`dy` are cached cos/sin of `angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub x_start: i32,
    pub y_start: i32,
    pub angle: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Ray {
    pub fn new(x_start: i32, y_start: i32, angle: f64) -> Self {
        let (dy, dx) = angle.sin_cos();
        Self { x_start, y_start, angle, dx, dy }
    }
}
