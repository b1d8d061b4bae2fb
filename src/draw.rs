// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the ray fan frame by frame.
// 2) White circle outlines for the emitter and every obstacle.

use crate::error::Error;
use crate::types::{Circle, FrameBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the viewport size, capped at `target_fps`.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as i32, y as i32))
    }

    /// Visual: while held, the emitter (and its fan) follows the cursor.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    // S writes the current frame to a PNG
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels and circle outlines ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// One-pixel circle outline using the midpoint (Bresenham) algorithm.
/// Visual: a thin ring; parts that fall off-screen are clipped.
pub fn draw_circle(fb: &mut FrameBuffer, circle: &Circle, color: u32) {
    let (cx, cy) = (circle.x, circle.y);
    let mut x = circle.r;
    let mut y = 0;
    let mut decision = 0;

    while x >= y {
        // eight octants
        for (ox, oy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            put_pixel(fb, cx + ox, cy + oy, color);
        }

        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        }
        if decision > 0 {
            x -= 1;
            decision -= 2 * x + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(fb: &FrameBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for (i, &p) in fb.pixels.iter().enumerate() {
            if p != 0 {
                out.push(((i % fb.width) as i32, (i / fb.width) as i32));
            }
        }
        out
    }

    #[test]
    fn test_circle_hits_axis_extremes() {
        let mut fb = FrameBuffer::new(40, 40);
        draw_circle(&mut fb, &Circle::new(20, 20, 10), 0xFFFFFF);
        let pts = lit(&fb);
        for p in [(30, 20), (10, 20), (20, 30), (20, 10)] {
            assert!(pts.contains(&p), "missing {p:?}");
        }
        assert!(!pts.contains(&(20, 20)));
    }

    #[test]
    fn test_circle_points_stay_near_radius() {
        let mut fb = FrameBuffer::new(100, 100);
        draw_circle(&mut fb, &Circle::new(50, 50, 30), 0xFFFFFF);
        for (x, y) in lit(&fb) {
            let d = (((x - 50).pow(2) + (y - 50).pow(2)) as f64).sqrt();
            assert!((d - 30.0).abs() < 1.5, "({x},{y}) at distance {d}");
        }
    }

    #[test]
    fn test_circle_is_clipped_at_edges() {
        let mut fb = FrameBuffer::new(20, 20);
        draw_circle(&mut fb, &Circle::new(0, 0, 8), 0xFFFFFF);
        let pts = lit(&fb);
        assert!(pts.contains(&(8, 0)));
        assert!(pts.contains(&(0, 8)));
        assert!(pts.iter().all(|&(x, y)| x >= 0 && y >= 0));
    }

    #[test]
    fn test_zero_radius_is_single_pixel() {
        let mut fb = FrameBuffer::new(5, 5);
        draw_circle(&mut fb, &Circle::new(2, 2, 0), 0xFFFFFF);
        assert_eq!(lit(&fb), vec![(2, 2)]);
    }
}
