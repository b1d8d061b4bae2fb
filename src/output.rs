use crate::error::Error;
use crate::types::FrameBuffer;
use image::{Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Unpack a `0x00RRGGBB` frame into an RGB8 image.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    })
}

/// Save the frame as PNG (format picked from the extension).
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb).save(path)?;
    info!("Snapshot saved to {}", path.display());
    Ok(())
}
