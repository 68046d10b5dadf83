use std::path::{Path, PathBuf};

use image::{GrayImage, ImageResult, RgbImage, RgbaImage};
use tracing::info;

const CHANNEL_NAMES: [&str; 4] = ["red", "green", "blue", "gray"];

// Write one inspection raster per channel next to the main texture.
// The color channels are isolated into their own RGB plane (everything
// else black); the fourth channel is written as a plain grayscale image.
pub fn save_channel_previews(texture: &RgbaImage, dir: &Path) -> ImageResult<Vec<PathBuf>> {
    let (w, h) = texture.dimensions();
    let mut written = Vec::with_capacity(4);

    for c in 0..3 {
        let mut img = RgbImage::new(w, h);
        for (x, y, p) in texture.enumerate_pixels() {
            img.get_pixel_mut(x, y).0[c] = p.0[c];
        }
        let path = dir.join(format!("channel_{}_preview.png", CHANNEL_NAMES[c]));
        img.save(&path)?;
        info!("saved {}", path.display());
        written.push(path);
    }

    let mut gray = GrayImage::new(w, h);
    for (x, y, p) in texture.enumerate_pixels() {
        gray.get_pixel_mut(x, y).0[0] = p.0[3];
    }
    let path = dir.join(format!("channel_{}_preview.png", CHANNEL_NAMES[3]));
    gray.save(&path)?;
    info!("saved {}", path.display());
    written.push(path);

    Ok(written)
}
