use std::path::Path;

use image::imageops::FilterType;
use tracing::{info, warn};

use crate::utils::ChannelGrid;

// Load an external grayscale image destined for the fourth channel.
// The image is resampled to the target resolution with Lanczos3 and its
// bytes mapped linearly from 0-255 to [0, 1]. Every failure (missing
// file, decode error) comes back as None so the caller can fall back to
// octave synthesis instead of aborting the whole generation.
pub fn load_mask(path: &Path, width: u32, height: u32) -> Option<ChannelGrid> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(err) => {
            warn!("failed to load grayscale image {}: {err}", path.display());
            return None;
        }
    };

    info!(
        "loaded grayscale image {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    let gray = img
        .resize_exact(width, height, FilterType::Lanczos3)
        .into_luma8();

    let mut grid = vec![vec![0.0f32; width as usize]; height as usize];
    for (x, y, p) in gray.enumerate_pixels() {
        grid[y as usize][x as usize] = p.0[0] as f32 / 255.0;
    }
    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::load_mask;
    use std::path::Path;

    #[test]
    fn missing_file_is_unavailable() {
        assert!(load_mask(Path::new("definitely_not_here.png"), 8, 4).is_none());
    }

    #[test]
    fn loaded_mask_matches_resolution_and_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let mut img = image::GrayImage::new(8, 4);
        for (x, _, p) in img.enumerate_pixels_mut() {
            p.0[0] = (x * 32) as u8;
        }
        img.save(&path).unwrap();

        let grid = load_mask(&path, 8, 4).expect("mask should load");
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].len(), 8);
        for row in &grid {
            for &v in row {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
