use std::path::Path;

use image::imageops::FilterType;
use image::{Rgb, RgbImage, imageops};
use palette::{FromColor, Hsl, Srgb};

// Each atlas cell is a 16×16 tile: 14×14 of artwork inside a 1px frame
pub const TILE_SIZE: u32 = 16;
pub const INNER_SIZE: u32 = 14;

const BORDER_GREY: Rgb<u8> = Rgb([128, 128, 128]);
const PLACEHOLDER_GREY: Rgb<u8> = Rgb([200, 200, 200]);

const CONTRAST_FACTOR: f32 = 1.3;
const SATURATION_FACTOR: f32 = 1.4;
const BRIGHTNESS_FACTOR: f32 = 1.1;
const GAMMA: f32 = 0.8;

// Rec. 601 luma, matching the grayscale weighting of the source images
#[inline]
fn luminance(rgb: [u8; 3]) -> f32 {
    (0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32) / 255.0
}

// Contrast, saturation and brightness boost to keep small tiles readable.
// Contrast pivots on the mean luminance of the tile, saturation is scaled
// in HSL, brightness is a plain multiplier.
fn enhance_vibrancy(img: &mut RgbImage) {
    let mut mean = 0.0f32;
    for p in img.pixels() {
        mean += luminance(p.0);
    }
    mean /= (img.width() * img.height()) as f32;

    for p in img.pixels_mut() {
        let c = [0usize, 1, 2].map(|i| {
            let v = p.0[i] as f32 / 255.0;
            (mean + (v - mean) * CONTRAST_FACTOR).clamp(0.0, 1.0)
        });

        let mut hsl = Hsl::from_color(Srgb::new(c[0], c[1], c[2]));
        hsl.saturation = (hsl.saturation * SATURATION_FACTOR).min(1.0);
        let rgb = Srgb::from_color(hsl);

        let out = [rgb.red, rgb.green, rgb.blue]
            .map(|v| (v * BRIGHTNESS_FACTOR).clamp(0.0, 1.0));
        for i in 0..3 {
            p.0[i] = (out[i] * 255.0).round() as u8;
        }
    }
}

// Gamma-lift, then truncate to 5/6/5 bits, the color depth the renderer
// actually displays
fn quantize_rgb565(img: &mut RgbImage) {
    for p in img.pixels_mut() {
        for (i, dropped_bits) in [(0usize, 3u8), (1, 2), (2, 3)] {
            let v = ((p.0[i] as f32 / 255.0).powf(GAMMA) * 255.0).min(255.0) as u8;
            p.0[i] = (v >> dropped_bits) << dropped_bits;
        }
    }
}

fn with_border(inner: &RgbImage) -> RgbImage {
    let mut tile = RgbImage::from_pixel(TILE_SIZE, TILE_SIZE, BORDER_GREY);
    imageops::replace(&mut tile, inner, 1, 1);
    tile
}

// Resize, enhance, quantize and frame one source image into an atlas tile
pub fn process_tile(path: &Path) -> Result<RgbImage, image::ImageError> {
    let img = image::open(path)?;
    let mut inner = img
        .resize_exact(INNER_SIZE, INNER_SIZE, FilterType::Lanczos3)
        .into_rgb8();
    enhance_vibrancy(&mut inner);
    quantize_rgb565(&mut inner);
    Ok(with_border(&inner))
}

// Light-grey filler for atlas slots with no tile assigned
pub fn placeholder_tile() -> RgbImage {
    let inner = RgbImage::from_pixel(INNER_SIZE, INNER_SIZE, PLACEHOLDER_GREY);
    with_border(&inner)
}

#[cfg(test)]
mod tests {
    use super::{INNER_SIZE, TILE_SIZE, placeholder_tile, process_tile};
    use image::{Rgb, RgbImage};

    #[test]
    fn placeholder_has_frame_and_filler() {
        let tile = placeholder_tile();
        assert_eq!(tile.dimensions(), (TILE_SIZE, TILE_SIZE));
        assert_eq!(tile.get_pixel(0, 0).0, [128, 128, 128]);
        assert_eq!(tile.get_pixel(TILE_SIZE - 1, TILE_SIZE - 1).0, [128, 128, 128]);
        assert_eq!(tile.get_pixel(1, 1).0, [200, 200, 200]);
        assert_eq!(tile.get_pixel(TILE_SIZE - 2, TILE_SIZE - 2).0, [200, 200, 200]);
    }

    #[test]
    fn processed_tile_is_framed_and_quantized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(32, 32, Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();

        let tile = process_tile(&path).unwrap();
        assert_eq!(tile.dimensions(), (TILE_SIZE, TILE_SIZE));
        // frame survives untouched
        assert_eq!(tile.get_pixel(0, 5).0, [128, 128, 128]);
        // the artwork stays saturated red and lands on 5/6/5 lattice values
        let inner = tile.get_pixel(INNER_SIZE / 2, INNER_SIZE / 2).0;
        assert!(inner[0] >= 200, "red collapsed to {:?}", inner);
        assert!(inner[1] < 16 && inner[2] < 16, "red tinted to {:?}", inner);
        assert_eq!(inner[0] % 8, 0);
        assert_eq!(inner[1] % 4, 0);
        assert_eq!(inner[2] % 8, 0);
    }

    #[test]
    fn missing_tile_is_an_error() {
        assert!(process_tile(std::path::Path::new("nope.png")).is_err());
    }
}
