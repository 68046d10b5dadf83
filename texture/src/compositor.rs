use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::{debug, info};

use crate::channel::{ChannelParams, TextureParams};
use crate::mask::load_mask;
use crate::perlin::PerlinNoise;
use crate::utils::{ChannelGrid, normalize_channel, quantize};
use crate::PeriodicNoise;

// Sum octaves of noise for one channel over a width×height pixel grid.
// Pixel coordinates are normalized to [0, 1) and scaled by the octave
// frequency; the horizontal period equals that frequency so every octave
// tiles in longitude on its own. Latitude never wraps.
pub fn accumulate_octaves<N: PeriodicNoise>(
    noise: &N,
    params: &ChannelParams,
    width: u32,
    height: u32,
) -> ChannelGrid {
    let w = width as usize;
    let h = height as usize;
    let mut grid = vec![vec![0.0f32; w]; h];

    for octave in 0..params.octaves {
        let frequency = params.scale * 2.0_f64.powi(octave as i32);
        let amplitude = params.persistence.powi(octave as i32);

        for (y, row) in grid.iter_mut().enumerate() {
            let sample_y = y as f64 / h as f64 * frequency;
            for (x, cell) in row.iter_mut().enumerate() {
                let sample_x = x as f64 / w as f64 * frequency;
                let v = noise.sample(sample_x, sample_y, Some(frequency), None);
                *cell += (v * amplitude) as f32;
            }
        }
    }

    grid
}

// One fully synthesized channel: octave sum, then min/max normalization
pub fn synthesize_channel<N: PeriodicNoise>(
    noise: &N,
    params: &ChannelParams,
    width: u32,
    height: u32,
) -> ChannelGrid {
    let mut grid = accumulate_octaves(noise, params, width, height);
    normalize_channel(&mut grid);
    grid
}

// Compose the four channels into the final RGBA raster.
// An externally supplied mask grid (already in [0, 1]) replaces the
// synthesis of the fourth channel; the mask gets no tone curve.
// The stored image is flipped vertically: row 0 of the file is the last
// generated row. That flip is part of the output contract, not clean-up.
pub fn generate_sphere_texture<N: PeriodicNoise>(
    noise: &N,
    params: &TextureParams,
    width: u32,
    height: u32,
    mask: Option<ChannelGrid>,
) -> RgbaImage {
    let h = height as usize;
    let mut channels: Vec<ChannelGrid> = Vec::with_capacity(4);

    for c in 0..3 {
        debug!(channel = c, "synthesizing channel");
        let mut grid = synthesize_channel(noise, &params.channels[c], width, height);
        for row in grid.iter_mut() {
            for v in row.iter_mut() {
                *v = params.curves[c].apply(*v);
            }
        }
        channels.push(grid);
    }

    match mask {
        Some(grid) => {
            info!("using supplied grayscale image for the fourth channel");
            channels.push(grid);
        }
        None => {
            info!("synthesizing the fourth channel");
            let mut grid = synthesize_channel(noise, &params.channels[3], width, height);
            for row in grid.iter_mut() {
                for v in row.iter_mut() {
                    *v = params.curves[3].apply(*v);
                }
            }
            channels.push(grid);
        }
    }

    let mut img = RgbaImage::new(width, height);
    for y in 0..h {
        let src = h - 1 - y; // vertical flip
        for x in 0..width as usize {
            img.put_pixel(
                x as u32,
                y as u32,
                Rgba([
                    quantize(channels[0][src][x]),
                    quantize(channels[1][src][x]),
                    quantize(channels[2][src][x]),
                    quantize(channels[3][src][x]),
                ]),
            );
        }
    }
    img
}

// One-shot entry point: seed in, RGBA raster out.
// A mask path that fails to load is only a warning; the fourth channel
// falls back to its own octave synthesis, so output for a broken path is
// identical to output for no path at all.
pub fn generate_from_seed(
    seed: u64,
    params: &TextureParams,
    width: u32,
    height: u32,
    mask_path: Option<&Path>,
) -> RgbaImage {
    let noise = PerlinNoise::new(seed);
    let mask = mask_path.and_then(|p| load_mask(p, width, height));
    generate_sphere_texture(&noise, params, width, height, mask)
}

#[cfg(test)]
mod tests {
    use super::{accumulate_octaves, generate_sphere_texture, synthesize_channel};
    use crate::channel::{ChannelParams, TextureParams};
    use crate::perlin::PerlinNoise;

    const PARAMS: ChannelParams = ChannelParams {
        scale: 4.0,
        octaves: 3,
        persistence: 0.5,
    };

    #[test]
    fn accumulate_dimensions() {
        let noise = PerlinNoise::new(42);
        let grid = accumulate_octaves(&noise, &PARAMS, 16, 8);
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0].len(), 16);
    }

    #[test]
    fn synthesized_channel_is_normalized() {
        let noise = PerlinNoise::new(42);
        let grid = synthesize_channel(&noise, &PARAMS, 32, 16);
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for row in &grid {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
            }
        }
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn mask_grid_passes_through_unscaled() {
        let noise = PerlinNoise::new(42);
        let params = TextureParams::default();
        let mask = vec![vec![0.25f32; 8]; 4];
        let img = generate_sphere_texture(&noise, &params, 8, 4, Some(mask));
        for p in img.pixels() {
            // 0.25 × 255 rounds to 64; no normalization, no curve
            assert_eq!(p.0[3], 64);
        }
    }

    #[test]
    fn texture_dimensions_and_determinism() {
        let params = TextureParams::default();
        let a = generate_sphere_texture(&PerlinNoise::new(7), &params, 8, 4, None);
        let b = generate_sphere_texture(&PerlinNoise::new(7), &params, 8, 4, None);
        assert_eq!(a.dimensions(), (8, 4));
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
