use image::{GrayImage, Luma};
use std::path::Path;
use texture::PerlinNoise;

// Render the raw periodic field at one frequency into a grayscale image
fn save_field(noise: &PerlinNoise, frequency: f64, size: usize, filename: &str) {
    let mut data = vec![vec![0.0f64; size]; size];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for y in 0..size {
        for x in 0..size {
            let sx = x as f64 / size as f64 * frequency;
            let sy = y as f64 / size as f64 * frequency;
            let v = noise.noise2d(sx, sy, Some(frequency), None);
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    let mut img = GrayImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (data[y][x] - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

// The same field tiled twice horizontally; any seam shows up as a
// vertical line in the middle of the strip
fn save_tiled_strip(noise: &PerlinNoise, frequency: f64, size: usize, filename: &str) {
    let mut img = GrayImage::new(2 * size as u32, size as u32);
    for y in 0..size {
        for x in 0..2 * size {
            let sx = (x % size) as f64 / size as f64 * frequency;
            let sy = y as f64 / size as f64 * frequency;
            let v = noise.noise2d(sx, sy, Some(frequency), None);
            let gray = (((v + 1.0) * 0.5).clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 256;
    let noise = PerlinNoise::new(42);

    for freq in [4.0, 12.0, 24.0] {
        save_field(&noise, freq, size, &format!("field_f{}.png", freq as u32));
    }
    save_tiled_strip(&noise, 8.0, size, "field_tiled.png");
}
