// Generates a small equirectangular sphere texture with the default
// channel parameters and writes the per-channel inspection previews.

use std::path::Path;
use texture::{TextureParams, generate_from_seed, save_channel_previews};

fn main() {
    let seed = 42;
    let height = 128;
    let width = 2 * height; // equirectangular: longitude spans twice latitude

    let params = TextureParams::default();
    let tex = generate_from_seed(seed, &params, width, height, None);

    tex.save("sphere_demo.png").unwrap();
    println!("Saved sphere_demo.png ({}x{}, seed {})", width, height, seed);

    save_channel_previews(&tex, Path::new(".")).unwrap();
}
