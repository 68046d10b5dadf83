use std::fs;
use std::path::{Path, PathBuf};

use image::{RgbImage, imageops};
use thiserror::Error;
use tracing::warn;

use crate::tile::{TILE_SIZE, placeholder_tile, process_tile};

// Fixed 16×16 grid of 16px cells: 256 slots, 256×256 pixels
pub const GRID_CELLS: u32 = 16;
pub const ATLAS_SIZE: u32 = GRID_CELLS * TILE_SIZE;

const TILE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("tile folder {0} not found")]
    MissingFolder(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Collect every image file in the tile folder, case-insensitive on the
// extension, sorted for a stable default order
pub fn discover_tiles(dir: &Path) -> Result<Vec<PathBuf>, AtlasError> {
    if !dir.is_dir() {
        return Err(AtlasError::MissingFolder(dir.to_path_buf()));
    }

    let mut tiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if let Some(ext) = ext {
            if TILE_EXTENSIONS.contains(&ext.as_str()) {
                tiles.push(path);
            }
        }
    }
    tiles.sort();
    Ok(tiles)
}

// Pack processed tiles row-major into the fixed grid.
// Slots past the end of the list get the placeholder; a tile that fails
// to decode is logged and skipped rather than sinking the whole atlas.
pub fn build_atlas(paths: &[PathBuf]) -> RgbImage {
    let slots = (GRID_CELLS * GRID_CELLS) as usize;

    let mut processed = Vec::new();
    for path in paths.iter().take(slots) {
        match process_tile(path) {
            Ok(tile) => processed.push(tile),
            Err(err) => warn!("skipping tile {}: {err}", path.display()),
        }
    }

    let filler = placeholder_tile();
    let mut atlas = RgbImage::new(ATLAS_SIZE, ATLAS_SIZE);
    for i in 0..slots {
        let x = (i as u32 % GRID_CELLS) * TILE_SIZE;
        let y = (i as u32 / GRID_CELLS) * TILE_SIZE;
        let tile = processed.get(i).unwrap_or(&filler);
        imageops::replace(&mut atlas, tile, x as i64, y as i64);
    }
    atlas
}
