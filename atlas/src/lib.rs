// atlas holds the tile pipeline and the packing state for the atlas tool
pub mod compose;
pub mod layout;
pub mod tile;

pub use compose::{ATLAS_SIZE, AtlasError, GRID_CELLS, build_atlas, discover_tiles};
pub use layout::AtlasSelection;
pub use tile::{INNER_SIZE, TILE_SIZE, placeholder_tile, process_tile};
