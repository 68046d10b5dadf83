// texture holds the noise kernel and the channel compositing pipeline
pub mod channel;
pub mod compositor;
pub mod mask;
pub mod perlin;
pub mod preview;
pub mod utils;

pub use channel::{ChannelParams, TextureParams, ToneCurve};
pub use compositor::{
    accumulate_octaves, generate_from_seed, generate_sphere_texture, synthesize_channel,
};
pub use mask::load_mask;
pub use perlin::PerlinNoise;
pub use preview::save_channel_previews;
pub use utils::{ChannelGrid, normalize_channel, quantize};

// noise source that can be sampled with optional per-axis wraparound
// An axis with Some(period) tiles seamlessly with that period, which is
// what the longitude axis of an equirectangular texture needs.
// Latitude never wraps, so its period stays None.
pub trait PeriodicNoise {
    // Sample noise at (x, y), wrapping each axis that carries a period
    fn sample(&self, x: f64, y: f64, period_x: Option<f64>, period_y: Option<f64>) -> f64;
}
