// Octave parameters for one output channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelParams {
    pub scale: f64,       // base frequency of the first octave
    pub octaves: usize,   // number of octaves to sum
    pub persistence: f64, // amplitude decay per octave
}

// Post-normalization remap applied to a channel before quantization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCurve {
    // v^0.7: brightens midtones, lifts apparent contrast
    Brighten,
    // sin(v·π)^2: both extremes fold to 0, peak at 0.5
    MidtonePeak,
    // 1 − v
    Invert,
    // pass-through, used for the grayscale fourth channel
    Linear,
}

impl ToneCurve {
    pub fn apply(self, v: f32) -> f32 {
        match self {
            ToneCurve::Brighten => v.powf(0.7),
            ToneCurve::MidtonePeak => (v * std::f32::consts::PI).sin().powi(2),
            ToneCurve::Invert => 1.0 - v,
            ToneCurve::Linear => v,
        }
    }
}

// Full parameter set for the four-channel sphere texture.
// Channel order is R, G, B, then the grayscale "W" channel that rides in
// the alpha slot without meaning transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureParams {
    pub channels: [ChannelParams; 4],
    pub curves: [ToneCurve; 4],
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            channels: [
                ChannelParams {
                    scale: 24.0,
                    octaves: 4,
                    persistence: 0.5,
                },
                ChannelParams {
                    scale: 12.0,
                    octaves: 3,
                    persistence: 0.6,
                },
                ChannelParams {
                    scale: 6.0,
                    octaves: 5,
                    persistence: 0.4,
                },
                ChannelParams {
                    scale: 4.0,
                    octaves: 3,
                    persistence: 0.7,
                },
            ],
            curves: [
                ToneCurve::Brighten,
                ToneCurve::MidtonePeak,
                ToneCurve::Invert,
                ToneCurve::Linear,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TextureParams, ToneCurve};

    #[test]
    fn brighten_fixed_points() {
        assert_eq!(ToneCurve::Brighten.apply(0.0), 0.0);
        assert_eq!(ToneCurve::Brighten.apply(1.0), 1.0);
    }

    #[test]
    fn midtone_peak_fixed_points() {
        assert!(ToneCurve::MidtonePeak.apply(0.0).abs() < 1e-6);
        assert!((ToneCurve::MidtonePeak.apply(0.5) - 1.0).abs() < 1e-6);
        // sin(π) is not exactly zero in floating point
        assert!(ToneCurve::MidtonePeak.apply(1.0).abs() < 1e-6);
    }

    #[test]
    fn invert_fixed_points() {
        assert_eq!(ToneCurve::Invert.apply(0.0), 1.0);
        assert_eq!(ToneCurve::Invert.apply(1.0), 0.0);
    }

    #[test]
    fn default_params_per_channel() {
        let p = TextureParams::default();
        assert_eq!(p.channels[0].scale, 24.0);
        assert_eq!(p.channels[0].octaves, 4);
        assert_eq!(p.channels[2].persistence, 0.4);
        assert_eq!(p.channels[3].scale, 4.0);
        assert_eq!(p.curves[3], ToneCurve::Linear);
    }
}
