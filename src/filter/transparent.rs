use image::{Rgba, RgbaImage};

use super::{
    blend::{blend_fraction, max_channel, to_channel},
    Filter,
};
use crate::config::{SMOOTH_EDGES, WHITE_THRESHOLD};

/// Fades white and near-white pixels to transparency.
#[derive(Debug, Clone, Copy)]
pub struct Transparent {
    threshold: u8,
    smooth: bool,
}

impl Transparent {
    pub fn new(threshold: u8, smooth: bool) -> Self {
        Self { threshold, smooth }
    }
}

impl Default for Transparent {
    fn default() -> Self {
        Self::new(WHITE_THRESHOLD, SMOOTH_EDGES)
    }
}

impl Filter for Transparent {
    fn transform_pixel(&self, px: Rgba<u8>, _x: u32, _y: u32) -> Rgba<u8> {
        let max_chan = max_channel(&px);
        if max_chan < self.threshold {
            return px;
        }

        let [r, g, b, a] = px.0;

        if self.smooth {
            let t = blend_fraction(max_chan, self.threshold);
            return Rgba([r, g, b, to_channel(a as f64 * (1.0 - t))]);
        }

        // hard cut needs every channel past the threshold, not just the brightest
        if r >= self.threshold && g >= self.threshold && b >= self.threshold {
            Rgba([r, g, b, 0])
        } else {
            px
        }
    }
}

pub fn make_transparent(buffer: &RgbaImage, threshold: u8, smooth: bool) -> RgbaImage {
    Transparent::new(threshold, smooth).transform_buffer(buffer)
}
