mod blend;
mod gold;
mod transparent;

pub use blend::{blend_fraction, max_channel};
pub use gold::{recolor_to_gold, Gold};
pub use transparent::{make_transparent, Transparent};

use image::{Rgba, RgbaImage};

/// A per-pixel colour transform.
///
/// Implementations only look at the pixel itself and its position, so the
/// output of one pixel never depends on another.
pub trait Filter {
    fn transform_pixel(&self, px: Rgba<u8>, x: u32, y: u32) -> Rgba<u8>;

    /// Produces a fresh buffer with the same dimensions as `buffer`.
    fn transform_buffer(&self, buffer: &RgbaImage) -> RgbaImage {
        RgbaImage::from_fn(buffer.width(), buffer.height(), |x, y| {
            self.transform_pixel(*buffer.get_pixel(x, y), x, y)
        })
    }
}
