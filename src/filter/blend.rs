use image::Rgba;

pub fn max_channel(px: &Rgba<u8>) -> u8 {
    px[0].max(px[1]).max(px[2])
}

/// Fraction of the replacement effect for a pixel whose brightest channel is
/// `max_chan`: 0 at the threshold, 1 at pure white.
///
/// Only meaningful for `max_chan >= threshold`. A threshold of 255 leaves no
/// ramp to interpolate over and always yields 1.
pub fn blend_fraction(max_chan: u8, threshold: u8) -> f64 {
    if threshold == u8::MAX {
        return 1.0;
    }

    let t = (max_chan as f64 - threshold as f64) / (255.0 - threshold as f64);
    t.clamp(0.0, 1.0)
}

/// Rounds and narrows to a channel value. `as` saturates out-of-range floats.
pub(super) fn to_channel(value: f64) -> u8 {
    value.round() as u8
}
