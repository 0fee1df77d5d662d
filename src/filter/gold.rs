use image::{Rgb, Rgba, RgbaImage};

use super::{
    blend::{blend_fraction, max_channel, to_channel},
    Filter,
};
use crate::config::{GOLD_BASE, SHIMMER_FREQ, SHIMMER_SCALE, SMOOTH_EDGES, WHITE_THRESHOLD};

/// Recolours white and near-white pixels to a shimmering gold.
///
/// The gold is modulated by `1 + scale * sin(x * freq) * sin(y * freq)` so a
/// large flat background doesn't come out as a single solid colour. Alpha is
/// always preserved.
#[derive(Debug, Clone, Copy)]
pub struct Gold {
    threshold: u8,
    base: Rgb<u8>,
    shimmer_scale: f64,
    shimmer_freq: f64,
    smooth: bool,
}

impl Gold {
    pub fn new(
        threshold: u8,
        base: Rgb<u8>,
        shimmer_scale: f64,
        shimmer_freq: f64,
        smooth: bool,
    ) -> Self {
        Self {
            threshold,
            base,
            shimmer_scale,
            shimmer_freq,
            smooth,
        }
    }

    pub fn shimmer(&self, x: u32, y: u32) -> f64 {
        1.0 + self.shimmer_scale
            * (x as f64 * self.shimmer_freq).sin()
            * (y as f64 * self.shimmer_freq).sin()
    }

    /// Gold colour at `(x, y)`, capped at 255 but not floored at 0.
    ///
    /// A shimmer scale above 1 can push the multiplier negative. The values
    /// are kept as-is here and only saturate when narrowed to a channel.
    pub fn shimmered(&self, x: u32, y: u32) -> [f64; 3] {
        let shimmer = self.shimmer(x, y);
        self.base
            .0
            .map(|c| (c as f64 * shimmer).round().min(255.0))
    }
}

impl Default for Gold {
    fn default() -> Self {
        Self::new(
            WHITE_THRESHOLD,
            Rgb(GOLD_BASE),
            SHIMMER_SCALE,
            SHIMMER_FREQ,
            SMOOTH_EDGES,
        )
    }
}

impl Filter for Gold {
    fn transform_pixel(&self, px: Rgba<u8>, x: u32, y: u32) -> Rgba<u8> {
        let max_chan = max_channel(&px);
        if max_chan < self.threshold {
            return px;
        }

        let gold = self.shimmered(x, y);
        let a = px[3];

        if !self.smooth {
            return Rgba([
                to_channel(gold[0]),
                to_channel(gold[1]),
                to_channel(gold[2]),
                a,
            ]);
        }

        let t = blend_fraction(max_chan, self.threshold);
        let mix = |orig: u8, target: f64| to_channel(orig as f64 * (1.0 - t) + target * t);

        Rgba([
            mix(px[0], gold[0]),
            mix(px[1], gold[1]),
            mix(px[2], gold[2]),
            a,
        ])
    }
}

pub fn recolor_to_gold(
    buffer: &RgbaImage,
    threshold: u8,
    gold_base: Rgb<u8>,
    shimmer_scale: f64,
    shimmer_freq: f64,
    smooth: bool,
) -> RgbaImage {
    Gold::new(threshold, gold_base, shimmer_scale, shimmer_freq, smooth).transform_buffer(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const BASE: Rgb<u8> = Rgb([255, 218, 90]);

    #[test]
    fn white_at_origin_becomes_base_gold() {
        let filter = Gold::new(250, BASE, 0.12, 0.04, false);
        assert_eq!(filter.shimmer(0, 0), 1.0);
        assert_eq!(
            filter.transform_pixel(Rgba([255, 255, 255, 255]), 0, 0),
            Rgba([255, 218, 90, 255])
        );
    }

    #[test]
    fn shimmer_is_flat_along_both_axes() {
        let filter = Gold::new(250, BASE, 0.12, 0.04, false);
        assert_eq!(filter.shimmer(0, 123), 1.0);
        assert_eq!(filter.shimmer(77, 0), 1.0);
        assert_ne!(filter.shimmer(30, 30), 1.0);
    }

    #[test]
    fn shimmered_gold_is_capped_at_255() {
        // sin(pi/2)^2 = 1, so the multiplier peaks at 1.5
        let freq = std::f64::consts::FRAC_PI_2;
        let filter = Gold::new(250, BASE, 0.5, freq, false);
        let gold = filter.shimmered(1, 1);
        assert_eq!(gold, [255.0, 255.0, 135.0]);
    }

    #[test]
    fn negative_shimmer_is_not_floored_until_narrowed() {
        // sin(pi/2) * sin(3pi/2) = -1, multiplier = 1 - 2 = -1
        let freq = std::f64::consts::FRAC_PI_2;
        let filter = Gold::new(250, BASE, 2.0, freq, false);
        let gold = filter.shimmered(1, 3);
        assert_eq!(gold, [-255.0, -218.0, -90.0]);
        assert_eq!(
            filter.transform_pixel(Rgba([255, 255, 255, 40]), 1, 3),
            Rgba([0, 0, 0, 40])
        );
    }

    #[test]
    fn smooth_blends_towards_gold() {
        let filter = Gold::new(250, BASE, 0.12, 0.04, true);
        // t = 0 at the threshold, so the pixel is untouched
        let edge = Rgba([250, 250, 250, 10]);
        assert_eq!(filter.transform_pixel(edge, 0, 0), edge);
        // t = 1 at pure white
        assert_eq!(
            filter.transform_pixel(Rgba([255, 255, 255, 10]), 0, 0),
            Rgba([255, 218, 90, 10])
        );
        // t = 0.4: 250 * 0.6 + 90 * 0.4 = 186
        assert_eq!(
            filter.transform_pixel(Rgba([252, 250, 250, 10]), 0, 0),
            Rgba([253, 237, 186, 10])
        );
    }

    #[test]
    fn max_threshold_recolours_only_pure_white() {
        let filter = Gold::new(255, BASE, 0.12, 0.04, true);
        assert_eq!(
            filter.transform_pixel(Rgba([255, 255, 255, 200]), 0, 9),
            Rgba([255, 218, 90, 200])
        );
        let grey = Rgba([254, 254, 254, 200]);
        assert_eq!(filter.transform_pixel(grey, 0, 9), grey);
    }

    #[test]
    fn alpha_and_dimensions_are_preserved() {
        let mut rng = StdRng::seed_from_u64(0x901d);
        let input = RgbaImage::from_fn(41, 17, |_, _| {
            Rgba([
                rng.random_range(200..=255),
                rng.random_range(200..=255),
                rng.random_range(200..=255),
                rng.random(),
            ])
        });

        for smooth in [true, false] {
            let output = recolor_to_gold(&input, 250, BASE, 0.12, 0.04, smooth);
            assert_eq!(output.dimensions(), input.dimensions());
            for (src, dst) in input.pixels().zip(output.pixels()) {
                assert_eq!(src[3], dst[3]);
                if max_channel(src) < 250 {
                    assert_eq!(src, dst);
                }
            }
        }
    }

    #[test]
    fn dark_regions_are_fixed_points() {
        let input = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8 * 20, y as u8 * 20, 0, 0]));
        let filter = Gold::default();
        let once = filter.transform_buffer(&input);
        let twice = filter.transform_buffer(&once);
        assert_eq!(once, input);
        assert_eq!(twice, once);
    }
}
