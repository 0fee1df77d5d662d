use crate::{
    batch::Job,
    filter::{Gold, Transparent},
};

/// Any pixel whose brightest channel reaches this is treated as background.
pub const WHITE_THRESHOLD: u8 = 250;

/// Saturated yolk gold.
pub const GOLD_BASE: [u8; 3] = [255, 218, 90];

pub const SHIMMER_SCALE: f64 = 0.12;
pub const SHIMMER_FREQ: f64 = 0.04;

/// Fade pixels between the threshold and pure white instead of a hard cut.
pub const SMOOTH_EDGES: bool = true;

/// Strips the white background off the raw sprites into the game directory.
pub fn transparency_jobs() -> Vec<Job> {
    vec![
        Job::new("raw-pics/eggs.png", "eggs.png", Transparent::default()),
        Job::new("raw-pics/chickens.png", "chickens.png", Transparent::default()),
    ]
}

/// Recolours the sprite backgrounds in place.
pub fn gold_jobs() -> Vec<Job> {
    vec![
        Job::new("eggs.png", "eggs.png", Gold::default()),
        Job::new("chickens.png", "chickens.png", Gold::default()),
    ]
}
