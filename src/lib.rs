//! Sprite background clean-up: turn white backgrounds transparent or gold.

pub mod batch;
pub mod config;
pub mod error;
pub mod filter;

pub use batch::{Job, Outcome, Report};
pub use error::{Error, Result};
pub use filter::{make_transparent, recolor_to_gold, Filter, Gold, Transparent};
