//! Line-level text processing: noise rejection and normalization.

pub mod noise;
pub mod normalize;

pub use noise::{NoiseFilter, NoiseReason, StopwordSet};
pub use normalize::LineNormalizer;
