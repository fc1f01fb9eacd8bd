//! Adjustment settings, per-pixel chain evaluation, and the LUT fast path.

pub mod evaluate;
pub mod lut;
pub mod params;

pub use evaluate::evaluate_pixel;
pub use lut::ChannelLut;
pub use params::AdjustmentSettings;
