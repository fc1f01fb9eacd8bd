//! Tonelab Core — domain layer for photo editing.
//!
//! This crate contains all color science, adjustment math, LUT operations,
//! spatial filtering, and scope computation. No GPU or framework
//! dependencies; buffers go in, buffers come out.

pub mod adjust;
pub mod color;
pub mod error;
pub mod filter;
pub mod image;
pub mod pipeline;
pub mod scopes;
pub mod transform;

// Re-exports for convenience.
pub use error::CoreError;
pub use image::PixelBuffer;
pub use pipeline::{process, process_tiled, Generation, TileProgress};
pub use transform::evaluate::evaluate_pixel;
pub use transform::lut::ChannelLut;
pub use transform::params::{
    AdjustmentSettings, BasicSettings, ColorSettings, DetailSettings, ToneCurves,
};
