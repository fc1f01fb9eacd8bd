//! Spatial filters — separable Gaussian blur and the unsharp-mask family
//! built on it (sharpening and local contrast).

pub mod blur;
pub mod sharpen;

pub use blur::gaussian_blur;
pub use sharpen::{local_contrast, unsharp_mask};
