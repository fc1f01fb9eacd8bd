//! Error types for the numeric core.
//!
//! All numeric operators are total — out-of-range amounts are clamped,
//! never rejected — so the only errors here are precondition violations
//! on the inputs a caller hands us. They fail fast; nothing is retried.

use thiserror::Error;

/// Precondition violations on buffers and settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Pixel data length does not match `width × height × 4`.
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Width or height is zero.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A tone curve was declared with too few control points to evaluate.
    #[error("tone curve for {channel} has {points} control point(s); need 0 or at least 2")]
    InvalidCurve {
        channel: &'static str,
        points: usize,
    },
}
