//! Separable Gaussian blur.
//!
//! Kernel size is `ceil(radius × 3) × 2 + 1` with sigma `radius / 3`;
//! weights `exp(−x² / 2σ²)` normalized to sum 1. Two passes (horizontal
//! then vertical) over a temporary float buffer. Boundary policy is
//! clamp-to-edge: sample indices clamp into `[0, dimension − 1]`, never
//! wrap or zero-pad, so a uniform image blurs to itself.

use crate::color::{denormalize, normalize};
use crate::image::PixelBuffer;

/// Build the normalized 1D Gaussian kernel for `radius`.
fn gaussian_kernel(radius: f32) -> Vec<f32> {
    let half = (radius * 3.0).ceil() as i64;
    let sigma = radius / 3.0;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut weights: Vec<f32> = (-half..=half)
        .map(|x| {
            let x = x as f32;
            (-(x * x) / two_sigma_sq).exp()
        })
        .collect();

    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Blur a buffer's RGB channels into normalized float planes.
///
/// The result has one `[r, g, b]` entry per pixel, row-major — the form
/// the unsharp-mask family consumes directly.
pub(crate) fn blur_planes(buffer: &PixelBuffer, radius: f32) -> Vec<[f32; 3]> {
    let width = buffer.width as i64;
    let height = buffer.height as i64;
    let count = buffer.pixel_count();

    let mut planes: Vec<[f32; 3]> = Vec::with_capacity(count);
    for px in buffer.data.chunks_exact(4) {
        planes.push([normalize(px[0]), normalize(px[1]), normalize(px[2])]);
    }

    if radius <= 0.0 {
        return planes;
    }

    let kernel = gaussian_kernel(radius);
    let half = (kernel.len() / 2) as i64;

    // Horizontal pass
    let mut tmp = vec![[0.0_f32; 3]; count];
    for y in 0..height {
        let row = (y * width) as usize;
        for x in 0..width {
            let mut acc = [0.0_f32; 3];
            for (k, w) in kernel.iter().enumerate() {
                let sx = (x + k as i64 - half).clamp(0, width - 1) as usize;
                let src = planes[row + sx];
                acc[0] += src[0] * w;
                acc[1] += src[1] * w;
                acc[2] += src[2] * w;
            }
            tmp[row + x as usize] = acc;
        }
    }

    // Vertical pass
    let mut out = vec![[0.0_f32; 3]; count];
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0_f32; 3];
            for (k, w) in kernel.iter().enumerate() {
                let sy = (y + k as i64 - half).clamp(0, height - 1) as usize;
                let src = tmp[sy * width as usize + x as usize];
                acc[0] += src[0] * w;
                acc[1] += src[1] * w;
                acc[2] += src[2] * w;
            }
            out[(y * width) as usize + x as usize] = acc;
        }
    }

    out
}

/// Gaussian-blur a buffer, returning a new buffer. Alpha is copied
/// through unchanged; `radius <= 0` returns a plain copy.
pub fn gaussian_blur(buffer: &PixelBuffer, radius: f32) -> PixelBuffer {
    if radius <= 0.0 {
        return buffer.clone();
    }
    let planes = blur_planes(buffer, radius);
    let mut out = buffer.clone();
    for (px, plane) in out.data.chunks_exact_mut(4).zip(planes) {
        px[0] = denormalize(plane[0]);
        px[1] = denormalize(plane[1]);
        px[2] = denormalize(plane[2]);
    }
    out
}
