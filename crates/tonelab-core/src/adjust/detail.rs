//! Detail extraction operators — the per-pixel halves of clarity and
//! unsharp-mask sharpening. The blurred neighborhood sample comes from
//! [`crate::filter`]; these functions only combine it with the original.

use crate::color::clamp01;

/// Local-contrast ("clarity") boost (−100 to +100).
///
/// ```text
/// out = orig + (orig − blurred) × amount/100
/// ```
/// Positive amounts emphasize local detail, negative amounts smooth it.
pub fn detail_boost(original: [f32; 3], blurred: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return original;
    }
    let k = amount / 100.0;
    [
        clamp01(original[0] + (original[0] - blurred[0]) * k),
        clamp01(original[1] + (original[1] - blurred[1]) * k),
        clamp01(original[2] + (original[2] - blurred[2]) * k),
    ]
}

/// Thresholded unsharp-mask detail (0 to 150).
///
/// Identical detail extraction to [`detail_boost`], but a channel only
/// sharpens where `|orig − blurred|` exceeds `threshold` (normalized
/// units) — flat regions pass through so noise is not amplified.
pub fn sharpen_detail(
    original: [f32; 3],
    blurred: [f32; 3],
    amount: f32,
    threshold: f32,
) -> [f32; 3] {
    let amount = amount.clamp(0.0, 150.0);
    if amount == 0.0 {
        return original;
    }
    let k = amount / 100.0;
    let mut out = original;
    for c in 0..3 {
        let diff = original[c] - blurred[c];
        if diff.abs() > threshold {
            out[c] = clamp01(original[c] + diff * k);
        }
    }
    out
}
