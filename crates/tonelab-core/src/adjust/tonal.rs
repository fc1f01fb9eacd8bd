//! Tonal adjustments — exposure, contrast, and the four masked ranges
//! (highlights, shadows, whites, blacks).

use std::f32::consts::FRAC_PI_2;

use crate::color::{clamp01, perceived_brightness};

/// Apply exposure in photographic stops (EV, −5 to +5).
///
/// Each stop doubles or halves linear brightness:
/// ```text
/// out = in × 2^EV
/// ```
/// Values driven above 1.0 pass through the soft-knee `1 − e^(1−v)`
/// before clamping.
///
/// Note: the knee is discontinuous at v = 1 — values just above 1.0
/// collapse toward 0 rather than rolling off toward 1. This matches the
/// established behavior and is pinned by a regression test; do not
/// "fix" it without revisiting every image that depends on it.
pub fn apply_exposure(rgb: [f32; 3], ev: f32) -> [f32; 3] {
    let ev = ev.clamp(-5.0, 5.0);
    if ev == 0.0 {
        return rgb;
    }
    let multiplier = 2.0_f32.powf(ev);
    let mut out = [0.0_f32; 3];
    for c in 0..3 {
        let mut v = rgb[c] * multiplier;
        if v > 1.0 {
            v = 1.0 - (1.0 - v).exp();
        }
        out[c] = clamp01(v);
    }
    out
}

/// Apply contrast (−100 to +100) as an S-curve around the midpoint.
///
/// ```text
/// factor = tan(((amount + 100) / 200 × 0.99 + 0.005) × π/2)
/// out    = (in − 0.5) × factor + 0.5
/// ```
/// The factor sweeps from ~0 (flat gray) through 1 (identity) to ~127
/// (hard threshold at the midpoint). Amount 0 early-returns because the
/// tan form is not bit-exact at 1.0.
pub fn apply_contrast(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let factor = (((amount + 100.0) / 200.0 * 0.99 + 0.005) * FRAC_PI_2).tan();
    [
        clamp01((rgb[0] - 0.5) * factor + 0.5),
        clamp01((rgb[1] - 0.5) * factor + 0.5),
        clamp01((rgb[2] - 0.5) * factor + 0.5),
    ]
}

/// Triangular tonal mask: 1 at `center`, falling linearly to 0 at
/// `center ± width`.
#[inline]
pub fn tonal_mask(luminance: f32, center: f32, width: f32) -> f32 {
    (1.0 - (luminance - center).abs() / width).max(0.0)
}

/// Apply highlight recovery/boost (−100 to +100).
///
/// Multiplicative over a mask centered at luminance 0.85 (width 0.3,
/// strength 0.5).
pub fn apply_highlights(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let mask = tonal_mask(perceived_brightness(rgb), 0.85, 0.3);
    let factor = 1.0 + (amount / 100.0) * mask * 0.5;
    [
        clamp01(rgb[0] * factor),
        clamp01(rgb[1] * factor),
        clamp01(rgb[2] * factor),
    ]
}

/// Apply shadow lift/crush (−100 to +100).
///
/// Additive over a mask centered at luminance 0.15 (width 0.3,
/// strength 0.3).
pub fn apply_shadows(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let mask = tonal_mask(perceived_brightness(rgb), 0.15, 0.3);
    let boost = (amount / 100.0) * mask * 0.3;
    [
        clamp01(rgb[0] + boost),
        clamp01(rgb[1] + boost),
        clamp01(rgb[2] + boost),
    ]
}

/// Apply whites adjustment (−100 to +100) — narrow multiplicative band
/// at the very top of the range (center 0.95, width 0.15, strength 0.3).
pub fn apply_whites(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let mask = tonal_mask(perceived_brightness(rgb), 0.95, 0.15);
    let factor = 1.0 + (amount / 100.0) * mask * 0.3;
    [
        clamp01(rgb[0] * factor),
        clamp01(rgb[1] * factor),
        clamp01(rgb[2] * factor),
    ]
}

/// Apply blacks adjustment (−100 to +100) — narrow additive band at the
/// very bottom of the range (center 0.05, width 0.15, strength 0.15).
pub fn apply_blacks(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let mask = tonal_mask(perceived_brightness(rgb), 0.05, 0.15);
    let boost = (amount / 100.0) * mask * 0.15;
    [
        clamp01(rgb[0] + boost),
        clamp01(rgb[1] + boost),
        clamp01(rgb[2] + boost),
    ]
}
