//! Color adjustments — white balance (temperature, tint), saturation,
//! and vibrance.

use crate::color::kelvin::{kelvin_to_rgb, REFERENCE_KELVIN};
use crate::color::{clamp01, hsl_to_rgb, rgb_to_hsl};

/// Channels of the black-body approximation can hit zero (blue below
/// ~1900 K); floor them before dividing.
const CHANNEL_FLOOR: f32 = 1e-4;

/// Apply white-balance temperature (2000 K – 50000 K, neutral 6500 K).
///
/// The per-channel correction is the ratio of the 6500 K reference white
/// to the target illuminant, normalized by the mean correction so overall
/// brightness is preserved:
/// ```text
/// corr[c]  = kelvin_to_rgb(6500)[c] / kelvin_to_rgb(target)[c]
/// scale[c] = corr[c] / mean(corr)
/// ```
/// Temperatures above 6500 K warm the image, below cool it — matching
/// the convention of telling the engine what the scene was lit with.
pub fn apply_temperature(rgb: [f32; 3], kelvin: f32) -> [f32; 3] {
    let kelvin = kelvin.clamp(2000.0, 50000.0);
    if (kelvin - REFERENCE_KELVIN).abs() < 1e-3 {
        return rgb;
    }

    let target = kelvin_to_rgb(kelvin);
    let reference = kelvin_to_rgb(REFERENCE_KELVIN);

    let corr = [
        reference[0] / target[0].max(CHANNEL_FLOOR),
        reference[1] / target[1].max(CHANNEL_FLOOR),
        reference[2] / target[2].max(CHANNEL_FLOOR),
    ];
    let mean = (corr[0] + corr[1] + corr[2]) / 3.0;

    [
        clamp01(rgb[0] * corr[0] / mean),
        clamp01(rgb[1] * corr[1] / mean),
        clamp01(rgb[2] * corr[2] / mean),
    ]
}

/// Apply tint (−100 green to +100 magenta) by scaling the green channel:
/// ```text
/// g' = g × (1 − amount/100 × 0.3)
/// ```
pub fn apply_tint(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    [
        rgb[0],
        clamp01(rgb[1] * (1.0 - (amount / 100.0) * 0.3)),
        rgb[2],
    ]
}

/// Apply saturation (−100 to +100) by scaling HSL saturation:
/// ```text
/// s' = s × (1 + amount/100)
/// ```
pub fn apply_saturation(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let (h, s, l) = rgb_to_hsl(rgb);
    hsl_to_rgb(h, clamp01(s * (1.0 + amount / 100.0)), l)
}

/// Apply vibrance (−100 to +100) — saturation weighted inversely by the
/// current saturation, with skin-tone protection.
///
/// ```text
/// protection = 0.5 if hue ∈ [0°, 50°] ∪ [320°, 360°) else 1.0
/// boost      = amount/100 × (1 − s) × protection
/// s'         = s + boost × s
/// ```
/// Muted colors move the most; already-vivid colors and warm skin hues
/// are held back.
pub fn apply_vibrance(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(-100.0, 100.0);
    if amount == 0.0 {
        return rgb;
    }
    let (h, s, l) = rgb_to_hsl(rgb);
    let skin_protection = if h <= 50.0 || h >= 320.0 { 0.5 } else { 1.0 };
    let boost = (amount / 100.0) * (1.0 - s) * skin_protection;
    hsl_to_rgb(h, clamp01(s + boost * s), l)
}
