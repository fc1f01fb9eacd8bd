//! Color science — conversions, transfer functions, and small numeric
//! utilities shared by every adjustment operator.
//!
//! All functions are pure and total: inputs outside the declared domain
//! are clamped, never rejected. RGB triplets are `[f32; 3]` in [0, 1];
//! hue is in degrees [0, 360).

pub mod cie;
pub mod hsl;
pub mod kelvin;
pub mod transfer;

pub use cie::{delta_e, lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
pub use hsl::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use kelvin::kelvin_to_rgb;
pub use transfer::{apply_gamma, remove_gamma};

/// Rec. 709 luminance weights.
pub const LUMA_REC709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Clamp a value to the unit interval.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Componentwise linear interpolation of two RGB triplets.
#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
    ]
}

/// Byte channel to normalized [0, 1].
#[inline]
pub fn normalize(v: u8) -> f32 {
    v as f32 / 255.0
}

/// Normalized [0, 1] channel to byte, with clamping and rounding.
#[inline]
pub fn denormalize(v: f32) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}

/// Relative luminance per ITU-R BT.709, computed on linearized RGB.
///
/// The input is gamma-encoded sRGB; each channel is linearized before the
/// weighted sum, which makes this the photometrically correct (and slower)
/// luminance.
pub fn luminance(rgb: [f32; 3]) -> f32 {
    let r = remove_gamma(rgb[0]);
    let g = remove_gamma(rgb[1]);
    let b = remove_gamma(rgb[2]);
    LUMA_REC709[0] * r + LUMA_REC709[1] * g + LUMA_REC709[2] * b
}

/// Fast perceptual brightness approximation.
///
/// `sqrt(0.299r² + 0.587g² + 0.114b²)` — less accurate than linearized
/// BT.709 luminance, used where per-pixel speed matters more than
/// correctness (tonal masks, histograms of large buffers).
#[inline]
pub fn perceived_brightness(rgb: [f32; 3]) -> f32 {
    (0.299 * rgb[0] * rgb[0] + 0.587 * rgb[1] * rgb[1] + 0.114 * rgb[2] * rgb[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_denormalize_rounds() {
        assert_eq!(denormalize(0.0), 0);
        assert_eq!(denormalize(1.0), 255);
        assert_eq!(denormalize(128.0 / 255.0), 128);
        // Just below the half-step rounds down, just above rounds up
        assert_eq!(denormalize(0.4 / 255.0), 0);
        assert_eq!(denormalize(0.6 / 255.0), 1);
    }

    #[test]
    fn test_denormalize_clamps_out_of_range() {
        assert_eq!(denormalize(-0.5), 0);
        assert_eq!(denormalize(1.5), 255);
    }

    #[test]
    fn test_byte_roundtrip_is_exact() {
        for v in [0u8, 1, 5, 127, 128, 250, 255] {
            assert_eq!(denormalize(normalize(v)), v);
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        assert!((lerp(0.2, 0.8, 0.0) - 0.2).abs() < EPSILON);
        assert!((lerp(0.2, 0.8, 1.0) - 0.8).abs() < EPSILON);
        assert!((lerp(0.2, 0.8, 0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_lerp_rgb_midpoint() {
        let mid = lerp_rgb([0.0, 0.2, 0.4], [1.0, 0.6, 0.8], 0.5);
        for (got, want) in mid.iter().zip([0.5, 0.4, 0.6]) {
            assert!((got - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_luminance_of_white_is_one() {
        assert!((luminance([1.0, 1.0, 1.0]) - 1.0).abs() < EPSILON);
        assert!(luminance([0.0, 0.0, 0.0]).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_weights_green_highest() {
        let r = luminance([1.0, 0.0, 0.0]);
        let g = luminance([0.0, 1.0, 0.0]);
        let b = luminance([0.0, 0.0, 1.0]);
        assert!(g > r && r > b, "BT.709 ordering: G > R > B ({g} {r} {b})");
    }

    #[test]
    fn test_perceived_brightness_bounds() {
        assert!(perceived_brightness([0.0, 0.0, 0.0]).abs() < EPSILON);
        assert!((perceived_brightness([1.0, 1.0, 1.0]) - 1.0).abs() < EPSILON);
        let gray = perceived_brightness([0.5, 0.5, 0.5]);
        assert!((gray - 0.5).abs() < EPSILON, "gray is its own brightness: {gray}");
    }
}
