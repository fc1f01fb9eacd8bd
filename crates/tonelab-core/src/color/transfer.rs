//! sRGB transfer function (IEC 61966-2-1).
//!
//! ```text
//! apply_gamma (linear → encoded):
//!   L <= 0.0031308 → L × 12.92
//!   L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
//!
//! remove_gamma (encoded → linear):
//!   V <= 0.04045 → V / 12.92
//!   V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
//! ```

/// Encode linear light with the sRGB transfer curve.
#[inline]
pub fn apply_gamma(linear: f32) -> f32 {
    let l = linear.clamp(0.0, 1.0);
    if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode an sRGB-encoded value to linear light.
#[inline]
pub fn remove_gamma(encoded: f32) -> f32 {
    let v = encoded.clamp(0.0, 1.0);
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
