//! CIE XYZ and LAB conversions, relative to the D65 illuminant.
//!
//! RGB values are sRGB-encoded; conversions linearize through the sRGB
//! transfer curve before applying the 3×3 matrix.
//!
//! # Reference
//! Lindbloom, Bruce J. — RGB/XYZ matrices and Lab transfer constants.

use crate::color::transfer::{apply_gamma, remove_gamma};

/// D65 reference white point.
pub const D65_WHITE: [f32; 3] = [0.95047, 1.0, 1.08883];

/// LAB transfer breakpoint (6/29)³.
const LAB_EPSILON: f32 = 0.008856;
/// LAB transfer linear-segment scale (29/3)³.
const LAB_KAPPA: f32 = 903.3;

/// sRGB → XYZ matrix (linear RGB, D65).
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ → sRGB matrix (linear RGB, D65).
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

fn mat3_apply(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Convert sRGB-encoded RGB to CIE XYZ.
pub fn rgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    let linear = [
        remove_gamma(rgb[0]),
        remove_gamma(rgb[1]),
        remove_gamma(rgb[2]),
    ];
    mat3_apply(&RGB_TO_XYZ, linear)
}

/// Convert CIE XYZ to sRGB-encoded RGB, clamped to [0, 1].
pub fn xyz_to_rgb(xyz: [f32; 3]) -> [f32; 3] {
    let linear = mat3_apply(&XYZ_TO_RGB, xyz);
    [
        apply_gamma(linear[0]),
        apply_gamma(linear[1]),
        apply_gamma(linear[2]),
    ]
}

/// Convert CIE XYZ to LAB. Returns `[L, a, b]` with L in [0, 100].
pub fn xyz_to_lab(xyz: [f32; 3]) -> [f32; 3] {
    let fx = lab_transfer(xyz[0] / D65_WHITE[0]);
    let fy = lab_transfer(xyz[1] / D65_WHITE[1]);
    let fz = lab_transfer(xyz[2] / D65_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert LAB to CIE XYZ — the algebraic dual of [`xyz_to_lab`].
pub fn lab_to_xyz(lab: [f32; 3]) -> [f32; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;
    [
        lab_transfer_inv(fx) * D65_WHITE[0],
        lab_transfer_inv(fy) * D65_WHITE[1],
        lab_transfer_inv(fz) * D65_WHITE[2],
    ]
}

/// CIE76 color difference — Euclidean distance in LAB space.
pub fn delta_e(lab_a: [f32; 3], lab_b: [f32; 3]) -> f32 {
    let dl = lab_a[0] - lab_b[0];
    let da = lab_a[1] - lab_b[1];
    let db = lab_a[2] - lab_b[2];
    (dl * dl + da * da + db * db).sqrt()
}

/// LAB cube-root transfer: `t^(1/3)` above epsilon, linear toe below.
fn lab_transfer(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_transfer_inv(f: f32) -> f32 {
    let f3 = f * f * f;
    if f3 > LAB_EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / LAB_KAPPA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The XYZ path chains two powf transfers and two matrices in f32;
    // round trips hold to ~1e-4, not machine epsilon.
    const EPSILON: f32 = 1e-4;

    fn assert_close(got: [f32; 3], want: [f32; 3], tol: f32) {
        for i in 0..3 {
            assert!(
                (got[i] - want[i]).abs() < tol,
                "component {i}: {:.6} vs {:.6}",
                got[i],
                want[i]
            );
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        assert_close(rgb_to_xyz([1.0, 1.0, 1.0]), D65_WHITE, 1e-3);
    }

    #[test]
    fn test_xyz_roundtrip_preserves_values() {
        for rgb in [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.8, 0.4, 0.2],
            [0.1, 0.9, 0.5],
            [0.02, 0.03, 0.04],
        ] {
            assert_close(xyz_to_rgb(rgb_to_xyz(rgb)), rgb, EPSILON);
        }
    }

    #[test]
    fn test_lab_roundtrip_preserves_values() {
        for rgb in [[0.8, 0.4, 0.2], [0.1, 0.9, 0.5], [0.5, 0.5, 0.5]] {
            let xyz = rgb_to_xyz(rgb);
            let back = lab_to_xyz(xyz_to_lab(xyz));
            assert_close(back, xyz, EPSILON);
        }
    }

    #[test]
    fn test_lab_white_is_l100() {
        let lab = xyz_to_lab(D65_WHITE);
        assert!((lab[0] - 100.0).abs() < 0.01, "L of white: {}", lab[0]);
        assert!(lab[1].abs() < 0.01 && lab[2].abs() < 0.01, "white is neutral");
    }

    #[test]
    fn test_lab_toe_below_epsilon() {
        // Deep shadow exercises the linear toe of the transfer.
        let xyz = [0.002, 0.002, 0.002];
        let back = lab_to_xyz(xyz_to_lab(xyz));
        assert_close(back, xyz, 1e-5);
    }

    #[test]
    fn test_delta_e_identical_is_zero() {
        let lab = xyz_to_lab(rgb_to_xyz([0.6, 0.3, 0.2]));
        assert_eq!(delta_e(lab, lab), 0.0);
    }

    #[test]
    fn test_delta_e_orders_perceptual_distance() {
        let red = xyz_to_lab(rgb_to_xyz([1.0, 0.0, 0.0]));
        let dark_red = xyz_to_lab(rgb_to_xyz([0.9, 0.05, 0.05]));
        let blue = xyz_to_lab(rgb_to_xyz([0.0, 0.0, 1.0]));
        assert!(
            delta_e(red, dark_red) < delta_e(red, blue),
            "near-red is closer to red than blue is"
        );
    }
}
