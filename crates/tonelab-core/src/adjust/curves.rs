//! Tone curve evaluation.
//!
//! Catmull-Rom spline interpolation through sorted `[x, y]` control
//! points, applied per channel (master RGB curve first, then the red,
//! green, and blue curves).
//!
//! # Algorithm
//! Catmull-Rom splines (1974) provide C1 continuity through control
//! points. For each segment between P1 and P2, with neighbors P0 and P3:
//! ```text
//! q(t) = 0.5 × ((2×P1) + (-P0 + P2)×t + (2×P0 - 5×P1 + 4×P2 - P3)×t² + (-P0 + 3×P1 - 3×P2 + P3)×t³)
//! ```

use crate::color::clamp01;
use crate::transform::params::ToneCurves;

/// Evaluates a cubic Catmull-Rom curve from control points.
///
/// Control points are `[x, y]` pairs in [0, 1], sorted by x. Borrows the
/// points to avoid heap allocations in per-pixel hot paths.
pub struct CurveEvaluator<'a> {
    /// Control points as `[x, y]` pairs, sorted by x.
    pub control_points: &'a [[f32; 2]],
}

impl CurveEvaluator<'_> {
    /// Evaluate the curve at position `t`.
    ///
    /// Values outside the control-point range clamp to the first/last
    /// point's y-value. Fewer than 2 points is the identity.
    pub fn evaluate(&self, t: f32) -> f32 {
        let pts = &self.control_points;
        if pts.len() < 2 {
            return t;
        }

        if t <= pts[0][0] {
            return pts[0][1];
        }
        if t >= pts[pts.len() - 1][0] {
            return pts[pts.len() - 1][1];
        }

        // Binary search for the segment containing t
        let mut lo = 0;
        let mut hi = pts.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if pts[mid][0] <= t {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let p1 = pts[lo];
        let p2 = pts[hi];

        // Virtual endpoints: mirror at boundaries
        let p0 = if lo > 0 {
            pts[lo - 1]
        } else {
            [2.0 * p1[0] - p2[0], 2.0 * p1[1] - p2[1]]
        };
        let p3 = if hi < pts.len() - 1 {
            pts[hi + 1]
        } else {
            [2.0 * p2[0] - p1[0], 2.0 * p2[1] - p1[1]]
        };

        let segment_t = if (p2[0] - p1[0]).abs() < 1e-10 {
            0.5
        } else {
            (t - p1[0]) / (p2[0] - p1[0])
        };

        catmull_rom(p0[1], p1[1], p2[1], p3[1], segment_t)
    }
}

/// Catmull-Rom cubic interpolation between P1 and P2.
fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Apply the tone curve group to an RGB triplet.
///
/// The master curve maps all three channels, then each per-channel curve
/// maps its own channel. Empty point lists are the identity.
pub fn apply_tone_curves(rgb: [f32; 3], curves: &ToneCurves) -> [f32; 3] {
    if curves.is_neutral() {
        return rgb;
    }

    let master = CurveEvaluator {
        control_points: &curves.rgb,
    };
    let per_channel = [
        CurveEvaluator {
            control_points: &curves.red,
        },
        CurveEvaluator {
            control_points: &curves.green,
        },
        CurveEvaluator {
            control_points: &curves.blue,
        },
    ];

    let mut out = [0.0_f32; 3];
    for c in 0..3 {
        out[c] = clamp01(per_channel[c].evaluate(master.evaluate(rgb[c])));
    }
    out
}
