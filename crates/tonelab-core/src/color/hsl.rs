//! RGB ↔ HSL and RGB ↔ HSV conversions.
//!
//! Standard max/min/delta hue-sector algorithm. Hue is in degrees
//! [0, 360) and wraps; saturation, lightness, and value are in [0, 1].
//! The achromatic case (max == min) yields hue 0 and saturation 0 by
//! convention.

const ACHROMATIC_DELTA: f32 = 1e-10;

/// Convert RGB to HSL. Returns `(hue_degrees, saturation, lightness)`.
pub fn rgb_to_hsl(rgb: [f32; 3]) -> (f32, f32, f32) {
    let r = rgb[0].clamp(0.0, 1.0);
    let g = rgb[1].clamp(0.0, 1.0);
    let b = rgb[2].clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) * 0.5;

    let delta = max - min;
    if delta < ACHROMATIC_DELTA {
        return (0.0, 0.0, lightness);
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    (hue_from_sectors(r, g, b, max, delta), saturation, lightness)
}

/// Convert HSL to RGB.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s < ACHROMATIC_DELTA {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = hue.rem_euclid(360.0) / 360.0;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Convert RGB to HSV. Returns `(hue_degrees, saturation, value)`.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> (f32, f32, f32) {
    let r = rgb[0].clamp(0.0, 1.0);
    let g = rgb[1].clamp(0.0, 1.0);
    let b = rgb[2].clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta < ACHROMATIC_DELTA {
        return (0.0, 0.0, max);
    }

    let saturation = if max > 0.0 { delta / max } else { 0.0 };
    (hue_from_sectors(r, g, b, max, delta), saturation, max)
}

/// Convert HSV to RGB.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    if s < ACHROMATIC_DELTA {
        return [v, v, v];
    }

    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = h.floor() as i32 % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Shared hue-sector computation for HSL and HSV. Requires `delta > 0`.
fn hue_from_sectors(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    let hue = if (max - r).abs() < ACHROMATIC_DELTA {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < ACHROMATIC_DELTA {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (hue * 60.0).rem_euclid(360.0)
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
