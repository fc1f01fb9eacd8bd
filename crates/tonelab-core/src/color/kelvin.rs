//! Black-body temperature to RGB approximation.
//!
//! Piecewise polynomial fit of Planckian radiation, valid for
//! 1000 K – 40000 K (inputs outside are clamped).
//!
//! # Reference
//! Helland, Tanner — "How to Convert Temperature (K) to RGB" (2012).

/// Neutral daylight reference used by the temperature adjustment.
pub const REFERENCE_KELVIN: f32 = 6500.0;

/// Convert a color temperature in Kelvin to a normalized RGB triplet.
pub fn kelvin_to_rgb(kelvin: f32) -> [f32; 3] {
    let temp = f64::from(kelvin.clamp(1000.0, 40000.0)) / 100.0;

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698727446 * (temp - 60.0).powf(-0.1332047592)
    };

    let green = if temp <= 66.0 {
        99.4708025861 * temp.ln() - 161.1195681661
    } else {
        288.1221695283 * (temp - 60.0).powf(-0.0755148492)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.5177312231 * (temp - 10.0).ln() - 305.0447927307
    };

    [
        (red.clamp(0.0, 255.0) / 255.0) as f32,
        (green.clamp(0.0, 255.0) / 255.0) as f32,
        (blue.clamp(0.0, 255.0) / 255.0) as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_temperature_is_near_white() {
        let rgb = kelvin_to_rgb(REFERENCE_KELVIN);
        for (i, c) in rgb.iter().enumerate() {
            assert!(*c > 0.95, "channel {i} of 6500K should be near white: {c}");
        }
    }

    #[test]
    fn test_candlelight_is_warm() {
        let rgb = kelvin_to_rgb(2000.0);
        assert_eq!(rgb[0], 1.0, "red saturates at low temperatures");
        assert!(rgb[2] < 0.1, "blue is nearly absent at 2000K: {}", rgb[2]);
        assert!(rgb[0] > rgb[1] && rgb[1] > rgb[2]);
    }

    #[test]
    fn test_overcast_sky_is_cool() {
        let rgb = kelvin_to_rgb(20000.0);
        assert_eq!(rgb[2], 1.0, "blue saturates at high temperatures");
        assert!(rgb[0] < 0.8, "red falls off at 20000K: {}", rgb[0]);
    }

    #[test]
    fn test_blue_cutoff_below_1900() {
        assert_eq!(kelvin_to_rgb(1500.0)[2], 0.0);
    }

    #[test]
    fn test_input_is_clamped_to_valid_range() {
        assert_eq!(kelvin_to_rgb(100.0), kelvin_to_rgb(1000.0));
        assert_eq!(kelvin_to_rgb(99999.0), kelvin_to_rgb(40000.0));
    }

    #[test]
    fn test_monotonic_warm_to_cool_blue_channel() {
        let mut prev = kelvin_to_rgb(2000.0)[2];
        for k in [3000.0, 4000.0, 5000.0, 6000.0, 6600.0] {
            let b = kelvin_to_rgb(k)[2];
            assert!(b >= prev, "blue rises with temperature ({k}K: {b} < {prev})");
            prev = b;
        }
    }
}
