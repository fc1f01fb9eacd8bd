//! Per-channel summary statistics.
//!
//! Mean and standard deviation for red, green, blue and Rec. 709
//! luminance, computed in the 0..=255 byte domain with a two-pass
//! scheme (mean first, then variance against it) so the variance
//! accumulation stays well-conditioned for large buffers.

use serde::{Deserialize, Serialize};

use crate::image::PixelBuffer;
use crate::scopes::clipping::{
    detect_clipping, ClippingStats, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD,
};
use crate::scopes::histogram::luma_bin;

/// Mean and standard deviation of one channel, in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelMoments {
    pub mean: f32,
    pub std_dev: f32,
}

/// Summary statistics for a whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub red: ChannelMoments,
    pub green: ChannelMoments,
    pub blue: ChannelMoments,
    pub luminance: ChannelMoments,
    pub clipping: ClippingStats,
}

/// Compute per-channel and luminance statistics plus clipping
/// percentages at the default thresholds.
pub fn channel_statistics(buffer: &PixelBuffer) -> ChannelStats {
    let count = buffer.pixel_count() as f64;

    // First pass: channel sums.
    let mut sums = [0.0f64; 4];
    for px in buffer.data.chunks_exact(4) {
        sums[0] += px[0] as f64;
        sums[1] += px[1] as f64;
        sums[2] += px[2] as f64;
        sums[3] += luma_bin(px[0], px[1], px[2]) as f64;
    }
    let means = sums.map(|s| s / count);

    // Second pass: squared deviations from the mean.
    let mut sq = [0.0f64; 4];
    for px in buffer.data.chunks_exact(4) {
        let values = [
            px[0] as f64,
            px[1] as f64,
            px[2] as f64,
            luma_bin(px[0], px[1], px[2]) as f64,
        ];
        for (acc, (v, m)) in sq.iter_mut().zip(values.iter().zip(means.iter())) {
            let d = v - m;
            *acc += d * d;
        }
    }

    let moments = |i: usize| ChannelMoments {
        mean: means[i] as f32,
        std_dev: (sq[i] / count).sqrt() as f32,
    };

    ChannelStats {
        red: moments(0),
        green: moments(1),
        blue: moments(2),
        luminance: moments(3),
        clipping: detect_clipping(buffer, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_uniform_buffer_has_zero_deviation() {
        let buf = PixelBuffer::filled(16, 16, [80, 160, 240, 255]).unwrap();
        let stats = channel_statistics(&buf);
        assert!((stats.red.mean - 80.0).abs() < EPSILON);
        assert!((stats.green.mean - 160.0).abs() < EPSILON);
        assert!((stats.blue.mean - 240.0).abs() < EPSILON);
        assert!(stats.red.std_dev < EPSILON);
        assert!(stats.green.std_dev < EPSILON);
        assert!(stats.blue.std_dev < EPSILON);
        assert!(stats.luminance.std_dev < EPSILON);
    }

    #[test]
    fn test_two_level_buffer_moments() {
        // Half the pixels at 0, half at 200: mean 100, std dev 100.
        let mut buf = PixelBuffer::filled(2, 1, [0, 0, 0, 255]).unwrap();
        buf.set_pixel(1, 0, [200, 200, 200, 255]);
        let stats = channel_statistics(&buf);
        assert!((stats.red.mean - 100.0).abs() < EPSILON);
        assert!((stats.red.std_dev - 100.0).abs() < EPSILON);
        assert!((stats.luminance.mean - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_weights_green_highest() {
        let red = channel_statistics(&PixelBuffer::filled(2, 2, [255, 0, 0, 255]).unwrap());
        let green = channel_statistics(&PixelBuffer::filled(2, 2, [0, 255, 0, 255]).unwrap());
        let blue = channel_statistics(&PixelBuffer::filled(2, 2, [0, 0, 255, 255]).unwrap());
        assert!(green.luminance.mean > red.luminance.mean);
        assert!(red.luminance.mean > blue.luminance.mean);
    }

    #[test]
    fn test_clipping_is_embedded() {
        let buf = PixelBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap();
        let stats = channel_statistics(&buf);
        assert_eq!(stats.clipping.highlight_percent, 100.0);
    }
}
