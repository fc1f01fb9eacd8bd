//! Clipping detection and the zebra-overlay mask.
//!
//! A pixel is highlight-clipped when **any** channel reaches the high
//! threshold (one blown channel already loses hue detail) and
//! shadow-clipped when **all** channels sit at or below the low
//! threshold (a single dark channel is just a saturated color).

use serde::{Deserialize, Serialize};

use crate::image::PixelBuffer;

/// Default highlight-clipping threshold.
pub const HIGHLIGHT_THRESHOLD: u8 = 250;
/// Default shadow-clipping threshold.
pub const SHADOW_THRESHOLD: u8 = 5;

/// Mask value for unclipped pixels.
pub const MASK_NORMAL: u8 = 0;
/// Mask value for highlight-clipped pixels.
pub const MASK_HIGHLIGHT: u8 = 1;
/// Mask value for shadow-clipped pixels.
pub const MASK_SHADOW: u8 = 2;

/// Clipping percentages over a whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClippingStats {
    /// Percentage of pixels with any channel ≥ the high threshold.
    pub highlight_percent: f32,
    /// Percentage of pixels with all channels ≤ the low threshold.
    pub shadow_percent: f32,
}

#[inline]
fn is_highlight(px: &[u8], high: u8) -> bool {
    px[0] >= high || px[1] >= high || px[2] >= high
}

#[inline]
fn is_shadow(px: &[u8], low: u8) -> bool {
    px[0] <= low && px[1] <= low && px[2] <= low
}

/// Measure clipping percentages with the given thresholds.
pub fn detect_clipping(buffer: &PixelBuffer, high: u8, low: u8) -> ClippingStats {
    let mut highlights = 0usize;
    let mut shadows = 0usize;

    for px in buffer.data.chunks_exact(4) {
        if is_highlight(px, high) {
            highlights += 1;
        }
        if is_shadow(px, low) {
            shadows += 1;
        }
    }

    let count = buffer.pixel_count() as f32;
    ClippingStats {
        highlight_percent: highlights as f32 / count * 100.0,
        shadow_percent: shadows as f32 / count * 100.0,
    }
}

/// Classify every pixel for overlay rendering.
///
/// Returns one byte per pixel: 0 normal, 1 highlight-clipped, 2
/// shadow-clipped. Highlight wins when a pixel somehow satisfies both
/// predicates (degenerate thresholds).
pub fn clipping_mask(buffer: &PixelBuffer, high: u8, low: u8) -> Vec<u8> {
    buffer
        .data
        .chunks_exact(4)
        .map(|px| {
            if is_highlight(px, high) {
                MASK_HIGHLIGHT
            } else if is_shadow(px, low) {
                MASK_SHADOW
            } else {
                MASK_NORMAL
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_white_is_fully_highlight_clipped() {
        let buf = PixelBuffer::filled(8, 8, [255, 255, 255, 255]).unwrap();
        let stats = detect_clipping(&buf, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD);
        assert_eq!(stats.highlight_percent, 100.0);
        assert_eq!(stats.shadow_percent, 0.0);
    }

    #[test]
    fn test_uniform_black_is_fully_shadow_clipped() {
        let buf = PixelBuffer::filled(8, 8, [0, 0, 0, 255]).unwrap();
        let stats = detect_clipping(&buf, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD);
        assert_eq!(stats.highlight_percent, 0.0);
        assert_eq!(stats.shadow_percent, 100.0);
    }

    #[test]
    fn test_any_channel_triggers_highlight() {
        // A saturated red is highlight-clipped (the red channel is gone)
        // but not shadow-clipped (green and blue alone don't count).
        let buf = PixelBuffer::filled(2, 2, [255, 0, 0, 255]).unwrap();
        let stats = detect_clipping(&buf, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD);
        assert_eq!(stats.highlight_percent, 100.0);
        assert_eq!(stats.shadow_percent, 0.0);
    }

    #[test]
    fn test_midtones_do_not_clip() {
        let buf = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
        let stats = detect_clipping(&buf, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD);
        assert_eq!(stats.highlight_percent, 0.0);
        assert_eq!(stats.shadow_percent, 0.0);
    }

    #[test]
    fn test_mask_classifies_per_pixel() {
        let mut buf = PixelBuffer::filled(3, 1, [128, 128, 128, 255]).unwrap();
        buf.set_pixel(0, 0, [252, 40, 40, 255]);
        buf.set_pixel(2, 0, [3, 3, 3, 255]);
        let mask = clipping_mask(&buf, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD);
        assert_eq!(mask, vec![MASK_HIGHLIGHT, MASK_NORMAL, MASK_SHADOW]);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let buf = PixelBuffer::filled(1, 1, [250, 10, 10, 255]).unwrap();
        let stats = detect_clipping(&buf, 250, 5);
        assert_eq!(stats.highlight_percent, 100.0, "≥ high is clipped");

        let buf = PixelBuffer::filled(1, 1, [5, 5, 5, 255]).unwrap();
        let stats = detect_clipping(&buf, 250, 5);
        assert_eq!(stats.shadow_percent, 100.0, "≤ low is clipped");
    }
}
