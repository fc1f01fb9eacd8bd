//! Unsharp-mask sharpening and local-contrast enhancement.
//!
//! Both compose a full-buffer Gaussian blur with the detail-extraction
//! operators from [`crate::adjust::detail`]: sharpening is thresholded,
//! local contrast ("clarity") is not.

use crate::adjust::{detail_boost, sharpen_detail};
use crate::color::{denormalize, normalize};
use crate::filter::blur::blur_planes;
use crate::image::PixelBuffer;

/// Unsharp-mask sharpen (`amount` 0..=150, `radius` in pixels,
/// `threshold` in normalized units).
///
/// Channels only sharpen where the detail magnitude `|orig − blurred|`
/// exceeds `threshold`; `amount == 0` (or a threshold above the maximum
/// possible detail) returns the input unchanged.
pub fn unsharp_mask(
    buffer: &PixelBuffer,
    amount: f32,
    radius: f32,
    threshold: f32,
) -> PixelBuffer {
    if amount <= 0.0 {
        return buffer.clone();
    }
    let blurred = blur_planes(buffer, radius);
    let mut out = buffer.clone();
    for (px, blur) in out.data.chunks_exact_mut(4).zip(blurred) {
        let orig = [normalize(px[0]), normalize(px[1]), normalize(px[2])];
        let sharpened = sharpen_detail(orig, blur, amount, threshold);
        px[0] = denormalize(sharpened[0]);
        px[1] = denormalize(sharpened[1]);
        px[2] = denormalize(sharpened[2]);
    }
    out
}

/// Local-contrast ("clarity") enhancement (`amount` −100..=100).
///
/// Positive amounts emphasize midtone detail, negative amounts smooth.
pub fn local_contrast(buffer: &PixelBuffer, amount: f32, radius: f32) -> PixelBuffer {
    if amount == 0.0 {
        return buffer.clone();
    }
    let blurred = blur_planes(buffer, radius);
    let mut out = buffer.clone();
    for (px, blur) in out.data.chunks_exact_mut(4).zip(blurred) {
        let orig = [normalize(px[0]), normalize(px[1]), normalize(px[2])];
        let boosted = detail_boost(orig, blur, amount);
        px[0] = denormalize(boosted[0]);
        px[1] = denormalize(boosted[1]);
        px[2] = denormalize(boosted[2]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left half dark, right half bright — one clean vertical edge.
    fn edge_buffer() -> PixelBuffer {
        let mut buf = PixelBuffer::filled(16, 8, [60, 60, 60, 255]).unwrap();
        for y in 0..8 {
            for x in 8..16 {
                buf.set_pixel(x, y, [180, 180, 180, 255]);
            }
        }
        buf
    }

    #[test]
    fn test_unsharp_zero_amount_is_identity() {
        let buf = edge_buffer();
        assert_eq!(unsharp_mask(&buf, 0.0, 2.0, 0.01), buf);
    }

    #[test]
    fn test_unsharp_threshold_above_max_detail_is_identity() {
        // Maximum possible |orig − blurred| is 1.0; a higher threshold
        // gates every channel off.
        let buf = edge_buffer();
        assert_eq!(unsharp_mask(&buf, 100.0, 2.0, 1.5), buf);
    }

    #[test]
    fn test_unsharp_increases_edge_contrast() {
        let buf = edge_buffer();
        let sharp = unsharp_mask(&buf, 100.0, 2.0, 0.01);
        // Dark side of the edge overshoots darker, bright side brighter.
        assert!(sharp.pixel(7, 4)[0] < buf.pixel(7, 4)[0]);
        assert!(sharp.pixel(8, 4)[0] > buf.pixel(8, 4)[0]);
    }

    #[test]
    fn test_unsharp_leaves_flat_regions_alone() {
        let buf = edge_buffer();
        let sharp = unsharp_mask(&buf, 100.0, 2.0, 0.01);
        // Far from the edge the blur equals the original.
        assert_eq!(sharp.pixel(0, 4), buf.pixel(0, 4));
        assert_eq!(sharp.pixel(15, 4), buf.pixel(15, 4));
    }

    #[test]
    fn test_local_contrast_zero_is_identity() {
        let buf = edge_buffer();
        assert_eq!(local_contrast(&buf, 0.0, 3.0), buf);
    }

    #[test]
    fn test_local_contrast_positive_emphasizes_edge() {
        let buf = edge_buffer();
        let clear = local_contrast(&buf, 100.0, 3.0);
        assert!(clear.pixel(7, 4)[0] < buf.pixel(7, 4)[0]);
        assert!(clear.pixel(8, 4)[0] > buf.pixel(8, 4)[0]);
    }

    #[test]
    fn test_local_contrast_negative_smooths_edge() {
        let buf = edge_buffer();
        let smooth = local_contrast(&buf, -100.0, 3.0);
        let orig_step = buf.pixel(8, 4)[0] as i32 - buf.pixel(7, 4)[0] as i32;
        let new_step = smooth.pixel(8, 4)[0] as i32 - smooth.pixel(7, 4)[0] as i32;
        assert!(new_step < orig_step, "edge step shrinks: {new_step} vs {orig_step}");
    }

    #[test]
    fn test_uniform_buffer_unchanged_by_both() {
        let buf = PixelBuffer::filled(10, 10, [128, 64, 32, 255]).unwrap();
        assert_eq!(unsharp_mask(&buf, 100.0, 2.0, 0.01), buf);
        assert_eq!(local_contrast(&buf, 100.0, 3.0), buf);
    }
}
