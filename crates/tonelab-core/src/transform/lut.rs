//! Lookup-table fast path for context-free, per-channel operators.
//!
//! Any operator whose output depends only on a single channel's value
//! (exposure, contrast) can be precomputed into a 256-entry byte table.
//! Tables are built through the exact scalar formula — normalize, apply,
//! clamp, round — so applying a table is bit-identical to running the
//! scalar path on every sample.

use crate::adjust::{apply_contrast, apply_exposure};
use crate::color::{denormalize, normalize};
use crate::image::PixelBuffer;

/// A 256-entry byte→byte transfer table for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLut {
    /// Precomputed output byte for every input byte.
    pub table: [u8; 256],
}

impl ChannelLut {
    /// Build a table from a normalized-domain operator.
    ///
    /// Each entry is `denormalize(op(normalize(i)))` — the same boundary
    /// conversions the scalar pipeline uses.
    pub fn from_operator(op: impl Fn(f32) -> f32) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = denormalize(op(normalize(i as u8)));
        }
        Self { table }
    }

    /// The identity table.
    pub fn identity() -> Self {
        Self::from_operator(|v| v)
    }

    /// Precompute the exposure operator (EV stops) for one channel.
    pub fn exposure(ev: f32) -> Self {
        Self::from_operator(|v| apply_exposure([v, v, v], ev)[0])
    }

    /// Precompute the contrast operator for one channel.
    pub fn contrast(amount: f32) -> Self {
        Self::from_operator(|v| apply_contrast([v, v, v], amount)[0])
    }

    /// Map a single byte through the table.
    #[inline]
    pub fn map(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    /// Compose another table after this one: `other(self(v))`.
    pub fn then(&self, other: &ChannelLut) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = other.table[self.table[i] as usize];
        }
        Self { table }
    }
}

/// Apply three channel tables to a buffer, producing a new buffer.
///
/// Alpha is passed through untouched.
pub fn apply_luts(
    buffer: &PixelBuffer,
    red: &ChannelLut,
    green: &ChannelLut,
    blue: &ChannelLut,
) -> PixelBuffer {
    let mut out = buffer.clone();
    for px in out.data.chunks_exact_mut(4) {
        px[0] = red.map(px[0]);
        px[1] = green.map(px[1]);
        px[2] = blue.map(px[2]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_table_is_identity() {
        let lut = ChannelLut::identity();
        for v in 0..=255u8 {
            assert_eq!(lut.map(v), v);
        }
    }

    #[test]
    fn test_neutral_exposure_and_contrast_are_identity() {
        assert_eq!(ChannelLut::exposure(0.0), ChannelLut::identity());
        assert_eq!(ChannelLut::contrast(0.0), ChannelLut::identity());
    }

    #[test]
    fn test_exposure_lut_matches_scalar_path_bit_exactly() {
        let ev = 0.8;
        let lut = ChannelLut::exposure(ev);
        for v in 0..=255u8 {
            let scalar = denormalize(apply_exposure([normalize(v); 3], ev)[0]);
            assert_eq!(lut.map(v), scalar, "mismatch at input {v}");
        }
    }

    #[test]
    fn test_contrast_lut_matches_scalar_path_bit_exactly() {
        let amount = 65.0;
        let lut = ChannelLut::contrast(amount);
        for v in 0..=255u8 {
            let scalar = denormalize(apply_contrast([normalize(v); 3], amount)[0]);
            assert_eq!(lut.map(v), scalar, "mismatch at input {v}");
        }
    }

    #[test]
    fn test_apply_luts_matches_per_pixel_scalar() {
        let mut data = Vec::new();
        for i in 0..64u32 {
            data.extend_from_slice(&[(i * 4) as u8, (255 - i) as u8, (i * 7 % 256) as u8, 200]);
        }
        let buf = PixelBuffer::new(8, 8, data).unwrap();

        let ev = -1.2;
        let lut = ChannelLut::exposure(ev);
        let fast = apply_luts(&buf, &lut, &lut, &lut);

        for (i, (out_px, in_px)) in fast
            .data
            .chunks_exact(4)
            .zip(buf.data.chunks_exact(4))
            .enumerate()
        {
            for c in 0..3 {
                let scalar = denormalize(apply_exposure([normalize(in_px[c]); 3], ev)[0]);
                assert_eq!(out_px[c], scalar, "pixel {i} channel {c}");
            }
            assert_eq!(out_px[3], in_px[3], "alpha untouched at pixel {i}");
        }
    }

    #[test]
    fn test_then_composes_in_order() {
        let a = ChannelLut::exposure(1.0);
        let b = ChannelLut::contrast(40.0);
        let composed = a.then(&b);
        for v in [0u8, 17, 128, 240, 255] {
            assert_eq!(composed.map(v), b.map(a.map(v)));
        }
    }
}
