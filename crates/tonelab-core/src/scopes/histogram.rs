//! RGB + luminance histogram computation.

use serde::{Deserialize, Serialize};

use crate::color::LUMA_REC709;
use crate::image::PixelBuffer;

/// Display-scaling range: bins [5, 250]. The extremes hold clipping
/// spikes that would otherwise flatten the rest of the plot.
const DISPLAY_LO: usize = 5;
const DISPLAY_HI: usize = 250;

/// Histogram data for R, G, B, and luminance (256 bins each).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramData {
    /// Red bin counts (256 entries).
    pub red: Vec<u32>,
    /// Green bin counts (256 entries).
    pub green: Vec<u32>,
    /// Blue bin counts (256 entries).
    pub blue: Vec<u32>,
    /// Luminance bin counts (256 entries), BT.709 weights on byte values.
    pub luminance: Vec<u32>,
    /// Peak bin value across all channels over bins [5, 250] only,
    /// for display normalization.
    pub max: u32,
}

impl HistogramData {
    fn empty() -> Self {
        Self {
            red: vec![0; 256],
            green: vec![0; 256],
            blue: vec![0; 256],
            luminance: vec![0; 256],
            max: 0,
        }
    }

    fn finish(&mut self) {
        let channels = [&self.red, &self.green, &self.blue, &self.luminance];
        self.max = channels
            .iter()
            .flat_map(|bins| bins[DISPLAY_LO..=DISPLAY_HI].iter())
            .copied()
            .max()
            .unwrap_or(0);
    }
}

/// BT.709 luminance of a byte pixel, as a bin index.
#[inline]
pub(crate) fn luma_bin(r: u8, g: u8, b: u8) -> usize {
    let lum =
        LUMA_REC709[0] * r as f32 + LUMA_REC709[1] * g as f32 + LUMA_REC709[2] * b as f32;
    (lum.round() as usize).min(255)
}

/// Compute the full histogram of a buffer.
pub fn compute(buffer: &PixelBuffer) -> HistogramData {
    compute_sampled(buffer, 1)
}

/// Compute a histogram visiting every `stride`-th pixel.
///
/// The fast variant for interactive redraws of multi-megapixel buffers;
/// `stride = 1` is the exact histogram.
pub fn compute_sampled(buffer: &PixelBuffer, stride: usize) -> HistogramData {
    let stride = stride.max(1);
    let mut hist = HistogramData::empty();

    for px in buffer.data.chunks_exact(4).step_by(stride) {
        hist.red[px[0] as usize] += 1;
        hist.green[px[1] as usize] += 1;
        hist.blue[px[2] as usize] += 1;
        hist.luminance[luma_bin(px[0], px[1], px[2])] += 1;
    }

    hist.finish();
    hist
}
