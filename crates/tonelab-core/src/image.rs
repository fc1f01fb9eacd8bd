//! Pixel buffer representation for the editing pipeline.

use crate::error::CoreError;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major 8-bit RGBA image buffer, alpha non-premultiplied.
///
/// Invariant: `data.len() == width × height × 4`. The validating
/// constructor enforces it; code that builds buffers by hand must keep it.
/// Alpha passes through every processing stage unmodified unless an
/// operation explicitly states otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Interleaved RGBA bytes, row-major.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from existing pixel data, validating dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(CoreError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer filled with a single RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// RGBA value of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }
}
