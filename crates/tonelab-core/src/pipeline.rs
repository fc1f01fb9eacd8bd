//! Image pipeline — runs the full adjustment stack over a buffer.
//!
//! A pass is non-destructive: the input buffer is never mutated, the
//! output is a freshly allocated buffer of identical shape, and a pass
//! either completes or fails — no partial writes are ever published.
//!
//! Tiled processing visits fixed-size square tiles in row-major order and
//! invokes a progress callback after each tile — the cooperative-yield
//! point for large images. Per-pixel operators are purely local, so tile
//! boundaries cannot introduce seams; the spatial detail pass (clarity,
//! sharpening) blurs the full adjusted buffer instead of individual
//! tiles, which is equivalent to tiling with a halo of the full blur
//! radius.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::color::{denormalize, normalize};
use crate::filter::{local_contrast, unsharp_mask};
use crate::image::PixelBuffer;
use crate::transform::evaluate::evaluate_pixel;
use crate::transform::params::AdjustmentSettings;
use crate::CoreError;

/// Default tile edge for [`process_tiled`].
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Blur radius used by the clarity (local contrast) pass.
const CLARITY_RADIUS: f32 = 3.0;

/// Detail-magnitude gate for the sharpening pass, in normalized units
/// (4/255 — a one-byte-ish step does not count as an edge).
const SHARPEN_THRESHOLD: f32 = 4.0 / 255.0;

/// Progress report delivered after each completed tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileProgress {
    /// Zero-based index of the tile that just completed (row-major).
    pub index: usize,
    /// Total number of tiles in the pass.
    pub total: usize,
    /// Fraction of tiles completed, in (0, 1].
    pub fraction: f32,
}

/// Process a buffer with the given settings, producing a new buffer.
///
/// Applies the canonical per-pixel chain (see
/// [`crate::transform::evaluate`]), then the spatial detail passes when
/// the detail group is active. Alpha is passed through untouched.
pub fn process(
    buffer: &PixelBuffer,
    settings: &AdjustmentSettings,
) -> Result<PixelBuffer, CoreError> {
    process_tiled(buffer, settings, DEFAULT_TILE_SIZE, |_| {})
}

/// Tiled variant of [`process`].
///
/// `tile_size` is the square tile edge in pixels; `progress` is invoked
/// after each completed tile. A caller driving a cooperative scheduler
/// can yield between invocations; no operator blocks mid-pixel.
pub fn process_tiled(
    buffer: &PixelBuffer,
    settings: &AdjustmentSettings,
    tile_size: u32,
    mut progress: impl FnMut(TileProgress),
) -> Result<PixelBuffer, CoreError> {
    // Buffer fields are public; a violated invariant must fail fast
    // here, not smear garbage through the pass.
    if buffer.width == 0 || buffer.height == 0 {
        return Err(CoreError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }
    let expected = buffer.pixel_count() * 4;
    if buffer.data.len() != expected {
        return Err(CoreError::BufferSizeMismatch {
            expected,
            actual: buffer.data.len(),
        });
    }
    settings.validate()?;

    let tile_size = tile_size.max(1);
    let settings = settings.clamped();

    let tiles_x = buffer.width.div_ceil(tile_size);
    let tiles_y = buffer.height.div_ceil(tile_size);
    let total = (tiles_x * tiles_y) as usize;

    debug!(
        width = buffer.width,
        height = buffer.height,
        tiles = total,
        "starting adjustment pass"
    );

    let mut out = buffer.clone();

    if !settings.is_neutral() {
        for ty in 0..tiles_y {
            for tx in 0..tiles_x {
                process_tile(buffer, &mut out, &settings, tx, ty, tile_size);
                let index = (ty * tiles_x + tx) as usize;
                progress(TileProgress {
                    index,
                    total,
                    fraction: (index + 1) as f32 / total as f32,
                });
            }
        }
    } else {
        // Neutral settings are a pure copy; still report completion.
        progress(TileProgress {
            index: total - 1,
            total,
            fraction: 1.0,
        });
    }

    // Spatial detail passes run over the full adjusted buffer so tile
    // boundaries never show.
    if settings.detail.clarity != 0.0 {
        out = local_contrast(&out, settings.detail.clarity, CLARITY_RADIUS);
    }
    if settings.detail.sharpness > 0.0 {
        out = unsharp_mask(
            &out,
            settings.detail.sharpness,
            settings.detail.sharpness_radius,
            SHARPEN_THRESHOLD,
        );
    }

    debug!(width = out.width, height = out.height, "adjustment pass complete");
    Ok(out)
}

/// Run the per-pixel chain over one tile.
fn process_tile(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    settings: &AdjustmentSettings,
    tx: u32,
    ty: u32,
    tile_size: u32,
) {
    let x0 = tx * tile_size;
    let y0 = ty * tile_size;
    let x1 = (x0 + tile_size).min(src.width);
    let y1 = (y0 + tile_size).min(src.height);

    for y in y0..y1 {
        for x in x0..x1 {
            let i = src.offset(x, y);
            let rgb = [
                normalize(src.data[i]),
                normalize(src.data[i + 1]),
                normalize(src.data[i + 2]),
            ];
            let adjusted = evaluate_pixel(rgb, settings);
            dst.data[i] = denormalize(adjusted[0]);
            dst.data[i + 1] = denormalize(adjusted[1]);
            dst.data[i + 2] = denormalize(adjusted[2]);
            // dst started as a clone, so alpha is already in place.
        }
    }
}

/// Monotonically increasing pass token for publish-time staleness checks.
///
/// The caller owns one `Generation` per image slot. Each new pass takes a
/// token from [`Generation::begin`]; when the pass completes, the result
/// is published only if [`Generation::is_current`] still holds — a stale
/// completed pass never overwrites a newer one.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass, invalidating all earlier tokens.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True if `token` belongs to the most recently started pass.
    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}
