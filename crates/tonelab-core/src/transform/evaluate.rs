//! Core per-pixel evaluation — applies the canonical adjustment chain to
//! a single pixel. The pipeline and the LUT baker both route through
//! here; nothing else spells out the order.

use crate::adjust::{
    apply_blacks, apply_contrast, apply_exposure, apply_highlights, apply_saturation,
    apply_shadows, apply_temperature, apply_tint, apply_tone_curves, apply_vibrance, apply_whites,
};
use crate::transform::params::AdjustmentSettings;

/// Apply the canonical adjustment chain to one RGB pixel.
///
/// Order is a hard invariant — reordering changes output:
/// 1. Temperature
/// 2. Tint
/// 3. Exposure
/// 4. Contrast
/// 5. Highlights
/// 6. Shadows
/// 7. Whites
/// 8. Blacks
/// 9. Vibrance
/// 10. Saturation
/// 11. Tone curves
///
/// Spatial operators (clarity, sharpening) need neighborhood context and
/// run as separate passes in [`crate::pipeline`].
pub fn evaluate_pixel(rgb: [f32; 3], settings: &AdjustmentSettings) -> [f32; 3] {
    let mut px = rgb;
    px = apply_temperature(px, settings.color.temperature);
    px = apply_tint(px, settings.color.tint);
    px = apply_exposure(px, settings.basic.exposure);
    px = apply_contrast(px, settings.basic.contrast);
    px = apply_highlights(px, settings.basic.highlights);
    px = apply_shadows(px, settings.basic.shadows);
    px = apply_whites(px, settings.basic.whites);
    px = apply_blacks(px, settings.basic.blacks);
    px = apply_vibrance(px, settings.color.vibrance);
    px = apply_saturation(px, settings.color.saturation);
    apply_tone_curves(px, &settings.curves)
}
