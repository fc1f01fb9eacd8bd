//! Central settings aggregate that defines the entire adjustment pass.
//!
//! `AdjustmentSettings` is the single source of truth for a processing
//! pass: the UI/state layer writes here, the pipeline reads the full
//! struct and never mutates it. `Default` is the full identity (no-op)
//! aggregate. Out-of-range values are clamped at use (`clamped()`), never
//! rejected; shape errors (malformed curves) fail fast via `validate()`.

use serde::{Deserialize, Serialize};

use crate::color::kelvin::REFERENCE_KELVIN;
use crate::error::CoreError;

/// Basic tonal sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSettings {
    /// Exposure in photographic stops (EV). Range −5.0..=5.0, neutral 0.
    pub exposure: f32,
    /// Contrast. Range −100..=100, neutral 0.
    pub contrast: f32,
    /// Highlight recovery/boost. Range −100..=100, neutral 0.
    pub highlights: f32,
    /// Shadow lift/crush. Range −100..=100, neutral 0.
    pub shadows: f32,
    /// Whites. Range −100..=100, neutral 0.
    pub whites: f32,
    /// Blacks. Range −100..=100, neutral 0.
    pub blacks: f32,
}

impl Default for BasicSettings {
    fn default() -> Self {
        Self {
            exposure: 0.0,
            contrast: 0.0,
            highlights: 0.0,
            shadows: 0.0,
            whites: 0.0,
            blacks: 0.0,
        }
    }
}

/// Color sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// White-balance temperature in Kelvin. Range 2000..=50000,
    /// neutral 6500.
    pub temperature: f32,
    /// Green–magenta tint. Range −100..=100, neutral 0.
    pub tint: f32,
    /// Vibrance. Range −100..=100, neutral 0.
    pub vibrance: f32,
    /// Saturation. Range −100..=100, neutral 0.
    pub saturation: f32,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            temperature: REFERENCE_KELVIN,
            tint: 0.0,
            vibrance: 0.0,
            saturation: 0.0,
        }
    }
}

/// Detail sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSettings {
    /// Local contrast ("clarity"). Range −100..=100, neutral 0.
    pub clarity: f32,
    /// Unsharp-mask sharpening amount. Range 0..=150, neutral 0.
    pub sharpness: f32,
    /// Sharpening blur radius in pixels. Range 0.5..=3.0.
    pub sharpness_radius: f32,
    /// Noise reduction (declared extension point, not yet applied).
    /// Range 0..=100, neutral 0.
    pub noise_reduction: f32,
}

impl Default for DetailSettings {
    fn default() -> Self {
        Self {
            clarity: 0.0,
            sharpness: 0.0,
            sharpness_radius: 1.0,
            noise_reduction: 0.0,
        }
    }
}

/// Per-channel tone curves as sorted `[x, y]` control points in [0, 1].
///
/// An empty list means "no curve" (identity). A non-empty list must have
/// at least 2 points (`validate()`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneCurves {
    /// Master curve applied to all three channels.
    pub rgb: Vec<[f32; 2]>,
    /// Red channel curve.
    pub red: Vec<[f32; 2]>,
    /// Green channel curve.
    pub green: Vec<[f32; 2]>,
    /// Blue channel curve.
    pub blue: Vec<[f32; 2]>,
}

impl ToneCurves {
    /// True when every curve is empty (full identity).
    pub fn is_neutral(&self) -> bool {
        self.rgb.is_empty() && self.red.is_empty() && self.green.is_empty() && self.blue.is_empty()
    }
}

/// One band of the per-hue HSL mixer. Declared extension point — carried
/// in the settings contract, not applied by the minimal pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HslBand {
    /// Hue shift in degrees. Range −100..=100, neutral 0.
    pub hue: f32,
    /// Saturation shift. Range −100..=100, neutral 0.
    pub saturation: f32,
    /// Luminance shift. Range −100..=100, neutral 0.
    pub luminance: f32,
}

/// Per-hue HSL mixer bands. Declared extension point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HslMixer {
    pub red: HslBand,
    pub orange: HslBand,
    pub yellow: HslBand,
    pub green: HslBand,
    pub aqua: HslBand,
    pub blue: HslBand,
    pub purple: HslBand,
    pub magenta: HslBand,
}

/// Vignette, grain, and dehaze. Declared extension point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Vignette amount. Range −100..=100, neutral 0.
    pub vignette: f32,
    /// Film grain amount. Range 0..=100, neutral 0.
    pub grain: f32,
    /// Dehaze amount. Range −100..=100, neutral 0.
    pub dehaze: f32,
}

/// Split-toning of shadows and highlights. Declared extension point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitToning {
    /// Highlight tint hue in degrees [0, 360).
    pub highlight_hue: f32,
    /// Highlight tint strength. Range 0..=100, neutral 0.
    pub highlight_saturation: f32,
    /// Shadow tint hue in degrees [0, 360).
    pub shadow_hue: f32,
    /// Shadow tint strength. Range 0..=100, neutral 0.
    pub shadow_saturation: f32,
    /// Shadow/highlight balance. Range −100..=100, neutral 0.
    pub balance: f32,
}

/// The immutable-per-pass configuration aggregate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentSettings {
    pub basic: BasicSettings,
    pub color: ColorSettings,
    pub detail: DetailSettings,
    pub curves: ToneCurves,
    pub hsl: HslMixer,
    pub effects: EffectSettings,
    pub split_toning: SplitToning,
}

impl AdjustmentSettings {
    /// True when every exercised group is at its neutral value — a pass
    /// with neutral settings is a pure copy.
    pub fn is_neutral(&self) -> bool {
        self.basic == BasicSettings::default()
            && self.color == ColorSettings::default()
            && self.detail.clarity == 0.0
            && self.detail.sharpness == 0.0
            && self.curves.is_neutral()
    }

    /// Return a copy with every slider clamped to its declared range.
    pub fn clamped(&self) -> Self {
        let mut s = self.clone();
        s.basic.exposure = s.basic.exposure.clamp(-5.0, 5.0);
        s.basic.contrast = s.basic.contrast.clamp(-100.0, 100.0);
        s.basic.highlights = s.basic.highlights.clamp(-100.0, 100.0);
        s.basic.shadows = s.basic.shadows.clamp(-100.0, 100.0);
        s.basic.whites = s.basic.whites.clamp(-100.0, 100.0);
        s.basic.blacks = s.basic.blacks.clamp(-100.0, 100.0);
        s.color.temperature = s.color.temperature.clamp(2000.0, 50000.0);
        s.color.tint = s.color.tint.clamp(-100.0, 100.0);
        s.color.vibrance = s.color.vibrance.clamp(-100.0, 100.0);
        s.color.saturation = s.color.saturation.clamp(-100.0, 100.0);
        s.detail.clarity = s.detail.clarity.clamp(-100.0, 100.0);
        s.detail.sharpness = s.detail.sharpness.clamp(0.0, 150.0);
        s.detail.sharpness_radius = s.detail.sharpness_radius.clamp(0.5, 3.0);
        s.detail.noise_reduction = s.detail.noise_reduction.clamp(0.0, 100.0);
        s
    }

    /// Fail fast on malformed shapes: a declared tone curve with a
    /// single control point cannot be evaluated.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (channel, points) in [
            ("rgb", &self.curves.rgb),
            ("red", &self.curves.red),
            ("green", &self.curves.green),
            ("blue", &self.curves.blue),
        ] {
            if points.len() == 1 {
                return Err(CoreError::InvalidCurve {
                    channel,
                    points: points.len(),
                });
            }
        }
        Ok(())
    }
}
