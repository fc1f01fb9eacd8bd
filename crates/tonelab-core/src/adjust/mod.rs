//! Per-pixel adjustment operators.
//!
//! Each operator is a pure function `RGB × parameter → RGB` that returns
//! its input unchanged at the parameter's neutral value (amount 0, or the
//! 6500 K reference temperature). Amounts outside the declared slider
//! range are clamped on entry, never rejected.
//!
//! ## Canonical order (hard invariant)
//! temperature → tint → exposure → contrast → highlights → shadows →
//! whites → blacks → vibrance → saturation → tone curves.
//!
//! Reordering changes output; [`crate::transform::evaluate`] is the only
//! place the chain is spelled out.

pub mod color;
pub mod curves;
pub mod detail;
pub mod tonal;

pub use color::{apply_saturation, apply_temperature, apply_tint, apply_vibrance};
pub use curves::{apply_tone_curves, CurveEvaluator};
pub use detail::{detail_boost, sharpen_detail};
pub use tonal::{
    apply_blacks, apply_contrast, apply_exposure, apply_highlights, apply_shadows, apply_whites,
};
