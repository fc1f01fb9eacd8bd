//! Scope computation — histogram, clipping analysis, and channel
//! statistics. Independent consumers of a pixel buffer; nothing here
//! feeds back into processing.

pub mod clipping;
pub mod histogram;
pub mod stats;

pub use clipping::{clipping_mask, detect_clipping, ClippingStats};
pub use histogram::HistogramData;
pub use stats::{channel_statistics, ChannelMoments, ChannelStats};
