//! Gradient axes: slope classification, sampling interval and color interpolation.

/// The per-axis gradient value.
pub mod gradient;
/// Slope classification of a gradient axis.
pub mod slope;
