//! Presets resolved before rendering: named colors, two-color profiles and canvas aspect ratios.

/// Canvas aspect-ratio presets.
pub mod aspect;
/// Hex and named color parsing plus two-color profiles.
pub mod color;
