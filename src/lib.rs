//! Camera-border is a procedural generator for animated camera-frame overlays.
//!
//! A two-color linear gradient sweeps around a rectangle: for every sampled angle the gradient
//! axis is clipped to the gradient rectangle, painted across the whole canvas and then trimmed
//! down to a thin band between the layer and interior rectangles. Each axis yields two frames
//! (primary→secondary and the reverse), written out as numbered transparent PNGs.
//!
//! - Resolve a [`CanvasSize`] and two colors ([`ColorSpec`], [`resolve_colors`])
//! - Render with [`CameraBorder::render`] (optionally in parallel via [`BorderOpts`])
//! - Persist with [`CameraBorder::save`] or stream into any [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame sequence orchestration.
pub mod border;
/// Frame sinks (PNG directory, in-memory).
pub mod encode;
/// Canvas dimensions, quadrants and axis sampling.
pub mod geometry;
/// Gradient axes and color interpolation.
pub mod gradient;
/// Named colors, profiles and aspect-ratio presets.
pub mod palette;
/// CPU rasterization of border frames.
pub mod render;

pub use crate::foundation::core::{Point, Rgb8};
pub use crate::foundation::error::{BorderError, BorderResult};

pub use crate::border::camera_border::{BorderOpts, CameraBorder, render_frame};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngDirSink, SinkConfig};
pub use crate::geometry::coordinates::{Axis, Coordinates};
pub use crate::geometry::dimensions::Dimensions;
pub use crate::geometry::quadrant::{Corner, Quadrant};
pub use crate::gradient::gradient::Gradient;
pub use crate::gradient::slope::{IntervalAxis, SlopeKind};
pub use crate::palette::aspect::{AspectRatio, CanvasSize};
pub use crate::palette::color::{
    ColorSpec, DEFAULT_PROFILE, named_color, palette_names, parse_hex, profile, profile_names,
    resolve_colors,
};
pub use crate::render::blur::{blur_rgba8_premul, kernel_radius};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::layer::Layer;
