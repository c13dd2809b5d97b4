//! CPU rasterization of one border frame.
//!
//! A [`Layer`](layer::Layer) records vector fills into a `vello_cpu` context and flushes them into
//! a premultiplied RGBA8 pixmap whenever a pixel-level pass (trim, blur, readback) needs them.

/// Separable Gaussian blur over premultiplied RGBA8.
pub mod blur;
pub(crate) mod composite;
/// Finished frame buffers.
pub mod frame;
/// The per-frame canvas and its paint operations.
pub mod layer;
