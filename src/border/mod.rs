//! Frame sequence orchestration.

/// `CameraBorder` run: geometry setup, per-axis frame rendering and output.
pub mod camera_border;
