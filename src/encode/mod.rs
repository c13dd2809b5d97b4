//! Frame sinks.
//!
//! Sinks consume finished frames in sweep order and are driven by [`crate::CameraBorder::write_to`].

/// Generic frame sink trait and built-in sinks.
pub mod sink;
