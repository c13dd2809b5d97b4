//! Rectangle geometry: canvas dimensions, quadrant lookups and the angular sweep of gradient axes.

/// Angular sampling of gradient axes around the gradient rectangle.
pub mod coordinates;
/// Canvas size and the derived band rectangles.
pub mod dimensions;
/// Quadrant / corner / intercept-side lookup tables.
pub mod quadrant;
