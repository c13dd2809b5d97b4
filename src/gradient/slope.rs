use crate::foundation::core::Point;
use crate::foundation::math::is_near_zero;

/// Orientation of a gradient axis.
///
/// Horizontal and vertical axes are their own variants so that no code path ever divides by a
/// zero slope or a zero perpendicular slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlopeKind {
    /// Oblique axis with a finite, non-zero slope.
    Default {
        /// `dy / dx` of the axis.
        slope: f64,
        /// `-1 / slope`: slope of the color lines drawn across the axis.
        perpendicular: f64,
    },
    /// `start.y == end.y`; the perpendicular is vertical.
    Horizontal,
    /// `start.x == end.x`; the axis slope is undefined.
    Vertical,
}

impl SlopeKind {
    /// Classify the axis running from `start` to `end`.
    ///
    /// Deltas within a micro-pixel of zero count as exactly zero, so near-axis-aligned lines take
    /// the degenerate branches.
    pub fn classify(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        if is_near_zero(dx) {
            return SlopeKind::Vertical;
        }
        if is_near_zero(dy) {
            return SlopeKind::Horizontal;
        }
        let slope = dy / dx;
        SlopeKind::Default {
            slope,
            perpendicular: -1.0 / slope,
        }
    }

    /// Axis slope, `None` for a vertical axis.
    pub fn slope(self) -> Option<f64> {
        match self {
            SlopeKind::Default { slope, .. } => Some(slope),
            SlopeKind::Horizontal => Some(0.0),
            SlopeKind::Vertical => None,
        }
    }

    /// Slope of the perpendicular, `None` for a horizontal axis.
    pub fn perpendicular_slope(self) -> Option<f64> {
        match self {
            SlopeKind::Default { perpendicular, .. } => Some(perpendicular),
            SlopeKind::Horizontal => None,
            SlopeKind::Vertical => Some(0.0),
        }
    }

    /// Whether the axis is axis-aligned.
    pub fn is_degenerate(self) -> bool {
        !matches!(self, SlopeKind::Default { .. })
    }
}

/// Which coordinate the gradient steps along: the one with the larger extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntervalAxis {
    /// Step along x.
    Horizontal,
    /// Step along y.
    Vertical,
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/slope.rs"]
mod tests;
