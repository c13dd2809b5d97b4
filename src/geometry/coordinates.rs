use crate::foundation::core::Point;
use crate::foundation::error::{BorderError, BorderResult};
use crate::geometry::dimensions::Dimensions;

/// One sampled gradient axis, in canvas coordinates.
///
/// `end` is `start` reflected through the canvas center, so every axis crosses the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    /// Sweep angle in degrees, in `(180, 360]`.
    pub angle_deg: u32,
    /// Axis origin on the gradient rectangle boundary.
    pub start: Point,
    /// Diametrically opposite point.
    pub end: Point,
}

/// Ordered gradient axes sampled every `degree_step` degrees over half a turn.
///
/// Only the `(180, 360]` half is sampled: the other half is covered implicitly because each axis
/// runs from `start` through the center to its mirrored `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates {
    degree_step: u32,
    axes: Vec<Axis>,
}

impl Coordinates {
    /// Degrees covered by one sweep.
    pub const HALF_TURN_DEG: u32 = 180;

    /// Sample axes for `dims` every `degree_step` degrees.
    ///
    /// `degree_step` must be positive and divide 180 evenly; the result then holds exactly
    /// `180 / degree_step` axes in increasing angle order.
    pub fn generate(dims: Dimensions, degree_step: u32) -> BorderResult<Self> {
        if degree_step == 0 || !Self::HALF_TURN_DEG.is_multiple_of(degree_step) {
            return Err(BorderError::validation(format!(
                "degree step must be a positive divisor of {}, got {degree_step}",
                Self::HALF_TURN_DEG
            )));
        }

        let center = dims.gradient_center();
        let radius = center.to_vec2().hypot();

        let mut axes = Vec::with_capacity((Self::HALF_TURN_DEG / degree_step) as usize);
        let mut angle = Self::HALF_TURN_DEG + degree_step;
        while angle <= 2 * Self::HALF_TURN_DEG {
            let raw = point_on_circle(center, radius, angle);
            let start = dims.add_gradient_offset(adjust_to_rectangle(raw, angle, dims));
            let end = dims.invert_point(start);
            tracing::trace!(angle, ?start, ?end, "sampled axis");
            axes.push(Axis {
                angle_deg: angle,
                start,
                end,
            });
            angle += degree_step;
        }

        Ok(Self { degree_step, axes })
    }

    /// Angular distance between consecutive axes.
    pub fn degree_step(&self) -> u32 {
        self.degree_step
    }

    /// Axes in increasing angle order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of sampled axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Whether no axis was sampled.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// `(start, end)` pairs in increasing angle order.
    pub fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.axes.iter().map(|a| (a.start, a.end))
    }
}

fn point_on_circle(center: Point, radius: f64, angle_deg: u32) -> Point {
    let theta = f64::from(angle_deg).to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

// Slide `raw` back along its ray from the center until it meets the gradient rectangle.
// Works in gradient-local coordinates.
fn adjust_to_rectangle(raw: Point, angle_deg: u32, dims: Dimensions) -> Point {
    let center = dims.gradient_center();
    let gw = f64::from(dims.gradient_width());
    let gh = f64::from(dims.gradient_height());

    match angle_deg % 360 {
        0 => Point::new(if raw.x < center.x { 0.0 } else { gw }, center.y),
        270 => Point::new(center.x, if raw.y < center.y { 0.0 } else { gh }),
        _ => {
            let slope = f64::from(angle_deg).to_radians().tan();
            if raw.y < 0.0 {
                Point::new(raw.x - raw.y / slope, 0.0)
            } else {
                let x = if raw.x < center.x { 0.0 } else { gw };
                Point::new(x, raw.y + slope * (x - raw.x))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/coordinates.rs"]
mod tests;
