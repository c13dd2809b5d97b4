use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{BorderError, BorderResult};
use crate::foundation::math::round_channel;
use crate::gradient::slope::{IntervalAxis, SlopeKind};

/// A linear two-color gradient along one axis.
///
/// Built once per (axis, color order) and never mutated. The color map holds `interval + 1`
/// samples, one per parallel line the layer draws, starting at `primary` and ending at
/// `secondary`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    start: Point,
    end: Point,
    primary: Rgb8,
    secondary: Rgb8,
    slope: SlopeKind,
    interval: u32,
    interval_axis: IntervalAxis,
    color_map: Vec<Rgb8>,
}

impl Gradient {
    /// Build the gradient running from `start` (in `primary`) to `end` (in `secondary`).
    pub fn new(start: Point, end: Point, primary: Rgb8, secondary: Rgb8) -> BorderResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(BorderError::validation(format!(
                "gradient axis must have finite endpoints, got {start:?} -> {end:?}"
            )));
        }

        let slope = SlopeKind::classify(start, end);
        let (interval, interval_axis) = interval_of(start, end);
        if interval == 0 {
            return Err(BorderError::validation(format!(
                "gradient axis {start:?} -> {end:?} spans less than one pixel"
            )));
        }

        Ok(Self {
            start,
            end,
            primary,
            secondary,
            slope,
            interval,
            interval_axis,
            color_map: Self::interpolate(interval, primary, secondary).collect(),
        })
    }

    /// The same axis with the two colors swapped.
    pub fn reversed(&self) -> Self {
        Self {
            primary: self.secondary,
            secondary: self.primary,
            color_map: Self::interpolate(self.interval, self.secondary, self.primary).collect(),
            ..self.clone()
        }
    }

    /// Lazily interpolate `interval + 1` colors from `primary` to `secondary` inclusive.
    ///
    /// Channels are interpolated independently and rounded to the nearest integer.
    pub fn interpolate(
        interval: u32,
        primary: Rgb8,
        secondary: Rgb8,
    ) -> impl Iterator<Item = Rgb8> + Clone {
        let steps = f64::from(interval.max(1));
        let p = primary.to_array().map(f64::from);
        let delta = {
            let s = secondary.to_array().map(f64::from);
            [
                (s[0] - p[0]) / steps,
                (s[1] - p[1]) / steps,
                (s[2] - p[2]) / steps,
            ]
        };
        (0..=interval).map(move |i| {
            let t = f64::from(i);
            Rgb8::new(
                round_channel(p[0] + delta[0] * t),
                round_channel(p[1] + delta[1] * t),
                round_channel(p[2] + delta[2] * t),
            )
        })
    }

    /// Axis origin.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Axis end.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Color at `start`.
    pub fn primary(&self) -> Rgb8 {
        self.primary
    }

    /// Color at `end`.
    pub fn secondary(&self) -> Rgb8 {
        self.secondary
    }

    /// Slope classification of the axis.
    pub fn slope_kind(&self) -> SlopeKind {
        self.slope
    }

    /// Number of unit steps along the dominant axis.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// The dominant axis.
    pub fn interval_axis(&self) -> IntervalAxis {
        self.interval_axis
    }

    /// Interpolated colors, `interval + 1` of them.
    pub fn colors(&self) -> &[Rgb8] {
        &self.color_map
    }
}

fn interval_of(start: Point, end: Point) -> (u32, IntervalAxis) {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let axis = if dx > dy {
        IntervalAxis::Horizontal
    } else {
        IntervalAxis::Vertical
    };
    (dx.max(dy).round() as u32, axis)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/gradient.rs"]
mod tests;
