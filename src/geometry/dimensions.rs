use crate::foundation::core::Point;
use crate::foundation::error::{BorderError, BorderResult};
use crate::geometry::quadrant::Corner;

/// Canvas size plus the band rectangles derived from it.
///
/// Three nested rectangles share the canvas center:
///
/// - the *layer* rectangle (inset by [`Dimensions::LAYER_OFFSET`]) is the outer edge of the
///   painted band,
/// - the *gradient* rectangle (inset by [`Dimensions::GRADIENT_OFFSET`]) is where the sweep axes
///   start and end,
/// - the *interior* rectangle (inset by [`Dimensions::INTERIOR_OFFSET`]) is the inner edge of the
///   band.
///
/// Everything outside the layer rectangle and inside the interior rectangle is transparent in a
/// finished frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Inset of the layer rectangle from the canvas edge.
    pub const LAYER_OFFSET: u32 = 70;
    /// Inset of the gradient rectangle from the canvas edge.
    pub const GRADIENT_OFFSET: u32 = 80;
    /// Inset of the interior rectangle from the canvas edge.
    pub const INTERIOR_OFFSET: u32 = 90;

    /// Validate and build dimensions for a `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> BorderResult<Self> {
        let min = Self::INTERIOR_OFFSET * 2;
        if width <= min || height <= min {
            return Err(BorderError::validation(format!(
                "canvas {width}x{height} is too small: both sides must exceed {min}px"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BorderError::validation(format!(
                "canvas {width}x{height} exceeds the {max}px raster limit",
                max = u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Canvas width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Width of the layer rectangle.
    pub fn layer_width(self) -> u32 {
        self.width - Self::LAYER_OFFSET * 2
    }

    /// Height of the layer rectangle.
    pub fn layer_height(self) -> u32 {
        self.height - Self::LAYER_OFFSET * 2
    }

    /// Width of the gradient rectangle.
    pub fn gradient_width(self) -> u32 {
        self.width - Self::GRADIENT_OFFSET * 2
    }

    /// Height of the gradient rectangle.
    pub fn gradient_height(self) -> u32 {
        self.height - Self::GRADIENT_OFFSET * 2
    }

    /// Width of the interior rectangle.
    pub fn interior_width(self) -> u32 {
        self.width - Self::INTERIOR_OFFSET * 2
    }

    /// Height of the interior rectangle.
    pub fn interior_height(self) -> u32 {
        self.height - Self::INTERIOR_OFFSET * 2
    }

    /// Midpoint of the gradient rectangle, in gradient-local coordinates.
    pub fn gradient_center(self) -> Point {
        Point::new(
            f64::from(self.gradient_width()) / 2.0,
            f64::from(self.gradient_height()) / 2.0,
        )
    }

    /// Midpoint of the canvas.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// One of the four outer canvas corners.
    pub fn corner(self, corner: Corner) -> Point {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        match corner {
            Corner::TopLeft => Point::new(0.0, 0.0),
            Corner::TopRight => Point::new(w, 0.0),
            Corner::BottomLeft => Point::new(0.0, h),
            Corner::BottomRight => Point::new(w, h),
        }
    }

    /// Reflect `p` through the canvas center.
    pub fn invert_point(self, p: Point) -> Point {
        Point::new(f64::from(self.width) - p.x, f64::from(self.height) - p.y)
    }

    /// Translate a gradient-local point into canvas coordinates.
    pub fn add_gradient_offset(self, p: Point) -> Point {
        let off = f64::from(Self::GRADIENT_OFFSET);
        Point::new(p.x + off, p.y + off)
    }

    /// Layer rectangle in canvas coordinates.
    pub fn layer_rect(self) -> kurbo::Rect {
        self.inset_rect(Self::LAYER_OFFSET)
    }

    /// Gradient rectangle in canvas coordinates.
    pub fn gradient_rect(self) -> kurbo::Rect {
        self.inset_rect(Self::GRADIENT_OFFSET)
    }

    /// Interior rectangle in canvas coordinates.
    pub fn interior_rect(self) -> kurbo::Rect {
        self.inset_rect(Self::INTERIOR_OFFSET)
    }

    fn inset_rect(self, inset: u32) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(inset),
            f64::from(inset),
            f64::from(self.width - inset),
            f64::from(self.height - inset),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/dimensions.rs"]
mod tests;
