use crate::foundation::core::Point;
use crate::geometry::dimensions::Dimensions;

/// One of the four outer canvas corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// `(0, 0)`.
    TopLeft,
    /// `(width, 0)`.
    TopRight,
    /// `(0, height)`.
    BottomLeft,
    /// `(width, height)`.
    BottomRight,
}

/// Canvas region selected by splitting along both midlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-left.
    First = 0,
    /// Upper-right.
    Second = 1,
    /// Lower-left.
    Third = 2,
    /// Lower-right.
    Fourth = 3,
}

#[derive(Clone, Copy, Debug)]
enum EdgeX {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
enum EdgeY {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug)]
struct QuadrantInfo {
    corner: Corner,
    edge_x: EdgeX,
    edge_y: EdgeY,
    // Unit step from this quadrant toward the mirrored one.
    step: (f64, f64),
}

const QUADRANT_TABLE: [QuadrantInfo; 4] = [
    QuadrantInfo {
        corner: Corner::TopLeft,
        edge_x: EdgeX::Left,
        edge_y: EdgeY::Top,
        step: (1.0, 1.0),
    },
    QuadrantInfo {
        corner: Corner::TopRight,
        edge_x: EdgeX::Right,
        edge_y: EdgeY::Top,
        step: (-1.0, 1.0),
    },
    QuadrantInfo {
        corner: Corner::BottomLeft,
        edge_x: EdgeX::Left,
        edge_y: EdgeY::Bottom,
        step: (1.0, -1.0),
    },
    QuadrantInfo {
        corner: Corner::BottomRight,
        edge_x: EdgeX::Right,
        edge_y: EdgeY::Bottom,
        step: (-1.0, -1.0),
    },
];

impl Quadrant {
    /// All quadrants in table order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    /// Quadrant containing `p`. Points on a midline fall into the right / lower side.
    pub fn of(p: Point, dims: Dimensions) -> Self {
        let c = dims.center();
        match (p.x < c.x, p.y < c.y) {
            (true, true) => Quadrant::First,
            (false, true) => Quadrant::Second,
            (true, false) => Quadrant::Third,
            (false, false) => Quadrant::Fourth,
        }
    }

    fn info(self) -> &'static QuadrantInfo {
        &QUADRANT_TABLE[self as usize]
    }

    /// Canvas corner owned by this quadrant.
    pub fn corner(self) -> Corner {
        self.info().corner
    }

    /// Whether the quadrant lies left of the vertical midline.
    pub fn is_left(self) -> bool {
        matches!(self.info().edge_x, EdgeX::Left)
    }

    /// Whether the quadrant lies above the horizontal midline.
    pub fn is_top(self) -> bool {
        matches!(self.info().edge_y, EdgeY::Top)
    }

    /// Signs `(sx, sy)` of a step that moves from this quadrant toward the opposite one.
    pub fn step_signs(self) -> (f64, f64) {
        self.info().step
    }

    /// The vertical canvas edge (`x = 0` or `x = width`) on this quadrant's side.
    pub fn edge_x(self, dims: Dimensions) -> f64 {
        match self.info().edge_x {
            EdgeX::Left => 0.0,
            EdgeX::Right => f64::from(dims.width()),
        }
    }

    /// The horizontal canvas edge (`y = 0` or `y = height`) on this quadrant's side.
    pub fn edge_y(self, dims: Dimensions) -> f64 {
        match self.info().edge_y {
            EdgeY::Top => 0.0,
            EdgeY::Bottom => f64::from(dims.height()),
        }
    }

    /// Intersections of the line through `p` with slope `m` with this quadrant's vertical and
    /// horizontal canvas edges, in that order.
    ///
    /// `m` must be finite and non-zero; callers get that guarantee from
    /// [`SlopeKind::Default`](crate::SlopeKind::Default).
    pub fn intercepts(self, dims: Dimensions, p: Point, m: f64) -> (Point, Point) {
        let x_edge = self.edge_x(dims);
        let y_edge = self.edge_y(dims);
        (
            Point::new(x_edge, p.y + m * (x_edge - p.x)),
            Point::new(p.x + (y_edge - p.y) / m, y_edge),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/quadrant.rs"]
mod tests;
