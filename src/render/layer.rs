use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{BorderError, BorderResult};
use crate::geometry::dimensions::Dimensions;
use crate::geometry::quadrant::Quadrant;
use crate::gradient::gradient::Gradient;
use crate::gradient::slope::{IntervalAxis, SlopeKind};
use crate::render::blur::{blur_rgba8_premul, kernel_radius};
use crate::render::composite::{make_opaque_in_place, over_in_place, unpremultiply_in_place};
use crate::render::frame::FrameRGBA;

const GUIDE_COLOR: Rgb8 = Rgb8::new(255, 255, 255);

/// One transparent canvas that receives a single gradient.
///
/// Typical lifecycle: [`Layer::new`] -> [`Layer::apply_gradient`] -> [`Layer::trim`] ->
/// optional [`Layer::blur`] / [`Layer::draw_guides`] -> [`Layer::into_frame`].
///
/// Vector operations are recorded into a `vello_cpu` context and rasterized lazily, the next time
/// a pixel pass runs. Rasterized content is composited source-over onto what is already on the
/// canvas, so paint calls may be interleaved with pixel passes.
pub struct Layer {
    dims: Dimensions,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    pending: bool,
    blank: bool,
}

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("dims", &self.dims)
            .field("pending", &self.pending)
            .field("blank", &self.blank)
            .finish_non_exhaustive()
    }
}

impl Layer {
    /// Allocate a fully transparent canvas of `dims`.
    pub fn new(dims: Dimensions) -> BorderResult<Self> {
        let w = u16::try_from(dims.width())
            .map_err(|_| BorderError::render("canvas width exceeds u16"))?;
        let h = u16::try_from(dims.height())
            .map_err(|_| BorderError::render("canvas height exceeds u16"))?;
        Ok(Self {
            dims,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            pending: false,
            blank: true,
        })
    }

    /// Canvas geometry.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Paint `gradient` over the whole canvas: solid fills beyond both ends of the axis, then
    /// one colored line per gradient sample.
    pub fn apply_gradient(&mut self, gradient: &Gradient) {
        self.fill_edges(gradient);
        self.fill_gradient(gradient);
    }

    /// Fill the regions beyond the two ends of the axis with solid color: `primary` on the
    /// start side, `secondary` on the end side.
    pub fn fill_edges(&mut self, gradient: &Gradient) {
        let quadrant = Quadrant::of(gradient.start(), self.dims);
        match gradient.slope_kind() {
            SlopeKind::Horizontal => self.fill_side_strips(gradient, quadrant),
            SlopeKind::Vertical => self.fill_end_strips(gradient, quadrant),
            SlopeKind::Default { perpendicular, .. } => {
                self.fill_corner_triangles(gradient, quadrant, perpendicular)
            }
        }
    }

    /// Draw one line across the canvas per interpolated color, walking from `start` toward `end`.
    pub fn fill_gradient(&mut self, gradient: &Gradient) {
        let quadrant = Quadrant::of(gradient.start(), self.dims);
        match gradient.slope_kind() {
            SlopeKind::Horizontal => self.fill_columns(gradient, quadrant),
            SlopeKind::Vertical => self.fill_rows(gradient, quadrant),
            SlopeKind::Default {
                slope,
                perpendicular,
            } => self.fill_oblique_lines(gradient, quadrant, slope, perpendicular),
        }
    }

    /// Clear the interior rectangle and everything outside the layer rectangle, leaving only the
    /// border band painted.
    ///
    /// Every color painted is opaque, so band pixels left partially covered where anti-aliased
    /// line edges meet are raised to full opacity.
    pub fn trim(&mut self) -> BorderResult<()> {
        self.commit()?;
        let (w, h) = (self.dims.width(), self.dims.height());
        let layer = Dimensions::LAYER_OFFSET;
        let interior = Dimensions::INTERIOR_OFFSET;

        self.clear_region(interior, interior, w - interior, h - interior);
        self.clear_region(0, 0, w, layer);
        self.clear_region(0, h - layer, w, h);
        self.clear_region(0, 0, layer, h);
        self.clear_region(w - layer, 0, w, h);
        make_opaque_in_place(self.pixmap.data_as_u8_slice_mut());
        Ok(())
    }

    /// Kernel radius for blurring a `dims` canvas with `sigma`.
    ///
    /// Sigmas whose kernel reaches past the larger canvas side are rejected.
    pub fn blur_radius(dims: Dimensions, sigma: f32) -> BorderResult<u32> {
        let radius = kernel_radius(sigma)?;
        let limit = dims.width().max(dims.height());
        if radius > limit {
            return Err(BorderError::validation(format!(
                "blur sigma {sigma} needs a {radius}px kernel radius, canvas allows at most {limit}px"
            )));
        }
        Ok(radius)
    }

    /// Gaussian-blur the whole canvas with standard deviation `sigma` (pixels).
    pub fn blur(&mut self, sigma: f32) -> BorderResult<()> {
        let radius = Self::blur_radius(self.dims, sigma)?;
        if radius == 0 {
            return Ok(());
        }
        self.commit()?;
        let out = blur_rgba8_premul(
            self.pixmap.data_as_u8_slice(),
            self.dims.width(),
            self.dims.height(),
            radius,
            sigma,
        )?;
        self.pixmap.data_as_u8_slice_mut().copy_from_slice(&out);
        Ok(())
    }

    /// Outline the layer, gradient and interior rectangles and the gradient axis in 1px white.
    pub fn draw_guides(&mut self, gradient: &Gradient) {
        for rect in [
            self.dims.layer_rect(),
            self.dims.gradient_rect(),
            self.dims.interior_rect(),
        ] {
            // Inset by half a pixel so the 1px stroke lands on whole pixels.
            let r = rect.inset(-0.5);
            self.stroke_polyline(
                &[
                    Point::new(r.x0, r.y0),
                    Point::new(r.x1, r.y0),
                    Point::new(r.x1, r.y1),
                    Point::new(r.x0, r.y1),
                ],
                true,
                1.0,
                GUIDE_COLOR,
            );
        }
        self.stroke_polyline(
            &[gradient.start(), gradient.end()],
            false,
            1.0,
            GUIDE_COLOR,
        );
    }

    /// Rasterize anything pending and hand back the canvas as straight-alpha RGBA8.
    pub fn into_frame(mut self) -> BorderResult<FrameRGBA> {
        self.commit()?;
        let mut data = self.pixmap.data_as_u8_slice().to_vec();
        unpremultiply_in_place(&mut data);
        Ok(FrameRGBA {
            width: self.dims.width(),
            height: self.dims.height(),
            data,
        })
    }

    fn fill_side_strips(&mut self, gradient: &Gradient, quadrant: Quadrant) {
        let w = f64::from(self.dims.width());
        let h = f64::from(self.dims.height());
        let (xs, xe) = (gradient.start().x.round(), gradient.end().x.round());
        let (start_strip, end_strip) = if quadrant.is_left() {
            (
                kurbo::Rect::new(0.0, 0.0, xs, h),
                kurbo::Rect::new(xe, 0.0, w, h),
            )
        } else {
            (
                kurbo::Rect::new(xs, 0.0, w, h),
                kurbo::Rect::new(0.0, 0.0, xe, h),
            )
        };
        self.fill_rect(start_strip, gradient.primary());
        self.fill_rect(end_strip, gradient.secondary());
    }

    fn fill_end_strips(&mut self, gradient: &Gradient, quadrant: Quadrant) {
        let w = f64::from(self.dims.width());
        let h = f64::from(self.dims.height());
        let (ys, ye) = (gradient.start().y.round(), gradient.end().y.round());
        let (start_strip, end_strip) = if quadrant.is_top() {
            (
                kurbo::Rect::new(0.0, 0.0, w, ys),
                kurbo::Rect::new(0.0, ye, w, h),
            )
        } else {
            (
                kurbo::Rect::new(0.0, ys, w, h),
                kurbo::Rect::new(0.0, 0.0, w, ye),
            )
        };
        self.fill_rect(start_strip, gradient.primary());
        self.fill_rect(end_strip, gradient.secondary());
    }

    // The perpendicular through `start` cuts off the corner of the start quadrant; its mirror
    // image through the center cuts off the opposite corner.
    fn fill_corner_triangles(&mut self, gradient: &Gradient, quadrant: Quadrant, perpendicular: f64) {
        let corner = self.dims.corner(quadrant.corner());
        let (a, b) = quadrant.intercepts(self.dims, gradient.start(), perpendicular);
        self.fill_polygon(&[corner, a, b], gradient.primary());

        let mirrored = [corner, a, b].map(|p| self.dims.invert_point(p));
        self.fill_polygon(&mirrored, gradient.secondary());
    }

    // Horizontal axis: 1px columns stepping from the start column toward the end.
    fn fill_columns(&mut self, gradient: &Gradient, quadrant: Quadrant) {
        let h = f64::from(self.dims.height());
        let x0 = gradient.start().x.round();
        let (sx, _) = quadrant.step_signs();
        for (i, color) in gradient.colors().iter().enumerate() {
            let x = pixel_offset(x0, sx, i);
            self.fill_rect(kurbo::Rect::new(x, 0.0, x + 1.0, h), *color);
        }
    }

    // Vertical axis: 1px rows stepping from the start row toward the end.
    fn fill_rows(&mut self, gradient: &Gradient, quadrant: Quadrant) {
        let w = f64::from(self.dims.width());
        let y0 = gradient.start().y.round();
        let (_, sy) = quadrant.step_signs();
        for (i, color) in gradient.colors().iter().enumerate() {
            let y = pixel_offset(y0, sy, i);
            self.fill_rect(kurbo::Rect::new(0.0, y, w, y + 1.0), *color);
        }
    }

    fn fill_oblique_lines(
        &mut self,
        gradient: &Gradient,
        quadrant: Quadrant,
        slope: f64,
        perpendicular: f64,
    ) {
        let start = gradient.start();
        let step = quadrant.step_signs();
        // Steep axes get wider strokes so neighbouring lines leave no gaps.
        let stroke_width = slope.abs().ceil() + 1.0;
        for (i, color) in gradient.colors().iter().enumerate() {
            let p = point_along_axis(start, slope, gradient.interval_axis(), step, i as f64);
            let (a, b) = quadrant.intercepts(self.dims, p, perpendicular);
            self.stroke_polyline(&[a, b], false, stroke_width, *color);
        }
    }

    fn fill_rect(&mut self, rect: kurbo::Rect, color: Rgb8) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        self.ctx.set_paint(cpu_color(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
        self.pending = true;
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb8) {
        let Some(path) = cpu_path(points, true) else {
            return;
        };
        self.ctx.set_paint(cpu_color(color));
        self.ctx.fill_path(&path);
        self.pending = true;
    }

    fn stroke_polyline(&mut self, points: &[Point], closed: bool, width: f64, color: Rgb8) {
        let Some(path) = cpu_path(points, closed) else {
            return;
        };
        self.ctx.set_paint(cpu_color(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&path);
        self.pending = true;
    }

    // `vello_cpu` renders into a fresh buffer, so once the canvas holds pixels we render into a
    // temporary pixmap and composite it over.
    fn commit(&mut self) -> BorderResult<()> {
        if !self.pending {
            return Ok(());
        }
        self.ctx.flush();
        if self.blank {
            self.ctx.render_to_pixmap(&mut self.pixmap);
        } else {
            let mut tmp = vello_cpu::Pixmap::new(self.ctx.width(), self.ctx.height());
            self.ctx.render_to_pixmap(&mut tmp);
            over_in_place(self.pixmap.data_as_u8_slice_mut(), tmp.data_as_u8_slice())?;
        }
        self.ctx.reset();
        self.pending = false;
        self.blank = false;
        Ok(())
    }

    // Clears the half-open pixel rectangle `[x0, x1) x [y0, y1)` to transparent.
    fn clear_region(&mut self, x0: u32, y0: u32, x1: u32, y1: u32) {
        let w = self.dims.width() as usize;
        let data = self.pixmap.data_as_u8_slice_mut();
        for y in y0 as usize..y1 as usize {
            let row = y * w;
            data[(row + x0 as usize) * 4..(row + x1 as usize) * 4].fill(0);
        }
    }
}

// Column / row index of sample `i` when stepping one pixel at a time from `origin` in direction
// `sign`. Stepping backwards starts on the pixel just before `origin`.
fn pixel_offset(origin: f64, sign: f64, i: usize) -> f64 {
    let i = i as f64;
    if sign > 0.0 {
        origin + i
    } else {
        origin - 1.0 - i
    }
}

// The point on the axis `i` unit steps from `start` along the dominant coordinate.
fn point_along_axis(
    start: Point,
    slope: f64,
    axis: IntervalAxis,
    (sx, sy): (f64, f64),
    i: f64,
) -> Point {
    match axis {
        IntervalAxis::Horizontal => {
            let x = start.x + sx * i;
            Point::new(x, slope * (x - start.x) + start.y)
        }
        IntervalAxis::Vertical => {
            let y = start.y + sy * i;
            Point::new((y - start.y) / slope + start.x, y)
        }
    }
}

fn cpu_color(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn cpu_path(points: &[Point], closed: bool) -> Option<vello_cpu::kurbo::BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() || !points.iter().all(|p| p.is_finite()) {
        return None;
    }
    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(vello_cpu::kurbo::Point::new(first.x, first.y));
    for p in rest {
        path.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
    }
    if closed {
        path.close_path();
    }
    Some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
