use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::encode::sink::{FrameSink, PngDirSink, SinkConfig};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BorderError, BorderResult};
use crate::geometry::coordinates::Coordinates;
use crate::geometry::dimensions::Dimensions;
use crate::gradient::gradient::Gradient;
use crate::palette::aspect::CanvasSize;
use crate::palette::color::ColorSpec;
use crate::render::frame::FrameRGBA;
use crate::render::layer::Layer;

/// Knobs for one [`CameraBorder`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderOpts {
    /// Angular distance between sampled axes, in degrees. Must divide 180.
    pub degree_step: u32,
    /// Gaussian blur applied after trimming, if set.
    pub blur_sigma: Option<f32>,
    /// Overlay 1px outlines of the layout rectangles and the gradient axis.
    pub guides: bool,
    /// Render frames on a rayon thread pool.
    pub parallel: bool,
    /// Worker count for the parallel path; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl BorderOpts {
    /// Step used when none is given: 30 axes over the half turn.
    pub const DEFAULT_DEGREE_STEP: u32 = 6;
}

impl Default for BorderOpts {
    fn default() -> Self {
        Self {
            degree_step: Self::DEFAULT_DEGREE_STEP,
            blur_sigma: None,
            guides: false,
            parallel: false,
            threads: None,
        }
    }
}

/// A rendered border animation: two frames per sampled axis, held in memory until saved.
///
/// Frame order is every primary→secondary frame in angle order, then every secondary→primary
/// frame in angle order.
#[derive(Debug)]
pub struct CameraBorder {
    dims: Dimensions,
    primary: Rgb8,
    secondary: Rgb8,
    coordinates: Coordinates,
    frames: Vec<FrameRGBA>,
}

impl CameraBorder {
    /// Render every frame without touching the filesystem.
    ///
    /// Colors and options are validated before any canvas is allocated.
    #[tracing::instrument(skip_all, fields(degree_step = opts.degree_step, parallel = opts.parallel))]
    pub fn render(
        size: impl Into<CanvasSize>,
        primary: impl Into<ColorSpec>,
        secondary: impl Into<ColorSpec>,
        opts: &BorderOpts,
    ) -> BorderResult<Self> {
        let primary = primary.into().resolve()?;
        let secondary = secondary.into().resolve()?;
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };

        let dims = size.into().resolve()?;
        if let Some(sigma) = opts.blur_sigma {
            Layer::blur_radius(dims, sigma)?;
        }
        let coordinates = Coordinates::generate(dims, opts.degree_step)?;

        let forward = coordinates
            .pairs()
            .map(|(start, end)| Gradient::new(start, end, primary, secondary))
            .collect::<BorderResult<Vec<_>>>()?;
        let gradients: Vec<Gradient> = forward
            .iter()
            .cloned()
            .chain(forward.iter().map(Gradient::reversed))
            .collect();

        let frames = match pool {
            Some(pool) => pool.install(|| {
                gradients
                    .par_iter()
                    .map(|g| render_frame(dims, g, opts))
                    .collect::<BorderResult<Vec<_>>>()
            })?,
            None => gradients
                .iter()
                .map(|g| render_frame(dims, g, opts))
                .collect::<BorderResult<Vec<_>>>()?,
        };

        tracing::info!(
            width = dims.width(),
            height = dims.height(),
            frames = frames.len(),
            "rendered border frames"
        );
        Ok(Self {
            dims,
            primary,
            secondary,
            coordinates,
            frames,
        })
    }

    /// Render every frame and write them as numbered PNGs into `output_dir`.
    pub fn create(
        size: impl Into<CanvasSize>,
        primary: impl Into<ColorSpec>,
        secondary: impl Into<ColorSpec>,
        output_dir: impl AsRef<Path>,
        opts: &BorderOpts,
    ) -> BorderResult<Self> {
        let border = Self::render(size, primary, secondary, opts)?;
        border.save(output_dir)?;
        Ok(border)
    }

    /// Write every frame into `dir` (created if missing) as `00.png`, `01.png`, ...
    ///
    /// Returns the written paths in frame order. Frames already written stay on disk if a later
    /// write fails.
    #[tracing::instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn save(&self, dir: impl AsRef<Path>) -> BorderResult<Vec<PathBuf>> {
        let mut sink = PngDirSink::new(dir.as_ref());
        self.write_to(&mut sink)?;
        tracing::info!(frames = sink.written().len(), "saved border frames");
        Ok(sink.into_written())
    }

    /// Push every frame, in order, through `sink`.
    pub fn write_to(&self, sink: &mut dyn FrameSink) -> BorderResult<()> {
        sink.begin(SinkConfig {
            width: self.dims.width(),
            height: self.dims.height(),
            frame_count: self.frames.len(),
        })?;
        for (idx, frame) in self.frames.iter().enumerate() {
            sink.push_frame(idx, frame)?;
        }
        sink.end()
    }

    /// Canvas geometry.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Color at the start of each forward sweep.
    pub fn primary(&self) -> Rgb8 {
        self.primary
    }

    /// Color at the end of each forward sweep.
    pub fn secondary(&self) -> Rgb8 {
        self.secondary
    }

    /// Sampled axes.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Rendered frames in output order.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Consume the run, keeping only the frames.
    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames
    }
}

/// Render one frame: gradient fill, trim, then the optional blur and guide passes.
pub fn render_frame(
    dims: Dimensions,
    gradient: &Gradient,
    opts: &BorderOpts,
) -> BorderResult<FrameRGBA> {
    tracing::debug!(start = ?gradient.start(), end = ?gradient.end(), "render frame");
    let mut layer = Layer::new(dims)?;
    layer.apply_gradient(gradient);
    layer.trim()?;
    if let Some(sigma) = opts.blur_sigma {
        layer.blur(sigma)?;
    }
    if opts.guides {
        layer.draw_guides(gradient);
    }
    layer.into_frame()
}

fn build_thread_pool(threads: Option<usize>) -> BorderResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BorderError::validation(
            "'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BorderError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/border/camera_border.rs"]
mod tests;
