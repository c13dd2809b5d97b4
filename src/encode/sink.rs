use crate::foundation::error::{BorderError, BorderResult};
use crate::render::frame::FrameRGBA;
use std::path::{Path, PathBuf};

/// Configuration provided to a [`FrameSink`] before any frame is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
}

/// Sink contract for consuming rendered frames in order.
///
/// Ordering contract: `push_frame` is called with indices `0, 1, 2, ...` in strictly increasing
/// order, between exactly one `begin` and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BorderResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> BorderResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> BorderResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, FrameRGBA)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(usize, FrameRGBA)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BorderResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> BorderResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> BorderResult<()> {
        Ok(())
    }
}

/// Writes each frame as a numbered PNG (`00.png`, `01.png`, ...) into one directory.
///
/// The directory is created on `begin` if missing. Existing files with the same names are
/// overwritten.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Consume the sink, returning the written paths.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }

    /// File name used for frame `idx`: two-digit zero-padded, wider when needed.
    pub fn frame_file_name(idx: usize) -> String {
        format!("{idx:02}.png")
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> BorderResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            BorderError::io(format!(
                "failed to create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.written.clear();
        self.written.reserve(cfg.frame_count);
        tracing::debug!(dir = %self.dir.display(), frames = cfg.frame_count, "png sink ready");
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> BorderResult<()> {
        let path = self.dir.join(Self::frame_file_name(idx));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| BorderError::io(format!("write png '{}': {e}", path.display())))?;
        tracing::trace!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> BorderResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
