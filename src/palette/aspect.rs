use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BorderError, BorderResult};
use crate::geometry::dimensions::Dimensions;

/// Canvas aspect-ratio presets. All presets share a 1120px width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    /// `1:1`, 1120x1120.
    OneByOne,
    /// `4:3`, 1120x840.
    FourByThree,
    /// `16:9`, 1120x700.
    #[default]
    SixteenByNine,
}

impl AspectRatio {
    /// All presets.
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::OneByOne,
        AspectRatio::FourByThree,
        AspectRatio::SixteenByNine,
    ];

    /// The `W:H` label accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::OneByOne => "1:1",
            AspectRatio::FourByThree => "4:3",
            AspectRatio::SixteenByNine => "16:9",
        }
    }

    /// Pixel size `(width, height)` of the preset.
    pub fn size(self) -> (u32, u32) {
        match self {
            AspectRatio::OneByOne => (1120, 1120),
            AspectRatio::FourByThree => (1120, 840),
            AspectRatio::SixteenByNine => (1120, 700),
        }
    }

    /// Validated dimensions for the preset.
    pub fn dimensions(self) -> BorderResult<Dimensions> {
        let (w, h) = self.size();
        Dimensions::new(w, h)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| {
                BorderError::config(format!(
                    "unknown aspect ratio \"{s}\" (expected one of: {})",
                    Self::ALL.map(AspectRatio::label).join(", ")
                ))
            })
    }
}

/// Either a preset or an explicit canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasSize {
    /// Size taken from an aspect-ratio preset.
    Aspect(AspectRatio),
    /// Caller-provided pixel size.
    Explicit {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl CanvasSize {
    /// Validate and build the canvas dimensions.
    pub fn resolve(self) -> BorderResult<Dimensions> {
        match self {
            CanvasSize::Aspect(a) => a.dimensions(),
            CanvasSize::Explicit { width, height } => Dimensions::new(width, height),
        }
    }
}

impl From<AspectRatio> for CanvasSize {
    fn from(a: AspectRatio) -> Self {
        CanvasSize::Aspect(a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/aspect.rs"]
mod tests;
