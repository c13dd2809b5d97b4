/// Convenience result type used across the crate.
pub type BorderResult<T> = Result<T, BorderError>;

/// Top-level error taxonomy used by the border generator.
#[derive(thiserror::Error, Debug)]
pub enum BorderError {
    /// Invalid user-provided geometry or color data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown preset (aspect ratio, profile) requested by the caller.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while rasterizing or post-processing a canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem failures while persisting frames.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BorderError {
    /// Build a [`BorderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BorderError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BorderError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BorderError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
