use thiserror::Error;

/// Errors originating from the core fractal engine.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid surface size: {width}×{height} (both must be > 0)")]
    InvalidSurface { width: u32, height: u32 },

    #[error("unknown fractal variant: {0:?}")]
    UnknownVariant(String),
}
