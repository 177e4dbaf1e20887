pub mod complex;
pub mod error;
pub mod evaluator;
pub mod variant;
pub mod view;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use evaluator::{evaluate, EvalParams, FractalEvaluator, IterationResult, MAX_ITER};
pub use variant::Variant;
pub use view::{SurfaceSize, ViewMapper, ViewSnapshot, HOT_ZONE_SIZE};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
