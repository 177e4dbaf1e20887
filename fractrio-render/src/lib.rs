pub mod buffer;
pub mod colorizer;
pub mod error;
pub mod export;
pub mod iteration_buffer;
pub mod renderer;

pub use buffer::RenderBuffer;
pub use colorizer::{colorize, colorize_frame, Rgb};
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};
pub use iteration_buffer::IterationBuffer;
pub use renderer::{render_frame, FrameResult};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
