use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use fractrio_core::{FractalEvaluator, IterationResult, SurfaceSize, ViewSnapshot};

use crate::iteration_buffer::IterationBuffer;

/// The result of a full-frame render.
///
/// Contains raw escape times (no coloring); pass the buffer to
/// [`colorize_frame`](crate::colorize_frame) for displayable pixels.
#[derive(Debug, Clone)]
pub struct FrameResult {
    pub iterations: IterationBuffer,
    pub elapsed: Duration,
}

/// Evaluate one row of pixel centers into `row`.
fn render_row(
    evaluator: &FractalEvaluator,
    view: &ViewSnapshot,
    surface: SurfaceSize,
    aspect: f64,
    py: u32,
    row: &mut [IterationResult],
) {
    for (px, slot) in row.iter_mut().enumerate() {
        let c = view.forward(surface.pixel_center_to_ndc(px as u32, py), aspect);
        *slot = evaluator.evaluate(c, view.variant());
    }
}

/// Render a full frame for `view` on `surface`.
///
/// Every pixel samples its center through the same
/// [`ViewSnapshot::forward`] mapping used by pointer probing. Rows are
/// evaluated in parallel via Rayon; pixels are independent so the output
/// does not depend on scheduling.
pub fn render_frame(
    evaluator: &FractalEvaluator,
    view: &ViewSnapshot,
    surface: SurfaceSize,
) -> FrameResult {
    let start = Instant::now();
    let max_iter = evaluator.params().max_iterations();
    let aspect = surface.aspect();
    debug!(
        width = surface.width(),
        height = surface.height(),
        variant = %view.variant(),
        zoom = view.zoom(),
        max_iter,
        "Starting frame render"
    );

    let mut iterations = IterationBuffer::new(surface.width(), surface.height(), max_iter);
    iterations
        .data
        .par_chunks_mut(surface.width() as usize)
        .enumerate()
        .for_each(|(py, row)| render_row(evaluator, view, surface, aspect, py as u32, row));

    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        interior = iterations.interior_count(),
        "Render complete"
    );

    FrameResult {
        iterations,
        elapsed,
    }
}
