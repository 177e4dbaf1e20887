use std::sync::mpsc;
use std::time::Duration;

use eframe::egui;
use tracing::debug;

use fractrio_core::{EvalParams, FractalEvaluator, SurfaceSize, ViewSnapshot};
use fractrio_render::{colorize_frame, render_frame, RenderBuffer};

use crate::app::{DisplayedFrame, FractrioApp};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderPhase {
    Idle,
    Rendering,
    Done,
}

impl RenderPhase {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Rendering => "Rendering\u{2026}",
            Self::Done => "Done",
        }
    }
}

/// A frame to render. The view is a copy taken on the UI thread, so the
/// worker never sees a half-applied input.
pub(crate) struct RenderRequest {
    pub(crate) id: u64,
    pub(crate) view: ViewSnapshot,
    pub(crate) surface: SurfaceSize,
    pub(crate) params: EvalParams,
}

pub(crate) struct RenderResponse {
    pub(crate) id: u64,
    pub(crate) view: ViewSnapshot,
    pub(crate) surface: SurfaceSize,
    pub(crate) max_iterations: u32,
    pub(crate) pixels: RenderBuffer,
    pub(crate) elapsed: Duration,
}

// ---------------------------------------------------------------------------
// impl FractrioApp: render dispatch & polling
// ---------------------------------------------------------------------------

impl FractrioApp {
    pub(crate) fn request_render(&mut self) {
        let Some(surface) = self.surface else {
            return;
        };
        self.render_id += 1;

        let view = self.view.snapshot();
        debug!(
            id = self.render_id,
            variant = %view.variant(),
            zoom = view.zoom(),
            width = surface.width(),
            height = surface.height(),
            "Requesting render"
        );

        let req = RenderRequest {
            id: self.render_id,
            view,
            surface,
            params: self.params,
        };

        let _ = self.tx_request.send(req);
        self.render_phase = RenderPhase::Rendering;
        self.needs_render = false;
    }

    pub(crate) fn poll_responses(&mut self, ctx: &egui::Context) {
        while let Ok(resp) = self.rx_response.try_recv() {
            if resp.id == self.render_id {
                self.apply_result(ctx, resp);
                self.render_phase = RenderPhase::Done;
            }
        }
    }

    fn apply_result(&mut self, ctx: &egui::Context, resp: RenderResponse) {
        self.render_time = resp.elapsed;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [resp.pixels.width as usize, resp.pixels.height as usize],
            &resp.pixels.pixels,
        );
        match self.texture {
            Some(ref mut tex) => tex.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("fractal", image, egui::TextureOptions::LINEAR));
            }
        }
        self.frame = Some(DisplayedFrame {
            view: resp.view,
            surface: resp.surface,
            max_iterations: resp.max_iterations,
            pixels: resp.pixels,
        });
    }
}

// ---------------------------------------------------------------------------
// Background worker
// ---------------------------------------------------------------------------

/// Keep only the newest queued request.
fn drain_latest<T>(initial: T, rx: &mpsc::Receiver<T>) -> T {
    let mut req = initial;
    while let Ok(newer) = rx.try_recv() {
        req = newer;
    }
    req
}

/// Render + colorize requests until the request sender is dropped.
pub(crate) fn render_worker(
    ctx: egui::Context,
    rx: mpsc::Receiver<RenderRequest>,
    tx: mpsc::Sender<RenderResponse>,
) {
    debug!("Render worker started");
    while let Ok(initial) = rx.recv() {
        let req = drain_latest(initial, &rx);
        let evaluator = FractalEvaluator::new(req.params);
        let result = render_frame(&evaluator, &req.view, req.surface);
        let pixels = colorize_frame(&result.iterations);

        let resp = RenderResponse {
            id: req.id,
            view: req.view,
            surface: req.surface,
            max_iterations: req.params.max_iterations(),
            pixels,
            elapsed: result.elapsed,
        };
        if tx.send(resp).is_err() {
            return;
        }
        ctx.request_repaint();
    }
    debug!("Render worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_latest_keeps_newest() {
        let (tx, rx) = mpsc::channel();
        for i in 1..=4 {
            tx.send(i).unwrap();
        }
        let first = rx.recv().unwrap();
        assert_eq!(drain_latest(first, &rx), 4);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drain_latest_with_empty_queue_returns_initial() {
        let (_tx, rx) = mpsc::channel::<u32>();
        assert_eq!(drain_latest(7, &rx), 7);
    }
}
