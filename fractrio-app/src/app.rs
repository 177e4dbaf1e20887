use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use eframe::egui;
use tracing::info;

use fractrio_core::{Complex, EvalParams, SurfaceSize, ViewMapper, ViewSnapshot};
use fractrio_render::RenderBuffer;

use crate::navigation::physical_extent;
use crate::preferences::AppPreferences;
use crate::render_bridge::{render_worker, RenderPhase, RenderRequest, RenderResponse};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The zoom slider runs over `0..=ZOOM_SLIDER_MAX`; its value divided by this
/// is the zoom fraction `t`.
pub(crate) const ZOOM_SLIDER_MAX: u32 = 100;
pub(crate) const HUD_MARGIN: f32 = 10.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 5.0;

// ---------------------------------------------------------------------------
// Displayed frame
// ---------------------------------------------------------------------------

/// The colorized frame currently on screen, together with the view it was
/// rendered from (used for export metadata).
pub(crate) struct DisplayedFrame {
    pub(crate) view: ViewSnapshot,
    pub(crate) surface: SurfaceSize,
    pub(crate) max_iterations: u32,
    pub(crate) pixels: RenderBuffer,
}

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct FractrioApp {
    pub(crate) preferences: AppPreferences,
    pub(crate) params: EvalParams,

    // View state (single writer: this thread)
    pub(crate) view: ViewMapper,
    pub(crate) zoom_slider: u32,
    pub(crate) surface: Option<SurfaceSize>,
    pub(crate) cursor_complex: Option<Complex>,

    // Rendering
    pub(crate) tx_request: mpsc::Sender<RenderRequest>,
    pub(crate) rx_response: mpsc::Receiver<RenderResponse>,
    pub(crate) render_id: u64,
    pub(crate) needs_render: bool,
    pub(crate) render_phase: RenderPhase,
    pub(crate) render_time: Duration,
    pub(crate) texture: Option<egui::TextureHandle>,
    pub(crate) frame: Option<DisplayedFrame>,

    pub(crate) status_message: Option<String>,
}

impl FractrioApp {
    pub(crate) fn new(egui_ctx: &egui::Context, prefs: AppPreferences) -> Self {
        let (tx_req, rx_req) = mpsc::channel();
        let (tx_resp, rx_resp) = mpsc::channel();

        let ctx = egui_ctx.clone();
        thread::spawn(move || {
            render_worker(ctx, rx_req, tx_resp);
        });

        let params = prefs.eval_params();
        let view = ViewMapper::new(prefs.default_variant);
        info!(
            variant = %view.variant(),
            max_iter = params.max_iterations(),
            "Initial view"
        );

        Self {
            preferences: prefs,
            params,
            view,
            zoom_slider: 0,
            surface: None,
            cursor_complex: None,
            tx_request: tx_req,
            rx_response: rx_resp,
            render_id: 0,
            needs_render: true,
            render_phase: RenderPhase::Idle,
            render_time: Duration::ZERO,
            texture: None,
            frame: None,
            status_message: None,
        }
    }

    fn update_explorer(&mut self, ctx: &egui::Context) {
        self.poll_responses(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let ppp = ctx.pixels_per_point();
                let width = physical_extent(available.x, ppp);
                let height = physical_extent(available.y, ppp);

                self.check_resize(width, height);

                if self.needs_render {
                    self.request_render();
                }

                let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());

                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                if let Some(ref tex) = self.texture {
                    painter.image(tex.id(), response.rect, uv, egui::Color32::WHITE);
                }

                self.handle_canvas_input(&response);
            });

        self.handle_keyboard(ctx);
        self.show_coordinate_hud(ctx);
        self.show_controls(ctx);
        self.show_render_status(ctx);
    }
}

impl eframe::App for FractrioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.preferences.window_width = rect.width();
            self.preferences.window_height = rect.height();
        }
        self.update_explorer(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fractrio");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fractrio")
            .with_inner_size([prefs.window_width, prefs.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Fractrio",
        options,
        Box::new(move |cc| Ok(Box::new(FractrioApp::new(&cc.egui_ctx, prefs)))),
    )
}
