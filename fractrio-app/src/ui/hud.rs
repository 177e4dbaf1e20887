use eframe::egui;

use crate::app::{FractrioApp, HUD_CORNER_RADIUS, HUD_MARGIN};
use crate::render_bridge::RenderPhase;

impl FractrioApp {
    /// Top-left: coordinate under the pointer. This box sits over the probe
    /// hot-zone, where the variant's reference center is shown.
    pub(crate) fn show_coordinate_hud(&self, ctx: &egui::Context) {
        let text = match self.cursor_complex {
            Some(c) => format!("x: {:.8}, y: {:.8}", c.re, c.im),
            None => {
                let c = self.view.center();
                format!("x: {:.8}, y: {:.8}", c.re, c.im)
            }
        };

        egui::Area::new(egui::Id::new("hud_coords"))
            .anchor(egui::Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(128))
                    .inner_margin(egui::Margin::same(5))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(text)
                                .monospace()
                                .color(egui::Color32::WHITE),
                        );
                    });
            });
    }

    /// Bottom-centre: zoom, render phase and timing, last status message.
    pub(crate) fn show_render_status(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("hud_render"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -HUD_MARGIN])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(160))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.set_min_width(180.0);
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(200, 200, 200));
                        ui.style_mut().spacing.item_spacing.y = 2.0;

                        let phase_color = match self.render_phase {
                            RenderPhase::Idle => egui::Color32::GRAY,
                            RenderPhase::Rendering => egui::Color32::from_rgb(255, 200, 60),
                            RenderPhase::Done => egui::Color32::from_rgb(100, 220, 100),
                        };
                        ui.colored_label(phase_color, self.render_phase.label());
                        ui.label(format!(
                            "{} | zoom {:.3e} (t = {:.2})",
                            self.view.variant(),
                            self.view.zoom(),
                            self.view.zoom_t()
                        ));
                        if self.render_phase == RenderPhase::Done {
                            ui.label(format!(
                                "Time: {:.1} ms",
                                self.render_time.as_secs_f64() * 1000.0
                            ));
                        }
                        if let Some(ref msg) = self.status_message {
                            ui.label(msg);
                        }
                    });
            });
    }
}
