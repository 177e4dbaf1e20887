use eframe::egui;

use fractrio_core::Variant;

use crate::app::FractrioApp;
use crate::navigation::physical_offset;

impl FractrioApp {
    pub(crate) fn handle_canvas_input(&mut self, response: &egui::Response) {
        let ppp = response.ctx.pixels_per_point();
        let pixel = response.hover_pos().map(|pos| {
            (
                physical_offset(pos.x - response.rect.min.x, ppp),
                physical_offset(pos.y - response.rect.min.y, ppp),
            )
        });
        self.update_probe(pixel);
    }

    /// `1`/`2`/`3` select a variant, `↑`/`↓` step the zoom slider,
    /// `R` re-selects the active variant (full reset).
    pub(crate) fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3];
        for (key, variant) in keys.into_iter().zip(Variant::ALL) {
            if ctx.input(|i| i.key_pressed(key)) {
                self.select_variant(variant);
            }
        }
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.select_variant(self.view.variant());
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.nudge_zoom_slider(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.nudge_zoom_slider(-1);
        }
    }
}
