use eframe::egui;

use fractrio_core::Variant;

use crate::app::{FractrioApp, HUD_CORNER_RADIUS, HUD_MARGIN, ZOOM_SLIDER_MAX};

impl FractrioApp {
    /// Top-right panel: variant selector, zoom slider, export.
    pub(crate) fn show_controls(&mut self, ctx: &egui::Context) {
        let mut selected = self.view.variant();
        let mut select_clicked = false;
        let mut slider = self.zoom_slider;
        let mut slider_changed = false;
        let mut export_clicked = false;

        egui::Area::new(egui::Id::new("controls"))
            .anchor(egui::Align2::RIGHT_TOP, [-HUD_MARGIN, HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(160))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));

                        ui.horizontal(|ui| {
                            ui.label("Fractal:");
                            egui::ComboBox::from_id_salt("variant")
                                .selected_text(selected.label())
                                .width(130.0)
                                .show_ui(ui, |ui| {
                                    for v in Variant::ALL {
                                        if ui.selectable_value(&mut selected, v, v.label()).clicked() {
                                            select_clicked = true;
                                        }
                                    }
                                });
                        });

                        slider_changed = ui
                            .add(egui::Slider::new(&mut slider, 0..=ZOOM_SLIDER_MAX).text("Zoom"))
                            .changed();

                        ui.add_space(4.0);
                        export_clicked = ui
                            .add_enabled(self.frame.is_some(), egui::Button::new("Export PNG\u{2026}"))
                            .clicked();
                    });
            });

        // Reselecting the active variant is still a full reset.
        if select_clicked {
            self.select_variant(selected);
        } else if slider_changed {
            self.set_zoom_slider(slider);
        }
        if export_clicked {
            self.export_current_frame();
        }
    }
}
