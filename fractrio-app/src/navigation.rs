use tracing::{debug, info, warn};

use fractrio_core::{SurfaceSize, Variant};

use crate::app::{FractrioApp, ZOOM_SLIDER_MAX};

/// Slider position → zoom fraction `t ∈ [0, 1]`.
pub(crate) fn slider_fraction(value: u32) -> f64 {
    value.min(ZOOM_SLIDER_MAX) as f64 / ZOOM_SLIDER_MAX as f64
}

/// Length in egui points → whole physical pixels (at least one).
pub(crate) fn physical_extent(points: f32, pixels_per_point: f32) -> u32 {
    (points * pixels_per_point).round().max(1.0) as u32
}

/// Pointer offset in egui points → surface pixel coordinate.
pub(crate) fn physical_offset(points: f32, pixels_per_point: f32) -> f64 {
    (points * pixels_per_point) as f64
}

impl FractrioApp {
    /// Switch variant; the view and the slider both reset.
    pub(crate) fn select_variant(&mut self, variant: Variant) {
        self.view.select_variant(variant);
        self.zoom_slider = 0;
        self.needs_render = true;
        info!(variant = %variant, zoom = self.view.zoom(), "Variant changed");
    }

    pub(crate) fn set_zoom_slider(&mut self, value: u32) {
        self.zoom_slider = value.min(ZOOM_SLIDER_MAX);
        self.view.set_zoom_t(slider_fraction(self.zoom_slider));
        self.needs_render = true;
        debug!(slider = self.zoom_slider, zoom = self.view.zoom(), "Zoom changed");
    }

    pub(crate) fn nudge_zoom_slider(&mut self, delta: i32) {
        let next = (self.zoom_slider as i32 + delta).clamp(0, ZOOM_SLIDER_MAX as i32);
        if next as u32 != self.zoom_slider {
            self.set_zoom_slider(next as u32);
        }
    }

    /// Track the display surface; a size change triggers a new frame.
    pub(crate) fn check_resize(&mut self, width: u32, height: u32) {
        if self.surface.is_some_and(|s| s.width() == width && s.height() == height) {
            return;
        }
        match SurfaceSize::new(width, height) {
            Ok(surface) => {
                debug!(width, height, aspect = surface.aspect(), "Surface resized");
                self.surface = Some(surface);
                self.needs_render = true;
            }
            Err(e) => warn!("Ignoring surface size: {e}"),
        }
    }

    /// Update the coordinate under the pointer (pixel position relative to
    /// the surface's top-left corner).
    pub(crate) fn update_probe(&mut self, pixel: Option<(f64, f64)>) {
        self.cursor_complex = match (pixel, self.surface) {
            (Some(pos), Some(surface)) => Some(self.view.probe(pos, surface)),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_maps_to_unit_interval() {
        assert_eq!(slider_fraction(0), 0.0);
        assert_eq!(slider_fraction(50), 0.5);
        assert_eq!(slider_fraction(100), 1.0);
        assert_eq!(slider_fraction(250), 1.0);
    }

    #[test]
    fn hidpi_surface_uses_physical_pixels() {
        assert_eq!(physical_extent(640.0, 1.0), 640);
        assert_eq!(physical_extent(640.0, 2.0), 1280);
        assert_eq!(physical_extent(333.5, 1.5), 500);
        assert_eq!(physical_extent(0.0, 2.0), 1);
        assert_eq!(physical_offset(50.0, 2.0), 100.0);
    }

    #[test]
    fn pointer_and_surface_share_pixel_units() {
        let ppp = 2.0;
        let surface = SurfaceSize::new(physical_extent(400.0, ppp), physical_extent(300.0, ppp))
            .unwrap();
        let view = fractrio_core::ViewMapper::new(Variant::Mandelbrot);
        // The middle of the panel in points is the middle of the frame in pixels.
        let middle = (physical_offset(200.0, ppp), physical_offset(150.0, ppp));
        assert_eq!(view.probe(middle, surface), view.center());
    }
}
