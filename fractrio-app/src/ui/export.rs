use tracing::{error, info};

use fractrio_render::{export_png, ExportMetadata};

use crate::app::FractrioApp;
use crate::app_dir;

impl FractrioApp {
    /// Ask for a destination and write the frame on screen as a PNG.
    pub(crate) fn export_current_frame(&mut self) {
        let Some(ref frame) = self.frame else {
            return;
        };

        let default_name = format!(
            "fractrio_{}_t{:03}.png",
            frame.view.variant().label().to_lowercase().replace(' ', "_"),
            (frame.view.zoom_t() * 100.0).round() as u32
        );
        let images_dir = app_dir::images_directory();
        if let Err(e) = std::fs::create_dir_all(&images_dir) {
            error!("Failed to create {}: {e}", images_dir.display());
        }
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_directory(&images_dir)
            .set_file_name(&default_name)
            .save_file()
        else {
            return;
        };

        let meta = ExportMetadata::from_snapshot(&frame.view, frame.max_iterations, frame.surface);
        self.status_message = Some(match export_png(&frame.pixels, &path, &meta) {
            Ok(()) => {
                info!("Exported {}", path.display());
                format!("Saved {}", path.display())
            }
            Err(e) => {
                error!("Export failed: {e}");
                format!("Export failed: {e}")
            }
        });
    }
}
