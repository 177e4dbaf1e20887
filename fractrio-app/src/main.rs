mod app;
mod app_dir;
mod input;
mod navigation;
mod preferences;
mod render_bridge;
mod ui;

fn main() -> eframe::Result {
    app::run()
}
