use eframe::egui;

mod app;
mod tabs;
mod theme;
mod utils;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Nuitka Forge"),
        ..Default::default()
    };
    eframe::run_native(
        "Nuitka Forge",
        options,
        Box::new(|_cc| Box::new(app::ForgeApp::default())),
    )
}
