use eframe::egui;

mod app;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spinwheel",
        options,
        Box::new(|_cc| Ok(Box::new(app::WheelApp::new()))),
    )
    .expect("Failed to start spinwheel");
}
