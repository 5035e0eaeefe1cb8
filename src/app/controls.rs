//! Text buffer editor and the Paste / Load / Copy / Clear controls.

use eframe::egui;

use super::WheelApp;

impl WheelApp {
    pub fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::multiline(&mut self.input_buffer)
                .hint_text("title<TAB>url — or bare URLs, one per line")
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Paste").clicked() {
                self.paste_clipboard();
            }
            if ui.button("Load").clicked() {
                self.load_from_buffer();
            }
            if ui.button("Copy").clicked() {
                self.copy_buffer();
            }
            if ui.button("Clear").clicked() {
                self.clear_all();
            }
        });
    }
}
