//! List View — one row per item with a hide/unhide toggle, plus the live
//! count header.

use eframe::egui;

use super::WheelApp;

impl WheelApp {
    pub fn draw_list(&mut self, ui: &mut egui::Ui) {
        let total = self.items.len();
        let noun = if total == 1 { "Game" } else { "Games" };
        ui.heading(format!("{} {}", total, noun));
        ui.add_space(4.0);

        let mut toggle: Option<usize> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, item) in self.items.iter().enumerate() {
                ui.horizontal(|ui| {
                    let mut title = egui::RichText::new(&item.title);
                    if item.hidden {
                        title = title.color(egui::Color32::DARK_GRAY);
                    }
                    ui.hyperlink_to(title, &item.url);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if item.hidden { "Unhide" } else { "Hide" };
                        if ui.small_button(label).clicked() {
                            toggle = Some(index);
                        }
                    });
                });
            }
        });

        if let Some(index) = toggle {
            self.toggle_hidden(index);
        }
    }
}
