//! Wheel Renderer — draws the wheel onto an allocated square region, plus
//! the spin button and the winner result row.
//!
//! Three draw modes, matching the wheel's state:
//! - empty: dark disc with centered "No items"
//! - idle/spinning: equal segments at the current rotation with radial,
//!   word-wrapped labels
//! - winner overlay: the whole disc in the winner's color with a glow,
//!   bold border and the scaled, wrapped winner title over a backdrop

use eframe::egui::{self, epaint, Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Vec2};

use spinwheel::item::Item;
use spinwheel::spin::segment_angle;
use spinwheel::wheel::{color_for_index, wedge_points, wrap_words};

use super::WheelApp;

impl WheelApp {
    pub fn draw_wheel_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            let side = ui
                .available_width()
                .min(ui.available_height() - 80.0)
                .max(120.0);
            let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
            self.draw_wheel(&painter, response.rect);

            ui.add_space(8.0);
            let spin = ui
                .add_enabled(
                    self.spin.is_none(),
                    egui::Button::new("Spin").min_size(egui::vec2(140.0, 32.0)),
                )
                .clicked();
            if spin {
                self.start_spin();
            }

            self.draw_result_row(ui);
        });
    }

    fn draw_result_row(&mut self, ui: &mut egui::Ui) {
        let Some(result) = &self.result else {
            return;
        };
        let (title, url) = (result.title.clone(), result.url.clone());

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Selected:");
            ui.hyperlink_to(&title, &url);

            let hidden = self
                .items
                .iter()
                .find(|it| it.url == url)
                .or_else(|| self.items.iter().find(|it| it.title == title))
                .map(|it| it.hidden)
                .unwrap_or(false);
            let label = if hidden { "Unhide" } else { "Hide" };
            if ui.small_button(label).clicked() {
                self.toggle_result_item();
            }
        });
    }

    // ─── Wheel drawing ───────────────────────────────────────────────────────

    fn draw_wheel(&self, painter: &egui::Painter, rect: Rect) {
        let center = rect.center();
        let radius = rect.width().min(rect.height()) / 2.0 - 8.0;
        let visible = self.visible_items();

        if visible.is_empty() {
            painter.circle_filled(center, radius, Color32::from_rgb(0x22, 0x22, 0x22));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No items",
                FontId::proportional(20.0),
                Color32::WHITE,
            );
            return;
        }

        // Winner overlay mode is exclusive with segment drawing
        if let Some(reveal) = &self.winner {
            if reveal.index < visible.len() {
                self.draw_winner_overlay(
                    painter,
                    center,
                    radius,
                    visible[reveal.index],
                    reveal.index,
                    visible.len(),
                    reveal.scale as f32,
                );
                draw_pointer(painter, center, radius);
                return;
            }
        }

        let n = visible.len();
        let seg = segment_angle(n) as f32;
        let rotation = self.rotation as f32;
        for (i, item) in visible.iter().enumerate() {
            let start = i as f32 * seg + rotation;
            let end = start + seg;
            let fill = color_for_index(i, n);
            if n == 1 {
                painter.circle_filled(center, radius, fill);
            } else {
                painter.add(egui::Shape::convex_polygon(
                    wedge_points(center, radius, start, end),
                    fill,
                    Stroke::NONE,
                ));
            }
            draw_segment_label(painter, center, radius, (start + end) / 2.0, &item.title);
        }

        draw_pointer(painter, center, radius);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_winner_overlay(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        item: &Item,
        index: usize,
        n: usize,
        scale: f32,
    ) {
        let color = color_for_index(index, n);

        // Fading rings stand in for the canvas glow
        for k in 1..=4u32 {
            let alpha = (60 / k) as u8;
            painter.circle_stroke(
                center,
                radius + k as f32 * 4.0,
                Stroke::new(
                    8.0,
                    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha),
                ),
            );
        }
        painter.circle_filled(center, radius, color);
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(6.0, Color32::from_rgba_unmultiplied(255, 255, 255, 230)),
        );

        // Centered winner title, font scaled by the reveal animation
        let max_text_width = radius * 1.2;
        let base_font = (radius / 10.0).floor().max(18.0);
        let font_size = (base_font * scale).floor();
        let font = FontId::proportional(font_size);
        let lines = wrap_words(&item.title, max_text_width, |s| {
            painter
                .layout_no_wrap(s.to_string(), font.clone(), Color32::WHITE)
                .size()
                .x
        });
        let line_height = (font_size * 1.05).floor();
        let block_height = lines.len() as f32 * line_height;

        let mut widest: f32 = 0.0;
        for line in &lines {
            let w = painter
                .layout_no_wrap(line.clone(), font.clone(), Color32::WHITE)
                .size()
                .x;
            widest = widest.max(w);
        }

        // Translucent rounded backdrop sized to the wrapped text block
        let pad_x = (radius * 0.06).floor().max(16.0);
        let pad_y = (radius * 0.03).floor().max(10.0);
        let backdrop = Rect::from_center_size(
            center,
            Vec2::new(
                widest.min(max_text_width) + pad_x * 2.0,
                block_height + pad_y * 2.0,
            ),
        );
        let rounding = Rounding::same((backdrop.height() / 3.0).floor().min(18.0));
        painter.rect(
            backdrop,
            rounding,
            Color32::from_rgba_unmultiplied(0, 0, 0, 115),
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 20)),
        );

        for (i, line) in lines.iter().enumerate() {
            let y = center.y - block_height / 2.0 + i as f32 * line_height + line_height / 2.0;
            let pos = Pos2::new(center.x, y);
            // Offset dark copy stands in for the canvas text stroke/shadow
            painter.text(
                pos + Vec2::new(1.5, 1.5),
                Align2::CENTER_CENTER,
                line,
                font.clone(),
                Color32::from_black_alpha(150),
            );
            painter.text(pos, Align2::CENTER_CENTER, line, font.clone(), Color32::WHITE);
        }
    }
}

/// Word-wrapped label drawn radially inside a segment, rotated to align
/// with the segment's mid-angle.
fn draw_segment_label(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    mid_deg: f32,
    title: &str,
) {
    let mid = mid_deg.to_radians();
    let anchor = Pos2::new(
        center.x + mid.cos() * radius * 0.62,
        center.y + mid.sin() * radius * 0.62,
    );
    let angle = mid + std::f32::consts::FRAC_PI_2;

    let font_size = (radius / 12.0).floor().max(12.0);
    let font = FontId::proportional(font_size);
    let lines = wrap_words(title, radius * 0.6, |s| {
        painter
            .layout_no_wrap(s.to_string(), font.clone(), Color32::WHITE)
            .size()
            .x
    });

    let line_height = (radius / 12.0).floor() + 6.0;
    let block_height = lines.len() as f32 * line_height;
    let (sin_a, cos_a) = angle.sin_cos();
    for (i, line) in lines.iter().enumerate() {
        let y = -block_height / 2.0 + line_height / 2.0 + i as f32 * line_height;
        // Local (0, y) rotated by the label angle
        let offset = Vec2::new(-sin_a * y, cos_a * y);
        rotated_text(painter, anchor + offset, angle, line, font.clone());
    }
}

/// Draw `text` centered at `pos`, rotated by `angle` radians.
fn rotated_text(painter: &egui::Painter, pos: Pos2, angle: f32, text: &str, font: FontId) {
    let galley = painter.layout_no_wrap(text.to_string(), font, Color32::WHITE);
    let size = galley.size();
    let (sin_a, cos_a) = angle.sin_cos();
    // TextShape rotates around the galley's top-left corner; pull that
    // corner back so the rotated block stays centered on `pos`.
    let half = Vec2::new(size.x / 2.0, size.y / 2.0);
    let rotated_half = Vec2::new(
        half.x * cos_a - half.y * sin_a,
        half.x * sin_a + half.y * cos_a,
    );
    let mut shape = epaint::TextShape::new(pos - rotated_half, galley, Color32::WHITE);
    shape.angle = angle;
    painter.add(shape);
}

/// Fixed pointer marker at the top of the wheel (270° in the canvas angle
/// convention).
fn draw_pointer(painter: &egui::Painter, center: Pos2, radius: f32) {
    let tip = Pos2::new(center.x, center.y - radius + 14.0);
    let base_y = center.y - radius - 6.0;
    painter.add(egui::Shape::convex_polygon(
        vec![
            tip,
            Pos2::new(center.x - 10.0, base_y),
            Pos2::new(center.x + 10.0, base_y),
        ],
        Color32::WHITE,
        Stroke::new(1.0, Color32::from_black_alpha(160)),
    ));
}
