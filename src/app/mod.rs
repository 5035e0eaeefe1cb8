//! `WheelApp` — the top-level egui application state.
//!
//! This module declares the `WheelApp` struct and all state mutation entry
//! points. Rendering is split across the sibling sub-modules:
//!
//! - `controls`   — raw text buffer editor and Paste/Load/Copy/Clear
//! - `list`       — item rows with hide toggles and the games header
//! - `wheel_view` — wheel canvas, spin button, winner result row

pub mod controls;
pub mod list;
pub mod wheel_view;

use std::time::Instant;

use eframe::egui;

use spinwheel::anim;
use spinwheel::buffer;
use spinwheel::item::{self, Item};
use spinwheel::parser;
use spinwheel::spin::{winner_at_pointer, SpinPlan};
use spinwheel::store::Store;

// ─── Application state ───────────────────────────────────────────────────────

/// An in-flight spin: the immutable plan plus its start instant.
pub struct ActiveSpin {
    pub plan: SpinPlan,
    pub started: Instant,
}

/// The winner-reveal overlay while it is animating.
pub struct WinnerReveal {
    /// Index into the visible item set at announcement time.
    pub index: usize,
    pub started: Instant,
    pub scale: f64,
}

/// Winner row shown under the wheel after a spin resolves.
pub struct SpinResult {
    pub title: String,
    pub url: String,
}

/// All session state. Mutated only through the methods below; reset only
/// by explicit user action (Clear) or app restart.
pub struct WheelApp {
    pub input_buffer: String,
    pub items: Vec<Item>,
    pub store: Option<Store>,
    /// Accumulated wheel rotation in degrees. Never reset between spins.
    pub rotation: f64,
    pub spin: Option<ActiveSpin>,
    pub winner: Option<WinnerReveal>,
    pub result: Option<SpinResult>,
    pub alert: Option<String>,
}

impl Default for WheelApp {
    fn default() -> Self {
        Self {
            input_buffer: String::new(),
            items: Vec::new(),
            store: None,
            rotation: 0.0,
            spin: None,
            winner: None,
            result: None,
            alert: None,
        }
    }
}

impl WheelApp {
    /// Build the app and restore the persisted list + hidden flags.
    pub fn new() -> Self {
        let mut app = Self::default();
        app.store = Store::open_default();
        if let Some(store) = &app.store {
            if let Some(mut items) = store.load_items() {
                store.apply_hidden(&mut items);
                app.items = items;
            }
        }
        app
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        item::visible(&self.items)
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            store.save_items(&self.items);
            store.save_hidden(&self.items);
        }
    }

    // ─── Buffer / list operations ────────────────────────────────────────────

    /// Parse the text buffer into the item list.
    pub fn load_from_buffer(&mut self) {
        match parser::parse_lines(self.input_buffer.trim()) {
            Ok(items) => {
                self.items = items;
                if let Some(store) = &self.store {
                    store.apply_hidden(&mut self.items);
                }
                self.persist();
            }
            Err(e) => self.alert = Some(e.to_string()),
        }
    }

    /// Drop everything: items, buffer, result, overlay. Rotation stays.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.persist();
        self.winner = None;
        self.result = None;
        self.input_buffer.clear();
    }

    pub fn paste_clipboard(&mut self) {
        match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(text) if text.is_empty() => {
                self.alert = Some("Clipboard is empty".to_string());
            }
            Ok(text) => self.input_buffer = text,
            Err(e) => {
                log::warn!("clipboard read failed: {}", e);
                self.alert = Some("Failed to read clipboard".to_string());
            }
        }
    }

    pub fn copy_buffer(&mut self) {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(self.input_buffer.clone())) {
            Ok(()) => self.alert = Some("Copied to clipboard".to_string()),
            Err(e) => {
                log::warn!("clipboard write failed: {}", e);
                self.alert = Some("Failed to write to clipboard".to_string());
            }
        }
    }

    /// Flip one item's hidden flag, reconcile the text buffer (best
    /// effort) and persist. The flag flip itself always succeeds.
    pub fn toggle_hidden(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.hidden = !item.hidden;

        let snapshot = self.items[index].clone();
        self.input_buffer = if snapshot.hidden {
            buffer::remove_item_lines(&self.input_buffer, &snapshot)
        } else {
            buffer::append_item_line(&self.input_buffer, &snapshot)
        };

        if let Some(store) = &self.store {
            store.save_hidden(&self.items);
            store.save_items(&self.items);
        }
    }

    /// Toggle from the winner result row: the original item is found by
    /// URL first, then title, and any active overlay is dismissed.
    pub fn toggle_result_item(&mut self) {
        let Some(result) = &self.result else {
            return;
        };
        let index = self
            .items
            .iter()
            .position(|it| it.url == result.url)
            .or_else(|| self.items.iter().position(|it| it.title == result.title));
        let Some(index) = index else {
            return;
        };
        self.toggle_hidden(index);
        self.winner = None;
    }

    // ─── Spin lifecycle ──────────────────────────────────────────────────────

    /// Start a spin. Rejected while one is already running; alerts when
    /// there is nothing visible to spin.
    pub fn start_spin(&mut self) {
        if self.spin.is_some() {
            return;
        }
        let visible_count = self.visible_items().len();
        if visible_count == 0 {
            self.alert = Some("No visible items to spin".to_string());
            return;
        }
        self.result = None;
        self.winner = None;
        if let Some(plan) = SpinPlan::plan(self.rotation, visible_count, &mut rand::thread_rng()) {
            log::debug!(
                "spin: {} items, winner {}, {:.0} ms",
                visible_count,
                plan.winner_index,
                plan.duration_ms
            );
            self.spin = Some(ActiveSpin {
                plan,
                started: Instant::now(),
            });
        }
    }

    /// Advance the two animation loops one frame. They are sequential by
    /// construction: the winner reveal only starts after the spin's final
    /// frame has landed on the target rotation.
    fn tick(&mut self, ctx: &egui::Context) {
        let mut spin_done = false;
        if let Some(active) = &self.spin {
            let elapsed = active.started.elapsed().as_secs_f64() * 1000.0;
            self.rotation = active.plan.rotation_at(elapsed);
            spin_done = active.plan.finished(elapsed);
            ctx.request_repaint();
        }
        if spin_done {
            self.spin = None;
            self.announce_winner();
        }

        let mut reveal_done = false;
        if let Some(reveal) = &mut self.winner {
            let elapsed = reveal.started.elapsed().as_secs_f64() * 1000.0;
            match anim::winner_scale_at(elapsed) {
                Some(scale) => reveal.scale = scale,
                None => reveal_done = true,
            }
            ctx.request_repaint();
        }
        if reveal_done {
            self.winner = None;
        }
    }

    /// The segment under the pointer at the final rotation is authoritative
    /// for the announcement, not the index chosen when the spin started.
    fn announce_winner(&mut self) {
        let (index, title, url) = {
            let visible = self.visible_items();
            if visible.is_empty() {
                return;
            }
            let index = winner_at_pointer(self.rotation, visible.len());
            let chosen = visible[index];
            (index, chosen.title.clone(), chosen.url.clone())
        };
        self.result = Some(SpinResult { title, url });
        self.winner = Some(WinnerReveal {
            index,
            started: Instant::now(),
            scale: 1.0,
        });
    }

    // ─── Alerts ──────────────────────────────────────────────────────────────

    fn draw_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        let mut dismiss = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&message);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismiss = true;
                    }
                });
            });
        if dismiss {
            self.alert = None;
        }
    }
}

impl eframe::App for WheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);

        egui::SidePanel::left("list_panel")
            .default_width(340.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
                ui.separator();
                self.draw_list(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_wheel_panel(ui);
        });

        self.draw_alert(ctx);
    }
}
