//! Wheel geometry and color math.
//!
//! Pure helpers behind the Wheel Renderer: deterministic segment colors,
//! wedge tessellation, and the greedy word-wrap used for both the radial
//! segment labels and the winner overlay. Wrapping is parameterized over a
//! measuring closure so it can be tested without a live font system.

use eframe::egui::{Color32, Pos2};

/// Deterministic segment color: evenly spread hues at fixed
/// saturation/lightness (`hsl(round(360*i/n), 70%, 45%)`).
pub fn color_for_index(i: usize, n: usize) -> Color32 {
    let hue = (360.0 * i as f64 / n as f64).round();
    let (r, g, b) = hsl_to_rgb(hue, 0.70, 0.45);
    Color32::from_rgb(r, g, b)
}

fn hsl_to_rgb(h_deg: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h_deg.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// Fan polygon for one wheel wedge: the center plus an arc sampled every
/// few degrees. Convex for spans up to a half circle, which holds for any
/// wheel of two or more segments (a single segment is drawn as a disc).
pub fn wedge_points(center: Pos2, radius: f32, start_deg: f32, end_deg: f32) -> Vec<Pos2> {
    let span = end_deg - start_deg;
    let steps = ((span / 3.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for k in 0..=steps {
        let angle = (start_deg + span * k as f32 / steps as f32).to_radians();
        points.push(Pos2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}

/// Greedy word wrap: pack words onto a line while the measured width stays
/// within `max_width`, break before the word that would exceed it. A single
/// over-long word still gets its own line.
pub fn wrap_words<F>(text: &str, max_width: f32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split(' ') {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if measure(&candidate) > max_width && !line.is_empty() {
            lines.push(line);
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
