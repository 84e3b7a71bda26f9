//! Generic egui helpers shared across the dashboard views.
//!
//! Stateless drawing utilities: color conversion, rotated text, avatar
//! initials, badges and small text utilities used throughout the app.

use eframe::egui;
use homeroom::directory::initials;

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending
/// `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

// ─── Colors ───────────────────────────────────────────────────────────────────

/// Convert a normalized rgba color to `Color32`, scaling alpha by
/// `opacity`.
pub fn tint(color: [f32; 4], opacity: f32) -> egui::Color32 {
    let a = (color[3] * opacity).clamp(0.0, 1.0);
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (a * 255.0) as u8,
    )
}

/// Scale the alpha channel of an existing color.
pub fn with_opacity(color: egui::Color32, opacity: f32) -> egui::Color32 {
    let a = (color.a() as f32 * opacity.clamp(0.0, 1.0)) as u8;
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

// ─── Geometry ─────────────────────────────────────────────────────────────────

/// Rotate `p` around `center` by `angle` radians.
pub fn rotate_around(p: egui::Pos2, center: egui::Pos2, angle: f32) -> egui::Pos2 {
    let (sin, cos) = angle.sin_cos();
    let d = p - center;
    egui::pos2(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Draw `text` anchored at `pos`, optionally tilted by `angle` radians
/// around its anchor point.
pub fn draw_text(
    painter: &egui::Painter,
    pos: egui::Pos2,
    anchor: egui::Align2,
    text: &str,
    size: f32,
    color: egui::Color32,
    angle: f32,
) {
    let galley = painter.layout_no_wrap(text.to_string(), egui::FontId::proportional(size), color);
    let rect = anchor.anchor_rect(egui::Rect::from_min_size(pos, galley.size()));
    let mut shape = egui::epaint::TextShape::new(rect.min, galley, color);
    shape.angle = angle;
    painter.add(shape);
}

/// Polyline approximation of a circular arc, stroked. Angles are in
/// radians, measured clockwise from the top of the circle.
pub fn arc_stroke(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    stroke: egui::Stroke,
) {
    if sweep.abs() < 1e-4 {
        return;
    }
    let steps = ((sweep.abs() / 0.05).ceil() as usize).max(2);
    let points: Vec<egui::Pos2> = (0..=steps)
        .map(|i| {
            let a = start + sweep * i as f32 / steps as f32 - std::f32::consts::FRAC_PI_2;
            egui::pos2(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    painter.add(egui::Shape::line(points, stroke));
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

/// Paint a circular avatar holding the initials of `name`.
pub fn initials_avatar(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    name: &str,
    fill: egui::Color32,
    text_color: egui::Color32,
) {
    painter.circle_filled(center, radius, fill);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::proportional(radius * 0.9),
        text_color,
    );
}

/// Small pill-shaped status badge.
pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    let galley = ui.painter().layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
    let size = galley.size() + egui::vec2(16.0, 6.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, size.y / 2.0, fill);
    ui.painter()
        .galley(rect.center() - galley.size() / 2.0, galley, egui::Color32::WHITE);
}

/// Section heading with a leading glyph, in the card-header style.
pub fn section_title(ui: &mut egui::Ui, glyph: &str, glyph_color: egui::Color32, title: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(glyph).size(18.0).color(glyph_color));
        ui.heading(title);
    });
}

/// A labelled statistic tile.
pub fn stat_tile(ui: &mut egui::Ui, width: f32, label: &str, value: &str, accent: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 64.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect(
        rect,
        8.0,
        ui.visuals().extreme_bg_color,
        egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
    );
    painter.text(
        rect.left_top() + egui::vec2(12.0, 10.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(11.0),
        ui.visuals().weak_text_color(),
    );
    painter.text(
        rect.left_bottom() + egui::vec2(12.0, -10.0),
        egui::Align2::LEFT_BOTTOM,
        value,
        egui::FontId::proportional(22.0),
        accent,
    );
}
