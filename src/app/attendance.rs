//! Attendance dashboard: stat tiles plus three painted chart tabs.

use eframe::egui;

use homeroom::attendance::AttendanceStats;
use homeroom::chart::{self, ChartConfig};

use crate::ui;
use super::{DashboardApp, StatsTab};

const PRESENT_COLOR: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);
const ABSENT_COLOR: egui::Color32 = egui::Color32::from_rgb(244, 67, 54);
const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(130, 202, 157);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(136, 132, 216);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

impl DashboardApp {
    pub fn draw_attendance(&mut self, ui: &mut egui::Ui) {
        let stats = AttendanceStats::derive(&self.students, &self.weekly);

        ui.horizontal(|ui| {
            ui.heading("Attendance");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{25B6}").clicked() {
                    self.attendance_date += chrono::Duration::days(1);
                }
                ui.label(self.attendance_date.format("%A, %B %-d, %Y").to_string());
                if ui.button("\u{25C0}").clicked() {
                    self.attendance_date -= chrono::Duration::days(1);
                }
            });
        });
        ui.add_space(8.0);

        let tile_width = (ui.available_width() - 3.0 * 8.0) / 4.0;
        let total_color = ui.visuals().strong_text_color();
        ui.horizontal(|ui| {
            ui::stat_tile(
                ui,
                tile_width,
                "TOTAL STUDENTS",
                &stats.total.to_string(),
                total_color,
            );
            ui::stat_tile(ui, tile_width, "PRESENT", &stats.present.to_string(), PRESENT_COLOR);
            ui::stat_tile(ui, tile_width, "ABSENT", &stats.absent.to_string(), ABSENT_COLOR);
            ui::stat_tile(
                ui,
                tile_width,
                "ATTENDANCE RATE",
                &format!("{:.0}%", stats.rate),
                egui::Color32::from_rgb(59, 130, 246),
            );
        });
        ui.add_space(12.0);

        ui.strong("Attendance Statistics");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.stats_tab, StatsTab::Overview, "Overview");
            ui.selectable_value(&mut self.stats_tab, StatsTab::Daily, "Daily");
            ui.selectable_value(&mut self.stats_tab, StatsTab::Trends, "Trends");
        });
        ui.add_space(8.0);

        let width = ui.available_width();
        let config = ChartConfig::for_width(width);
        let height = chart::optimal_height(width);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        match self.stats_tab {
            StatsTab::Overview => draw_overview_donut(&painter, rect, &stats),
            StatsTab::Daily => draw_weekly_bars(&painter, rect, &stats, &config),
            StatsTab::Trends => draw_weekly_line(&painter, rect, &stats, &config),
        }
    }
}

/// Donut of present vs absent with the rate in the hole.
fn draw_overview_donut(painter: &egui::Painter, rect: egui::Rect, stats: &AttendanceStats) {
    if stats.total == 0 {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No students",
            egui::FontId::proportional(14.0),
            AXIS_COLOR,
        );
        return;
    }

    let center = rect.center();
    let radius = (rect.height() * 0.5 - 30.0).min(110.0);
    let present_sweep = std::f32::consts::TAU * stats.present as f32 / stats.total as f32;
    let ring = egui::Stroke::new(22.0, PRESENT_COLOR);
    ui::arc_stroke(painter, center, radius, 0.0, present_sweep, ring);
    ui::arc_stroke(
        painter,
        center,
        radius,
        present_sweep,
        std::f32::consts::TAU - present_sweep,
        egui::Stroke::new(22.0, ABSENT_COLOR),
    );

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        format!("{:.0}%", stats.rate),
        egui::FontId::proportional(26.0),
        painter.ctx().style().visuals.strong_text_color(),
    );

    // Legend under the ring
    let legend_y = center.y + radius + 24.0;
    painter.circle_filled(egui::pos2(center.x - 70.0, legend_y), 5.0, PRESENT_COLOR);
    painter.text(
        egui::pos2(center.x - 60.0, legend_y),
        egui::Align2::LEFT_CENTER,
        format!("Present ({})", stats.present),
        egui::FontId::proportional(12.0),
        AXIS_COLOR,
    );
    painter.circle_filled(egui::pos2(center.x + 40.0, legend_y), 5.0, ABSENT_COLOR);
    painter.text(
        egui::pos2(center.x + 50.0, legend_y),
        egui::Align2::LEFT_CENTER,
        format!("Absent ({})", stats.absent),
        egui::FontId::proportional(12.0),
        AXIS_COLOR,
    );
}

/// Shared plot frame: grid lines plus y tick labels 0..100.
fn draw_rate_frame(
    painter: &egui::Painter,
    rect: egui::Rect,
    config: &ChartConfig,
) -> egui::Rect {
    let plot = egui::Rect::from_min_max(
        rect.min + egui::vec2(config.y_axis_width, config.margin.top),
        rect.max - egui::vec2(config.margin.right, config.x_axis_height),
    );

    for step in 0..=4 {
        let frac = step as f32 / 4.0;
        let y = plot.bottom() - plot.height() * frac;
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            egui::Stroke::new(1.0, GRID_COLOR),
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{}", (frac * 100.0) as u32),
            egui::FontId::proportional(config.y_tick_size),
            AXIS_COLOR,
        );
    }
    plot
}

fn draw_weekly_bars(
    painter: &egui::Painter,
    rect: egui::Rect,
    stats: &AttendanceStats,
    config: &ChartConfig,
) {
    let plot = draw_rate_frame(painter, rect, config);
    let n = stats.weekly_trend.len();
    if n == 0 {
        return;
    }

    let slot = plot.width() / n as f32;
    let bar_width = slot * 0.5;
    for (i, point) in stats.weekly_trend.iter().enumerate() {
        let x = plot.left() + slot * (i as f32 + 0.5);
        let h = plot.height() * (point.rate / 100.0).clamp(0.0, 1.0);
        let bar = egui::Rect::from_min_max(
            egui::pos2(x - bar_width / 2.0, plot.bottom() - h),
            egui::pos2(x + bar_width / 2.0, plot.bottom()),
        );
        painter.rect_filled(bar, 2.0, BAR_COLOR);
        painter.text(
            egui::pos2(x, plot.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            &point.day,
            egui::FontId::proportional(config.x_tick_size),
            AXIS_COLOR,
        );
    }
}

fn draw_weekly_line(
    painter: &egui::Painter,
    rect: egui::Rect,
    stats: &AttendanceStats,
    config: &ChartConfig,
) {
    let plot = draw_rate_frame(painter, rect, config);
    let n = stats.weekly_trend.len();
    if n == 0 {
        return;
    }

    let points: Vec<egui::Pos2> = stats
        .weekly_trend
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = plot.left() + plot.width() * (i as f32 + 0.5) / n as f32;
            let y = plot.bottom() - plot.height() * (point.rate / 100.0).clamp(0.0, 1.0);
            egui::pos2(x, y)
        })
        .collect();

    painter.add(egui::Shape::line(
        points.clone(),
        egui::Stroke::new(config.stroke_width, LINE_COLOR),
    ));
    for (point, pos) in stats.weekly_trend.iter().zip(&points) {
        painter.circle(
            *pos,
            config.dot_radius,
            egui::Color32::WHITE,
            egui::Stroke::new(1.0, LINE_COLOR),
        );
        painter.text(
            egui::pos2(pos.x, plot.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            &point.day,
            egui::FontId::proportional(config.x_tick_size),
            AXIS_COLOR,
        );
    }
}
