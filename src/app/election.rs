//! Election portal: election cards, the animated leaderboard podium,
//! the trending-votes chart and the recent-voters list.
//!
//! The reveal timeline owns every transform painted on the podium
//! region; this module only maps `SlotVisual` targets to egui shapes.

use eframe::egui;

use homeroom::anim;
use homeroom::chart::{self, ChartConfig, LegendPosition, SERIES_PALETTE};
use homeroom::election::particles::{Burst, BurstRng, ParticleShape};
use homeroom::election::ranking::{self, RankedEntry};
use homeroom::election::reveal::{RevealEvent, RevealTimeline, SlotVisual};
use homeroom::model::{Candidate, Election, ElectionStatus, Voter};

use crate::ui;
use super::DashboardApp;

// ─── Palette ─────────────────────────────────────────────────────────────────

const GOLD: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
const GREEN: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

/// Card fill / border / badge color per podium slot (winner, runner-up,
/// third).
const CARD_FILL: [egui::Color32; 3] = [
    egui::Color32::from_rgb(255, 251, 235),
    egui::Color32::from_rgb(248, 250, 252),
    egui::Color32::from_rgb(255, 247, 237),
];
const CARD_BORDER: [egui::Color32; 3] = [
    egui::Color32::from_rgb(253, 230, 138),
    egui::Color32::from_rgb(226, 232, 240),
    egui::Color32::from_rgb(253, 186, 116),
];
const BADGE_FILL: [egui::Color32; 3] = [
    egui::Color32::from_rgb(245, 158, 11),
    egui::Color32::from_rgb(148, 163, 184),
    egui::Color32::from_rgb(180, 83, 9),
];

fn status_color(status: ElectionStatus) -> egui::Color32 {
    match status {
        ElectionStatus::Hidden => egui::Color32::from_rgb(107, 114, 128),
        ElectionStatus::Registration => egui::Color32::from_rgb(234, 179, 8),
        ElectionStatus::Ongoing => GREEN,
        ElectionStatus::Completed => egui::Color32::from_rgb(59, 130, 246),
    }
}

// ─── Entrance stagger (election cards / voters rows) ─────────────────────────

const CARD_STAGGER: f32 = 0.1;
const CARD_FADE: f32 = 0.6;
const VOTER_STAGGER: f32 = 0.05;
const VOTER_POP: f32 = 0.4;

impl DashboardApp {
    pub fn draw_election(&mut self, ui: &mut egui::Ui, dt: f32) {
        self.list_clock += dt;
        self.voters_clock += dt;

        // Rank, reconcile the timeline, advance the clock. A change in
        // the selected election (or its counts) restarts the reveal via
        // the podium signature.
        let ranking = ranking::rank(&self.elections[self.selected_election].candidates);
        {
            let candidates = &self.elections[self.selected_election].candidates;
            self.reveal.sync(candidates, ranking::podium(&ranking));
        }

        if let Some(RevealEvent::WinnerSettled) = self.reveal.tick(dt) {
            self.bursts_fired += 1;
            let center = self
                .winner_rect
                .map(|r| [r.center().x, r.center().y]);
            let mut rng = BurstRng::new(0x0EED_5EED ^ self.bursts_fired.wrapping_mul(0x9E37));
            let burst = Burst::spawn(center, &mut rng);
            self.burst = (!burst.is_done()).then_some(burst);
        }
        if let Some(burst) = &mut self.burst {
            if !burst.update(dt) {
                self.burst = None;
            }
        }

        let mut selected_action: Option<usize> = None;
        let mut new_winner_rect: Option<egui::Rect> = None;

        {
            let elections = &self.elections;
            let election = &elections[self.selected_election];
            let reveal = &self.reveal;
            let voters = &self.voters;
            let list_clock = self.list_clock;
            let voters_clock = self.voters_clock;
            let selected = self.selected_election;

            egui::SidePanel::right("recent_voters")
                .resizable(false)
                .default_width(260.0)
                .show_inside(ui, |ui| {
                    draw_voters(ui, voters, voters_clock);
                });

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Elections Portal");
                ui.label(
                    egui::RichText::new("View ongoing elections and cast your vote")
                        .color(ui.visuals().weak_text_color()),
                );
                ui.add_space(12.0);

                selected_action = draw_election_cards(ui, elections, selected, list_clock);
                ui.add_space(16.0);

                new_winner_rect =
                    draw_leaderboard(ui, &election.candidates, &ranking, reveal);
                ui.add_space(16.0);

                draw_trending(ui, &election.candidates, &ranking);
            });

            if let Some(burst) = &self.burst {
                draw_burst(ui, burst);
            }
        }

        self.winner_rect = new_winner_rect;
        if let Some(i) = selected_action {
            if i != self.selected_election {
                self.selected_election = i;
                // The old celebration belongs to the old podium.
                self.burst = None;
            }
        }

        let cards_alive =
            self.list_clock < CARD_STAGGER * self.elections.len() as f32 + CARD_FADE;
        let voters_alive =
            self.voters_clock < VOTER_STAGGER * self.voters.len() as f32 + VOTER_POP;
        if self.reveal.is_animating() || self.burst.is_some() || cards_alive || voters_alive {
            ui.ctx().request_repaint();
        }
    }
}

// ─── Election cards ──────────────────────────────────────────────────────────

fn draw_election_cards(
    ui: &mut egui::Ui,
    elections: &[Election],
    selected: usize,
    clock: f32,
) -> Option<usize> {
    let gap = 12.0;
    let card_w = ((ui.available_width() - 2.0 * gap) / 3.0).clamp(180.0, 320.0);
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = gap;
        for (i, election) in elections.iter().enumerate() {
            let t = ((clock - i as f32 * CARD_STAGGER) / CARD_FADE).clamp(0.0, 1.0);
            let e = anim::ease_out_cubic(t);
            let lift = 20.0 * (1.0 - e);

            let (alloc, response) =
                ui.allocate_exact_size(egui::vec2(card_w, 110.0), egui::Sense::click());
            let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                clicked = Some(i);
            }
            let rect = alloc.translate(egui::vec2(0.0, lift));
            let painter = ui.painter();

            let border = if i == selected {
                egui::Stroke::new(2.0, status_color(election.status))
            } else {
                egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
            };
            painter.rect(
                rect,
                8.0,
                ui::with_opacity(ui.visuals().extreme_bg_color, e),
                egui::Stroke::new(border.width, ui::with_opacity(border.color, e)),
            );

            // Status pill + start date
            let pill = egui::Rect::from_min_size(
                rect.left_top() + egui::vec2(10.0, 10.0),
                egui::vec2(86.0, 18.0),
            );
            painter.rect_filled(
                pill,
                9.0,
                ui::with_opacity(status_color(election.status), e),
            );
            painter.text(
                pill.center(),
                egui::Align2::CENTER_CENTER,
                election.status.label(),
                egui::FontId::proportional(11.0),
                ui::with_opacity(egui::Color32::WHITE, e),
            );
            painter.text(
                rect.right_top() + egui::vec2(-10.0, 12.0),
                egui::Align2::RIGHT_TOP,
                election.start.format("%-m/%-d/%Y").to_string(),
                egui::FontId::proportional(11.0),
                ui::with_opacity(AXIS_COLOR, e),
            );

            painter.text(
                rect.left_top() + egui::vec2(10.0, 38.0),
                egui::Align2::LEFT_TOP,
                ui::truncate_str(&election.title, 38),
                egui::FontId::proportional(14.0),
                ui::with_opacity(ui.visuals().strong_text_color(), e),
            );

            painter.text(
                rect.left_bottom() + egui::vec2(10.0, -12.0),
                egui::Align2::LEFT_BOTTOM,
                format!(
                    "{} Candidates    ends {}",
                    election.candidates.len(),
                    election.end.format("%-m/%-d/%Y")
                ),
                egui::FontId::proportional(11.0),
                ui::with_opacity(AXIS_COLOR, e),
            );
        }
    });

    clicked
}

// ─── Leaderboard podium ──────────────────────────────────────────────────────

fn draw_leaderboard(
    ui: &mut egui::Ui,
    candidates: &[Candidate],
    ranking: &[RankedEntry],
    reveal: &RevealTimeline,
) -> Option<egui::Rect> {
    ui::section_title(ui, "\u{2605}", GOLD, "Leaderboard Champions");
    ui.add_space(4.0);

    let podium = ranking::podium(ranking);
    if podium.is_empty() {
        ui.label(
            egui::RichText::new("No candidates yet").color(ui.visuals().weak_text_color()),
        );
        return None;
    }

    let gap = 16.0;
    let card_w = ((ui.available_width() - 2.0 * gap - 8.0) / 3.0).clamp(160.0, 260.0);
    let card_h = 230.0;
    let (region, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), card_h + 60.0),
        egui::Sense::hover(),
    );
    // Cards overshoot and bob outside their resting bounds.
    let painter = ui.painter_at(region.expand(60.0));

    let total_w = card_w * podium.len() as f32 + gap * (podium.len() - 1) as f32;
    let start_x = region.center().x - total_w / 2.0;
    let mut winner_rect = None;

    for entry in podium {
        let Some(slot) = entry.slot else { continue };
        let Some(candidate) = candidates.get(entry.candidate) else { continue };
        let visual = reveal.visual(slot);
        if visual.opacity <= 0.0 {
            continue;
        }

        let rest = egui::Rect::from_min_size(
            egui::pos2(start_x + slot as f32 * (card_w + gap), region.top() + 40.0),
            egui::vec2(card_w, card_h),
        );
        draw_podium_card(&painter, rest, candidate, entry, slot, &visual);

        if slot == 0 {
            winner_rect =
                Some(rest.translate(egui::vec2(visual.offset[0], visual.offset[1])));
        }
    }

    winner_rect
}

fn draw_podium_card(
    painter: &egui::Painter,
    rest: egui::Rect,
    candidate: &Candidate,
    entry: &RankedEntry,
    slot: usize,
    visual: &SlotVisual,
) {
    let center = rest.center();
    let offset = egui::vec2(visual.offset[0], visual.offset[1]);
    let place = |p: egui::Pos2| -> egui::Pos2 {
        let scaled = center + (p - center) * visual.scale;
        ui::rotate_around(scaled, center, visual.rotation) + offset
    };
    // Anchor a point by its fractional position inside the card.
    let anchor =
        |u: f32, v: f32| place(rest.left_top() + egui::vec2(rest.width() * u, rest.height() * v));

    let alpha = visual.opacity;

    // Winner glow halo behind the card
    if visual.glow > 0.0 {
        let expand = 8.0 + 6.0 * visual.glow;
        let halo = rest.expand(expand);
        let corners = [
            halo.left_top(),
            halo.right_top(),
            halo.right_bottom(),
            halo.left_bottom(),
        ]
        .map(&place)
        .to_vec();
        painter.add(egui::Shape::convex_polygon(
            corners,
            ui::with_opacity(GOLD, 0.25 * visual.glow * alpha),
            egui::Stroke::NONE,
        ));
    }

    // Card body (rotated quad)
    let corners = [
        rest.left_top(),
        rest.right_top(),
        rest.right_bottom(),
        rest.left_bottom(),
    ]
    .map(&place)
    .to_vec();
    painter.add(egui::Shape::convex_polygon(
        corners,
        ui::with_opacity(CARD_FILL[slot], alpha),
        egui::Stroke::new(2.0, ui::with_opacity(CARD_BORDER[slot], alpha)),
    ));

    // Crown marker above the winner
    if slot == 0 {
        ui::draw_text(
            painter,
            anchor(0.5, -0.06),
            egui::Align2::CENTER_CENTER,
            "\u{265B}",
            24.0 * visual.scale,
            ui::with_opacity(GOLD, alpha),
            visual.rotation,
        );
    }

    // Rank badge
    painter.circle_filled(
        anchor(0.5, 0.14),
        20.0 * visual.scale,
        ui::with_opacity(BADGE_FILL[slot], alpha),
    );
    ui::draw_text(
        painter,
        anchor(0.5, 0.14),
        egui::Align2::CENTER_CENTER,
        &entry.rank.to_string(),
        18.0 * visual.scale,
        ui::with_opacity(egui::Color32::WHITE, alpha),
        visual.rotation,
    );

    // Avatar (initials fallback; no image pipeline)
    ui::initials_avatar(
        painter,
        anchor(0.5, 0.42),
        26.0 * visual.scale,
        &candidate.name,
        ui::with_opacity(egui::Color32::WHITE, alpha),
        ui::with_opacity(BADGE_FILL[slot], alpha),
    );

    ui::draw_text(
        painter,
        anchor(0.5, 0.60),
        egui::Align2::CENTER_CENTER,
        &candidate.name,
        15.0 * visual.scale,
        ui::with_opacity(egui::Color32::from_rgb(17, 24, 39), alpha),
        visual.rotation,
    );
    ui::draw_text(
        painter,
        anchor(0.5, 0.68),
        egui::Align2::CENTER_CENTER,
        &candidate.position,
        12.0 * visual.scale,
        ui::with_opacity(AXIS_COLOR, alpha),
        visual.rotation,
    );

    // Divider + vote counter
    painter.line_segment(
        [anchor(0.08, 0.76), anchor(0.92, 0.76)],
        egui::Stroke::new(1.0, ui::with_opacity(CARD_BORDER[slot], alpha)),
    );
    ui::draw_text(
        painter,
        anchor(0.08, 0.83),
        egui::Align2::LEFT_CENTER,
        "TOTAL VOTES",
        10.0 * visual.scale,
        ui::with_opacity(AXIS_COLOR, alpha),
        visual.rotation,
    );
    ui::draw_text(
        painter,
        anchor(0.92, 0.83),
        egui::Align2::RIGHT_CENTER,
        &visual.counter.to_string(),
        16.0 * visual.scale,
        ui::with_opacity(egui::Color32::from_rgb(17, 24, 39), alpha),
        visual.rotation,
    );

    // Progress bar grows with the counter
    let frac = if entry.votes > 0 {
        (visual.counter as f32 / entry.votes as f32).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let bar_quad = |from: f32, to: f32, v0: f32, v1: f32| {
        vec![
            anchor(from, v0),
            anchor(to, v0),
            anchor(to, v1),
            anchor(from, v1),
        ]
    };
    painter.add(egui::Shape::convex_polygon(
        bar_quad(0.08, 0.92, 0.90, 0.93),
        ui::with_opacity(egui::Color32::from_rgb(243, 244, 246), alpha),
        egui::Stroke::NONE,
    ));
    if frac > 0.0 {
        painter.add(egui::Shape::convex_polygon(
            bar_quad(0.08, 0.08 + 0.84 * frac, 0.90, 0.93),
            ui::with_opacity(BADGE_FILL[slot], alpha),
            egui::Stroke::NONE,
        ));
    }

    // Shine sweep across the winner card, clipped to the card face
    if let Some(p) = visual.shine {
        let x = anim::lerp(-0.4, 1.4, p);
        let left = x.clamp(0.0, 1.0);
        let right = (x + 0.18).clamp(0.0, 1.0);
        if right > left {
            let shear = 0.12;
            painter.add(egui::Shape::convex_polygon(
                vec![
                    anchor(left + shear, 0.0),
                    anchor(right + shear, 0.0),
                    anchor(right - shear, 1.0),
                    anchor(left - shear, 1.0),
                ],
                ui::with_opacity(egui::Color32::WHITE, 0.35 * alpha),
                egui::Stroke::NONE,
            ));
        }
    }
}

// ─── Particle burst overlay ──────────────────────────────────────────────────

fn draw_burst(ui: &egui::Ui, burst: &Burst) {
    let painter = ui.ctx().layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("celebration_burst"),
    ));

    for particle in &burst.particles {
        let opacity = particle.opacity();
        if opacity <= 0.0 {
            continue;
        }
        let [x, y] = particle.pos();
        let pos = egui::pos2(x, y);
        let color = ui::tint(particle.color, opacity);
        let size = particle.render_size();

        match particle.shape {
            ParticleShape::Circle => {
                painter.circle_filled(pos, size / 2.0, color);
            }
            ParticleShape::Square => {
                let half = size / 2.0;
                let corners = [
                    egui::pos2(pos.x - half, pos.y - half),
                    egui::pos2(pos.x + half, pos.y - half),
                    egui::pos2(pos.x + half, pos.y + half),
                    egui::pos2(pos.x - half, pos.y + half),
                ]
                .map(|p| ui::rotate_around(p, pos, particle.rotation()))
                .to_vec();
                painter.add(egui::Shape::convex_polygon(
                    corners,
                    color,
                    egui::Stroke::NONE,
                ));
            }
            ParticleShape::Triangle => {
                let half = size / 2.0;
                let corners = [
                    egui::pos2(pos.x, pos.y - half),
                    egui::pos2(pos.x + half, pos.y + half),
                    egui::pos2(pos.x - half, pos.y + half),
                ]
                .map(|p| ui::rotate_around(p, pos, particle.rotation()))
                .to_vec();
                painter.add(egui::Shape::convex_polygon(
                    corners,
                    color,
                    egui::Stroke::NONE,
                ));
            }
        }
    }
}

// ─── Trending votes chart ────────────────────────────────────────────────────

fn draw_trending(ui: &mut egui::Ui, candidates: &[Candidate], ranking: &[RankedEntry]) {
    ui.horizontal(|ui| {
        ui::section_title(
            ui,
            "\u{2197}",
            egui::Color32::from_rgb(59, 130, 246),
            "Voting Trends",
        );
        if let Some(leader) = ranking.first().and_then(|e| candidates.get(e.candidate)) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui::badge(ui, &format!("{} is leading", leader.name), GOLD);
            });
        }
    });
    ui.add_space(4.0);

    let width = ui.available_width();
    let config = ChartConfig::for_width(width);
    let series = chart::build_trend(candidates, config.breakpoint);
    if series.is_empty() {
        ui.label(
            egui::RichText::new("No voting data available")
                .color(ui.visuals().weak_text_color()),
        );
        return;
    }

    let height = chart::optimal_height(width);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let legend_h = 22.0;
    let (legend_y, plot_top_extra, plot_bottom_extra) = match config.legend {
        LegendPosition::Top => (rect.top() + 4.0, legend_h, 0.0),
        LegendPosition::Bottom => (rect.bottom() - legend_h + 4.0, 0.0, legend_h),
    };

    let plot = egui::Rect::from_min_max(
        rect.min
            + egui::vec2(
                config.y_axis_width + config.margin.left,
                config.margin.top + plot_top_extra,
            ),
        rect.max
            - egui::vec2(
                config.margin.right,
                config.x_axis_height + config.margin.bottom + plot_bottom_extra,
            ),
    );

    let max_count = series.max_count().max(1) as f32 * 1.1;

    // Horizontal grid + y ticks
    for step in 0..=4 {
        let frac = step as f32 / 4.0;
        let y = plot.bottom() - plot.height() * frac;
        painter.extend(egui::Shape::dashed_line(
            &[egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            egui::Stroke::new(1.0, GRID_COLOR),
            3.0,
            3.0,
        ));
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{}", (frac * max_count) as u32),
            egui::FontId::proportional(config.y_tick_size),
            AXIS_COLOR,
        );
    }

    let n = series.points.len();
    let x_at = |i: usize| {
        if n <= 1 {
            plot.center().x
        } else {
            plot.left() + plot.width() * i as f32 / (n - 1) as f32
        }
    };
    let y_at = |count: u32| plot.bottom() - plot.height() * (count as f32 / max_count);

    // X tick labels, tilted on narrow viewports
    for (i, point) in series.points.iter().enumerate() {
        let pos = egui::pos2(x_at(i), plot.bottom() + 6.0);
        if config.x_tick_angle != 0.0 {
            ui::draw_text(
                &painter,
                pos,
                egui::Align2::RIGHT_TOP,
                &point.label,
                config.x_tick_size,
                AXIS_COLOR,
                config.x_tick_angle.to_radians(),
            );
        } else {
            painter.text(
                pos,
                egui::Align2::CENTER_TOP,
                &point.label,
                egui::FontId::proportional(config.x_tick_size),
                AXIS_COLOR,
            );
        }
    }

    // One area series per candidate; the display-safe name is the key.
    for (si, name) in series.names.iter().enumerate() {
        let color = ui::tint(SERIES_PALETTE[si % SERIES_PALETTE.len()], 1.0);
        let points: Vec<(usize, u32)> = series
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.counts.get(si).copied().flatten().map(|c| (i, c)))
            .collect();
        if points.is_empty() {
            continue;
        }

        // Gradient-style fill, one trapezoid per segment
        for pair in points.windows(2) {
            let (i0, c0) = pair[0];
            let (i1, c1) = pair[1];
            painter.add(egui::Shape::convex_polygon(
                vec![
                    egui::pos2(x_at(i0), y_at(c0)),
                    egui::pos2(x_at(i1), y_at(c1)),
                    egui::pos2(x_at(i1), plot.bottom()),
                    egui::pos2(x_at(i0), plot.bottom()),
                ],
                ui::with_opacity(color, 0.12),
                egui::Stroke::NONE,
            ));
        }

        let line: Vec<egui::Pos2> = points
            .iter()
            .map(|&(i, c)| egui::pos2(x_at(i), y_at(c)))
            .collect();
        painter.add(egui::Shape::line(
            line.clone(),
            egui::Stroke::new(config.stroke_width, color),
        ));
        for pos in &line {
            painter.circle(
                *pos,
                config.dot_radius,
                egui::Color32::WHITE,
                egui::Stroke::new(1.0, color),
            );
        }

        // Legend entry
        let legend_x = plot.left() + si as f32 * (plot.width() / series.names.len() as f32);
        painter.circle_filled(egui::pos2(legend_x, legend_y + 8.0), 4.0, color);
        painter.text(
            egui::pos2(legend_x + 10.0, legend_y + 8.0),
            egui::Align2::LEFT_CENTER,
            name,
            egui::FontId::proportional(config.legend_size),
            AXIS_COLOR,
        );
    }

    // Hover tooltip: full date and the untruncated candidate names, so
    // the tooltip always agrees with the series keys.
    if let Some(pointer) = response.hover_pos() {
        if plot.contains(pointer) && n > 0 {
            let i = if n <= 1 {
                0
            } else {
                (((pointer.x - plot.left()) / plot.width() * (n - 1) as f32).round() as usize)
                    .min(n - 1)
            };
            let point = &series.points[i];

            painter.extend(egui::Shape::dashed_line(
                &[
                    egui::pos2(x_at(i), plot.top()),
                    egui::pos2(x_at(i), plot.bottom()),
                ],
                egui::Stroke::new(1.0, egui::Color32::from_rgb(156, 163, 175)),
                3.0,
                3.0,
            ));

            let line_h = 16.0;
            let panel_size = egui::vec2(190.0, 26.0 + line_h * series.names.len() as f32);
            let panel_pos = egui::pos2(
                (pointer.x + 14.0).min(rect.right() - panel_size.x - 4.0),
                (pointer.y - panel_size.y / 2.0)
                    .clamp(rect.top() + 4.0, rect.bottom() - panel_size.y - 4.0),
            );
            let panel = egui::Rect::from_min_size(panel_pos, panel_size);
            painter.rect(
                panel,
                6.0,
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, 242),
                egui::Stroke::new(1.0, GRID_COLOR),
            );
            painter.text(
                panel.left_top() + egui::vec2(10.0, 6.0),
                egui::Align2::LEFT_TOP,
                &point.full_label,
                egui::FontId::proportional(12.0),
                egui::Color32::from_rgb(31, 41, 55),
            );
            for (si, full_name) in series.full_names.iter().enumerate() {
                let y = panel.top() + 24.0 + line_h * si as f32;
                let color = ui::tint(SERIES_PALETTE[si % SERIES_PALETTE.len()], 1.0);
                painter.circle_filled(egui::pos2(panel.left() + 14.0, y + 5.0), 4.0, color);
                let value = point
                    .counts
                    .get(si)
                    .copied()
                    .flatten()
                    .map_or_else(|| "-".to_string(), |c| c.to_string());
                painter.text(
                    egui::pos2(panel.left() + 24.0, y),
                    egui::Align2::LEFT_TOP,
                    format!("{}: {}", full_name, value),
                    egui::FontId::proportional(11.0),
                    AXIS_COLOR,
                );
            }
        }
    }
}

// ─── Recent voters ───────────────────────────────────────────────────────────

fn draw_voters(ui: &mut egui::Ui, voters: &[Voter], clock: f32) {
    ui::section_title(ui, "\u{2714}", GREEN, "Recent Voters");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .max_height(320.0)
        .show(ui, |ui| {
            for (i, voter) in voters.iter().enumerate() {
                let t = ((clock - i as f32 * VOTER_STAGGER) / VOTER_POP).clamp(0.0, 1.0);
                let e = anim::ease_out_back(t, 1.7);
                let scale = 0.8 + 0.2 * e;

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 48.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(rect);
                painter.rect_filled(
                    rect,
                    6.0,
                    ui::with_opacity(ui.visuals().faint_bg_color, t),
                );
                ui::initials_avatar(
                    &painter,
                    rect.left_center() + egui::vec2(22.0, 0.0),
                    15.0 * scale,
                    &voter.name,
                    ui::with_opacity(egui::Color32::from_rgb(59, 130, 246), t),
                    ui::with_opacity(egui::Color32::WHITE, t),
                );
                painter.text(
                    rect.left_top() + egui::vec2(44.0, 8.0),
                    egui::Align2::LEFT_TOP,
                    &voter.name,
                    egui::FontId::proportional(13.0),
                    ui::with_opacity(ui.visuals().strong_text_color(), t),
                );
                painter.text(
                    rect.left_bottom() + egui::vec2(44.0, -8.0),
                    egui::Align2::LEFT_BOTTOM,
                    voter
                        .timestamp
                        .with_timezone(&chrono::Local)
                        .format("%-I:%M:%S %p")
                        .to_string(),
                    egui::FontId::proportional(11.0),
                    ui::with_opacity(AXIS_COLOR, t),
                );
                ui.add_space(2.0);
            }
        });
}
