//! `DashboardApp` — the top-level egui application state.
//!
//! This module declares the `DashboardApp` struct, the view switcher
//! and the frame loop. The views are split across the sibling
//! sub-modules:
//!
//! - `directory`  — searchable student table
//! - `profile`    — per-student detail view
//! - `attendance` — statistics panel with painted charts
//! - `election`   — election portal with the animated leaderboard

pub mod attendance;
pub mod directory;
pub mod election;
pub mod profile;

use std::time::Instant;

use chrono::NaiveDate;
use eframe::egui;

use homeroom::data;
use homeroom::directory::DirectoryFilter;
use homeroom::election::particles::Burst;
use homeroom::election::reveal::RevealTimeline;
use homeroom::model::{Election, Student, Voter, WeeklyRate};

// ─── Application state ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Directory,
    /// Profile of the student with this id.
    Profile(String),
    Attendance,
    Election,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsTab {
    Overview,
    Daily,
    Trends,
}

pub struct DashboardApp {
    pub view: View,

    // Data snapshots (in-memory only; nothing here is persisted)
    pub students: Vec<Student>,
    pub elections: Vec<Election>,
    pub voters: Vec<Voter>,
    pub weekly: Vec<WeeklyRate>,

    // Directory state
    pub filter: DirectoryFilter,

    // Attendance state
    pub stats_tab: StatsTab,
    pub attendance_date: NaiveDate,

    // Election state
    pub selected_election: usize,
    pub reveal: RevealTimeline,
    pub burst: Option<Burst>,
    /// Seed counter so consecutive bursts differ.
    pub bursts_fired: u64,
    /// Winner card bounds from the last painted frame; the burst spawns
    /// at its centroid.
    pub winner_rect: Option<egui::Rect>,
    /// Clock for the election-cards staggered fade-in.
    pub list_clock: f32,
    /// Clock for the voters-list staggered scale-in.
    pub voters_clock: f32,

    pub last_frame: Instant,
}

impl Default for DashboardApp {
    fn default() -> Self {
        let students = data::seed_students();
        let elections = data::seed_elections();
        let voters = data::seed_voters();
        log::info!(
            "seeded {} students, {} elections, {} voters",
            students.len(),
            elections.len(),
            voters.len()
        );
        Self {
            view: View::Directory,
            students,
            elections,
            voters,
            weekly: data::weekly_trend(),
            filter: DirectoryFilter::default(),
            stats_tab: StatsTab::Overview,
            attendance_date: chrono::Local::now().date_naive(),
            selected_election: 0,
            reveal: RevealTimeline::new(),
            burst: None,
            bursts_fired: 0,
            winner_rect: None,
            list_clock: 0.0,
            voters_clock: 0.0,
            last_frame: Instant::now(),
        }
    }
}

impl DashboardApp {
    /// Switch the main view, cancelling any animation owned by the view
    /// being left so no stale tween ever touches a new frame.
    pub fn open_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        self.burst = None;
        self.winner_rect = None;
        if view == View::Election {
            // Re-run the reveal from scratch on every entry.
            self.reveal = RevealTimeline::new();
            self.list_clock = 0.0;
            self.voters_clock = 0.0;
        }
        self.view = view;
    }

    fn draw_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Homeroom")
                    .size(18.0)
                    .strong()
                    .color(egui::Color32::from_rgb(59, 130, 246)),
            );
            ui.separator();

            let directory_active =
                matches!(self.view, View::Directory | View::Profile(_));
            if ui.selectable_label(directory_active, "Students").clicked() {
                self.open_view(View::Directory);
            }
            if ui
                .selectable_label(self.view == View::Attendance, "Attendance")
                .clicked()
            {
                self.open_view(View::Attendance);
            }
            if ui
                .selectable_label(self.view == View::Election, "Elections")
                .clicked()
            {
                self.open_view(View::Election);
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_nav(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.view.clone() {
            View::Directory => self.draw_directory(ui),
            View::Profile(id) => self.draw_profile(ui, &id),
            View::Attendance => self.draw_attendance(ui),
            View::Election => self.draw_election(ui, dt),
        });
    }
}
